#![no_main]

use libfuzzer_sys::fuzz_target;

use component_hint::domain::entities::{AssetCategory, Manifest};

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Manifest parsing must never panic
        if let Ok(manifest) = Manifest::from_json(content) {
            let defaults = vec!["index.js".to_string()];
            for category in AssetCategory::ALL {
                let _ = manifest.declared_files(category, &defaults).len();
            }
        }
    }
});
