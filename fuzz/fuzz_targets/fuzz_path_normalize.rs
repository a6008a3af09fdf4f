#![no_main]

use std::path::Path;

use libfuzzer_sys::fuzz_target;

use component_hint::domain::value_objects::path;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        let once = path::normalize(Path::new(s));
        assert_eq!(path::normalize(&once), once);
        let _ = path::relative_to(Path::new("/repo/app"), &path::resolve(Path::new("/repo"), &once));
    }
});
