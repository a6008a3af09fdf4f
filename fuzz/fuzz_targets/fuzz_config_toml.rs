#![no_main]

use std::path::Path;

use component_hint::config::parse_with_warnings;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(content) = std::str::from_utf8(data) else {
        return;
    };
    let Ok((_, warnings)) = parse_with_warnings(content, Path::new(".component-hint.toml")) else {
        return;
    };

    let lines = content.lines().count();
    for warning in &warnings {
        if let Some(line) = warning.line {
            assert!(line >= 1 && line <= lines);
        }
        let _ = warning.to_string();
    }
});
