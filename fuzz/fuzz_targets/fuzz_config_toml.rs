#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Fuzz task config parsing - this should never panic
        let _ = toml::from_str::<stagehand::CopyConfig>(content);
        let _ = toml::from_str::<stagehand::StagesConfig>(content);
    }
});
