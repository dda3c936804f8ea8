#![no_main]

use libfuzzer_sys::fuzz_target;
use stagehand::ChangeEvent;

fuzz_target!(|data: &[u8]| {
    if let Ok(name) = std::str::from_utf8(data) {
        // Parsed names render back to a name that parses to the same event
        if let Ok(event) = name.parse::<ChangeEvent>() {
            assert_eq!(event.as_str().parse::<ChangeEvent>().ok(), Some(event));
        }
    }
});
