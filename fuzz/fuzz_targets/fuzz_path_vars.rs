#![no_main]

use libfuzzer_sys::fuzz_target;
use stagehand::domain::value_objects::replace_path_vars_strict;
use stagehand::{generate_context, replace_path_vars, ContextSpec};

fuzz_target!(|data: &[u8]| {
    if let Ok(template) = std::str::from_utf8(data) {
        let context = generate_context(ContextSpec::rooted("/fuzz/app"));

        // Substitution should never panic, and the two policies agree when
        // strict accepts the template
        let lenient = replace_path_vars(&context, template);
        if let Ok(strict) = replace_path_vars_strict(&context, template) {
            assert_eq!(strict, lenient);
        }
    }
});
