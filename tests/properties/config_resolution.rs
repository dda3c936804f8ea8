//! Property tests for config resolution.

use std::fs;

use proptest::prelude::*;
use tempfile::tempdir;

use stagehand::config::{
    fill_config_defaults, supplied_table, ConfigInputs, CopyConfig, CopyOptions,
};
use stagehand::domain::value_objects::{generate_context, ContextSpec};

fn template() -> impl Strategy<Value = String> {
    proptest::string::string_regex("(\\{\\{(SRC|WWW|ROOT)\\}\\}/)?[a-z0-9_-]{1,12}").unwrap()
}

fn copy_config() -> impl Strategy<Value = CopyConfig> {
    let entry = (template(), template(), proptest::collection::vec("[a-z*.]{1,6}", 0..3))
        .prop_map(|(src, dest, filter)| CopyOptions::new(src, dest).with_filter(filter));
    (proptest::collection::vec(entry, 1..4), any::<bool>()).prop_map(|(include, strict_tokens)| {
        CopyConfig {
            include,
            strict_tokens,
        }
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 32,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A supplied config wins over file, CLI and env layers.
    #[test]
    fn property_supplied_config_always_wins(
        supplied in copy_config(),
        with_file in any::<bool>(),
        with_cli in any::<bool>(),
        with_env in any::<bool>(),
    ) {
        let dir = tempdir().unwrap();
        let ctx = generate_context(ContextSpec::rooted(dir.path()));
        let other = "strict_tokens = false\n[[include]]\nsrc = \"other\"\ndest = \"elsewhere\"\n";

        let mut inputs = ConfigInputs::empty();
        if with_file {
            fs::write(dir.path().join("copy.config.toml"), other).unwrap();
        }
        if with_cli {
            fs::write(dir.path().join("cli.toml"), other).unwrap();
            inputs = inputs.with_args(["--copy", "cli.toml"]);
        }
        if with_env {
            fs::write(dir.path().join("env.toml"), other).unwrap();
            inputs = inputs.with_env("STAGEHAND_COPY", "env.toml");
        }

        let table = supplied_table("copy", &supplied).unwrap();
        let resolved = fill_config_defaults::<CopyConfig>(&ctx, Some(&table), &inputs).unwrap();

        prop_assert_eq!(resolved.config, supplied);
    }

    /// PROPERTY: Resolving twice with the same inputs yields equal configs.
    #[test]
    fn property_resolution_is_deterministic(supplied in copy_config(), with_file in any::<bool>()) {
        let dir = tempdir().unwrap();
        let ctx = generate_context(ContextSpec::rooted(dir.path()));
        if with_file {
            let body = toml::to_string(&supplied).unwrap();
            fs::write(dir.path().join("copy.config.toml"), body).unwrap();
        }

        let inputs = ConfigInputs::empty();
        let first = fill_config_defaults::<CopyConfig>(&ctx, None, &inputs).unwrap();
        let second = fill_config_defaults::<CopyConfig>(&ctx, None, &inputs).unwrap();

        prop_assert_eq!(first, second);
    }
}
