//! Configuration-to-environment encoding for plugin hook scripts.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::warn;

use crate::plugin::parser::json_kind;
use crate::plugin::types::{ConfigValue, Plugin};

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static DASH_OR_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"-|\s+").unwrap());
static UNDERSCORE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"_+").unwrap());

/// Prefix shared by every exported plugin configuration variable.
const ENV_PREFIX: &str = "BUILDKITE_PLUGIN";

impl Plugin {
    /// Encode the plugin configuration as `VAR=value` assignments for the
    /// hook process environment.
    ///
    /// The list is sorted before it is returned, so the output is stable
    /// regardless of mapping iteration order. Unsupported value types are
    /// dropped with a warning; encoding never aborts.
    pub fn configuration_to_env(&self) -> Vec<String> {
        let name = self.name();
        let mut env = Vec::new();

        for (key, value) in &self.configuration {
            let variable = env_name(&name, key);
            match value {
                ConfigValue::String(s) => env.push(format!("{variable}={s}")),
                ConfigValue::Number(n) => env.push(format!("{variable}={n:.6}")),
                ConfigValue::StringList(items) => {
                    for (index, item) in items.iter().enumerate() {
                        env.push(format!("{variable}_{index}={item}"));
                    }
                }
                ConfigValue::NumberList(items) => {
                    for (index, item) in items.iter().enumerate() {
                        env.push(format!("{variable}_{index}={item:.6}"));
                    }
                }
                ConfigValue::Unsupported(raw) => {
                    warn!(
                        key = %key,
                        kind = json_kind(raw),
                        "unsupported plugin configuration value"
                    );
                }
            }
        }

        env.sort();
        env
    }
}

/// Environment variable name for a configuration key:
/// `BUILDKITE_PLUGIN_<NAME>_<KEY>`, upper-cased, with every dash or
/// whitespace run folded to a single underscore.
fn env_name(plugin_name: &str, key: &str) -> String {
    let key = WHITESPACE_RUN.replace_all(key, " ");
    let candidate = format!("{ENV_PREFIX}_{plugin_name}_{key}");
    let name = DASH_OR_WHITESPACE
        .replace_all(&candidate, "_")
        .to_uppercase();
    UNDERSCORE_RUN.replace_all(&name, "_").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plugin::types::Configuration;
    use serde_json::json;

    fn plugin(reference: &str, configuration: serde_json::Value) -> Plugin {
        let configuration: Configuration = serde_json::from_value(configuration).unwrap();
        Plugin::parse(reference, configuration).unwrap()
    }

    #[test]
    fn test_strings_and_lists_sorted() {
        let p = plugin(
            "github.com/org/example",
            json!({"name": "value", "flags": ["a", "b"]}),
        );
        assert_eq!(
            p.configuration_to_env(),
            vec![
                "BUILDKITE_PLUGIN_EXAMPLE_FLAGS_0=a",
                "BUILDKITE_PLUGIN_EXAMPLE_FLAGS_1=b",
                "BUILDKITE_PLUGIN_EXAMPLE_NAME=value",
            ]
        );
    }

    #[test]
    fn test_numbers_render_with_six_fractional_digits() {
        let p = plugin(
            "github.com/org/example",
            json!({"retries": 3, "timeouts": [1, 2.5]}),
        );
        assert_eq!(
            p.configuration_to_env(),
            vec![
                "BUILDKITE_PLUGIN_EXAMPLE_RETRIES=3.000000",
                "BUILDKITE_PLUGIN_EXAMPLE_TIMEOUTS_0=1.000000",
                "BUILDKITE_PLUGIN_EXAMPLE_TIMEOUTS_1=2.500000",
            ]
        );
    }

    #[test]
    fn test_key_normalization() {
        let p = plugin(
            "github.com/org/docker-compose-buildkite-plugin",
            json!({"config-file": "a.yml", "build  args": "x"}),
        );
        assert_eq!(
            p.configuration_to_env(),
            vec![
                "BUILDKITE_PLUGIN_DOCKER_COMPOSE_BUILD_ARGS=x",
                "BUILDKITE_PLUGIN_DOCKER_COMPOSE_CONFIG_FILE=a.yml",
            ]
        );
    }

    #[test]
    fn test_unsupported_values_are_dropped() {
        let p = plugin(
            "github.com/org/example",
            json!({"ok": "yes", "nested": {"a": 1}, "flag": true}),
        );
        assert_eq!(
            p.configuration_to_env(),
            vec!["BUILDKITE_PLUGIN_EXAMPLE_OK=yes"]
        );
    }

    #[test]
    fn test_empty_configuration() {
        let p = plugin("github.com/org/example", json!({}));
        assert!(p.configuration_to_env().is_empty());
    }
}
