use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single plugin configuration value, resolved from JSON once at decode
/// time.
///
/// Variants are tried in declaration order. Anything that is not a string,
/// a number, or a homogeneous list of one of those (objects, booleans,
/// null, mixed or nested arrays) lands in `Unsupported` and is dropped with
/// a diagnostic when the configuration is encoded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ConfigValue {
    String(String),
    Number(f64),
    StringList(Vec<String>),
    NumberList(Vec<f64>),
    Unsupported(serde_json::Value),
}

/// Plugin configuration, keyed by option name. A `BTreeMap` so key order is
/// stable regardless of how the source JSON happened to be written.
pub type Configuration = BTreeMap<String, ConfigValue>;

/// A parsed plugin reference from a pipeline definition.
///
/// Descriptors are immutable value objects: constructed once via
/// [`Plugin::parse`] or [`Plugin::from_json`], then consumed by the checkout
/// layer (repository + identifier) and the job bootstrap (environment
/// encoding).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Plugin {
    /// Where the plugin can be found: host+path, or a filesystem path.
    /// Never contains `#`.
    pub location: String,

    /// The pinned version, taken from the `#`-delimited fragment of the
    /// reference. Empty when no version was given.
    pub version: String,

    /// The clone scheme. Empty means the default secure transport (https).
    pub scheme: String,

    /// Authentication embedded in the reference (`user` or `user:password`).
    pub authentication: String,

    /// Configuration for the plugin.
    pub configuration: Configuration,
}
