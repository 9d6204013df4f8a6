//! Plugin reference handling for pipeline build steps.
//!
//! Parses declarative plugin references of the form
//! `[scheme://][user@]host-and-path[#version]` into descriptors, derives the
//! deterministic identifiers used for on-disk checkout caching, and encodes
//! plugin configuration as `BUILDKITE_PLUGIN_*` environment variables for
//! hook scripts.

pub mod error;
pub mod plugin;

pub use error::{PluginError, Result};
pub use plugin::{ConfigValue, Configuration, Plugin};
