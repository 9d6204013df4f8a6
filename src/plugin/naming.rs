//! Name, label, and identifier derivation.
//!
//! These are ordered character-class transforms; the step order is part of
//! the contract, since downstream consumers (environment variable names,
//! checkout directory names) must be reproducible.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::plugin::types::Plugin;

static WHITESPACE_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static NON_ALPHANUMERIC: Lazy<Regex> = Lazy::new(|| Regex::new(r"[^a-zA-Z0-9]").unwrap());
static DASH_RUN: Lazy<Regex> = Lazy::new(|| Regex::new(r"-+").unwrap());

/// Suffix conventionally carried by plugin repository names, stripped from
/// the derived name so `docker-compose-buildkite-plugin` reads
/// `docker-compose`.
const REPOSITORY_SUFFIX: &str = "-buildkite-plugin";

impl Plugin {
    /// Human-readable name: the last path segment of the location, lowered
    /// and reduced to `[a-z0-9-]`, with the conventional repository suffix
    /// stripped. Used as an environment-variable-name fragment; not
    /// guaranteed unique.
    pub fn name(&self) -> String {
        if self.location.is_empty() {
            return String::new();
        }

        let last = self.location.rsplit('/').next().unwrap_or("");
        let name = last.to_lowercase();
        let name = WHITESPACE_RUN.replace_all(&name, " ");
        let name = NON_ALPHANUMERIC.replace_all(&name, "-");
        match name.strip_suffix(REPOSITORY_SUFFIX) {
            Some(stripped) => stripped.to_string(),
            None => name.into_owned(),
        }
    }

    /// Display and deduplication key: `location#version`, or the location
    /// alone when no version is pinned. Two descriptors are the same plugin
    /// instance iff their labels are equal.
    pub fn label(&self) -> String {
        if self.version.is_empty() {
            self.location.clone()
        } else {
            format!("{}#{}", self.location, self.version)
        }
    }

    /// Filesystem-safe checkout directory name, a pure function of the
    /// label: equal labels share one checkout on disk.
    pub fn identifier(&self) -> String {
        let label = self.label();
        let id = NON_ALPHANUMERIC.replace_all(&label, "-");
        let id = DASH_RUN.replace_all(&id, "-");
        id.trim_matches('-').to_string()
    }
}
