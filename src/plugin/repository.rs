//! Repository boundary resolution for plugin locations.

use crate::error::{PluginError, Result};
use crate::plugin::types::Plugin;

/// Hosting domains whose repositories are always exactly `host/org/repo`.
const KNOWN_HOSTS: [&str; 3] = ["github.com", "bitbucket.org", "gitlab.com"];

/// Segment suffix marking the repository boundary on other hosts.
const REPOSITORY_MARKER: &str = ".git";

impl Plugin {
    /// The clone target for the repository the plugin lives in: the
    /// repository root with authentication and scheme applied. Absolute
    /// filesystem paths are returned as-is.
    pub fn repository(&self) -> Result<String> {
        let mut repository = self.repository_root()?;

        if !self.authentication.is_empty() {
            repository = format!("{}@{}", self.authentication, repository);
        }

        if !repository.starts_with('/') {
            if self.scheme.is_empty() {
                repository = format!("https://{repository}");
            } else {
                repository = format!("{}://{}", self.scheme, repository);
            }
        }

        Ok(repository)
    }

    /// Path of the plugin within its repository; empty when the reference
    /// points at the repository root itself.
    pub fn repository_subdirectory(&self) -> Result<String> {
        let root = self.repository_root()?;
        let subdirectory = self.location.strip_prefix(&root).unwrap_or("");
        Ok(subdirectory.trim_start_matches('/').to_string())
    }

    /// Canonical repository boundary within the location path.
    fn repository_root(&self) -> Result<String> {
        if self.location.is_empty() {
            return Err(PluginError::MissingLocation);
        }

        let segments: Vec<&str> = self.location.split('/').collect();
        if segments.len() < 2 {
            return Err(PluginError::IncompletePath {
                location: self.location.clone(),
            });
        }

        if KNOWN_HOSTS.contains(&segments[0]) {
            if segments.len() < 3 {
                return Err(PluginError::IncompleteHostPath {
                    host: segments[0].to_string(),
                    location: self.location.clone(),
                });
            }
            return Ok(segments[..3].join("/"));
        }

        // Elsewhere the boundary is the first `.git`-suffixed segment,
        // inclusive; without one the whole path is the repository.
        let boundary = segments
            .iter()
            .position(|segment| segment.ends_with(REPOSITORY_MARKER))
            .map(|index| index + 1)
            .unwrap_or(segments.len());
        Ok(segments[..boundary].join("/"))
    }
}
