//! Reserved filesystem locations.
//!
//! Build policy can declare areas of the filesystem off-limits for task
//! outputs, such as the tool's own metadata directories. The validation
//! engine consumes the policy as a predicate; [`ReservedLocations`] is the
//! standard implementation, combining reserved root directories (matched by
//! path ancestry) with glob patterns. The policy can be loaded from a YAML
//! file or assembled programmatically.

use crate::error::{PropvetError, Result};
use globset::{Glob, GlobSet, GlobSetBuilder};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Policy predicate deciding whether a path is off-limits for outputs.
pub trait ReservedLocationPolicy: Send + Sync {
    /// Whether the given path lies in a reserved location.
    fn is_reserved(&self, path: &Path) -> bool;
}

/// Serde model for the on-disk reserved-location policy file.
///
/// Unknown fields are ignored for forward compatibility; both lists default
/// to empty, which reserves nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ReservedLocationConfig {
    /// Directories whose entire subtree is reserved.
    pub reserved_roots: Vec<PathBuf>,
    /// Glob patterns matched against the full path (forward slashes).
    pub reserved_globs: Vec<String>,
}

impl ReservedLocationConfig {
    /// Load the policy config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(ReservedLocationConfig)` - Parsed config
    /// * `Err(PropvetError::Policy)` - If the file cannot be read or parsed
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            PropvetError::Policy(format!(
                "failed to read policy file '{}': {}",
                path.display(),
                e
            ))
        })?;

        serde_yaml::from_str(&content).map_err(|e| {
            PropvetError::Policy(format!("invalid policy file '{}': {}", path.display(), e))
        })
    }
}

/// Compiled reserved-location set.
#[derive(Debug)]
pub struct ReservedLocations {
    roots: Vec<PathBuf>,
    globs: GlobSet,
}

impl ReservedLocations {
    /// An empty set: no path is reserved.
    pub fn empty() -> Self {
        Self {
            roots: Vec::new(),
            globs: GlobSet::empty(),
        }
    }

    /// Compile a reserved-location set from its config.
    ///
    /// # Returns
    ///
    /// * `Ok(ReservedLocations)` - Compiled set
    /// * `Err(PropvetError::Policy)` - If any glob pattern fails to compile
    pub fn from_config(config: &ReservedLocationConfig) -> Result<Self> {
        Ok(Self {
            roots: config.reserved_roots.clone(),
            globs: build_globset(&config.reserved_globs)?,
        })
    }

    /// Reserve the entire subtree under a root directory.
    pub fn with_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.roots.push(root.into());
        self
    }
}

impl ReservedLocationPolicy for ReservedLocations {
    fn is_reserved(&self, path: &Path) -> bool {
        if self.roots.iter().any(|root| path.starts_with(root)) {
            return true;
        }
        self.globs.is_match(normalize_path(path))
    }
}

/// Build a GlobSet from reserved-location patterns.
fn build_globset(patterns: &[String]) -> Result<GlobSet> {
    let mut builder = GlobSetBuilder::new();

    for pattern in patterns {
        let normalized = pattern.trim().replace('\\', "/");
        if normalized.is_empty() {
            continue;
        }
        let glob = Glob::new(&normalized).map_err(|e| {
            PropvetError::Policy(format!(
                "invalid reserved-location glob '{}': {}",
                pattern, e
            ))
        })?;
        builder.add(glob);
    }

    builder
        .build()
        .map_err(|e| PropvetError::Policy(format!("failed to compile reserved-location globs: {}", e)))
}

/// Normalize a path to forward slashes for glob matching.
fn normalize_path(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}
