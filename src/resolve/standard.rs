//! Default path resolver anchored at a base directory.

use std::env;
use std::path::{Path, PathBuf};

use super::{NotationError, PathResolver, RawValue, ResolveError};

/// Resolver that interprets notations relative to a fixed base directory.
///
/// Relative paths and text notations are joined onto the base; absolute
/// ones pass through unchanged. The base must be absolute so that every
/// resolved path is absolute.
#[derive(Debug, Clone)]
pub struct StandardResolver {
    base: PathBuf,
}

impl StandardResolver {
    /// Create a resolver anchored at the given base directory.
    pub fn new(base: impl Into<PathBuf>) -> Self {
        Self { base: base.into() }
    }

    /// Create a resolver anchored at the process working directory.
    pub fn from_current_dir() -> std::io::Result<Self> {
        Ok(Self::new(env::current_dir()?))
    }

    /// The base directory notations are resolved against.
    pub fn base(&self) -> &Path {
        &self.base
    }

    fn anchor(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base.join(path)
        }
    }
}

impl PathResolver for StandardResolver {
    fn resolve_single(&self, value: &RawValue) -> Result<PathBuf, ResolveError> {
        match value {
            RawValue::Path(path) => Ok(self.anchor(path)),
            RawValue::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    return Err(NotationError::new("empty path notation").into());
                }
                Ok(self.anchor(Path::new(text)))
            }
            RawValue::Collection(_) => {
                Err(NotationError::new("a collection does not designate a single path").into())
            }
            RawValue::Map(_) => {
                Err(NotationError::new("a map does not designate a single path").into())
            }
            RawValue::Tree(_) => {
                Err(NotationError::new("a file tree does not designate a single path").into())
            }
        }
    }

    fn resolve_many(&self, value: &RawValue) -> Result<Vec<PathBuf>, ResolveError> {
        match value {
            RawValue::Collection(items) => {
                let mut paths = Vec::new();
                for item in items {
                    paths.extend(self.resolve_many(item)?);
                }
                Ok(paths)
            }
            RawValue::Map(entries) => {
                let mut paths = Vec::new();
                for item in entries.values() {
                    paths.extend(self.resolve_many(item)?);
                }
                Ok(paths)
            }
            RawValue::Tree(tree) => Ok(vec![self.anchor(&tree.root)]),
            single => Ok(vec![self.resolve_single(single)?]),
        }
    }
}
