//! Path resolution boundary for raw property values.
//!
//! A declared property's configured value can be a concrete path, a string
//! notation, a collection, a map, or a file-tree-like object. This module
//! models that union as [`RawValue`] and defines the [`PathResolver`]
//! capability that turns a raw value into concrete filesystem paths once,
//! at the boundary, before any variant-specific check logic runs.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

mod standard;

#[cfg(test)]
mod tests;

pub use standard::StandardResolver;

/// A file-tree-like value: a root directory plus the implied set of files
/// beneath it. Validation treats the tree as its root directory rather
/// than as a plain path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTree {
    /// The directory the tree is rooted at.
    pub root: PathBuf,
}

impl FileTree {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// The raw configured value of a declared property.
///
/// Values nest: a collection may contain maps whose values are paths, and
/// so on. Resolution flattens the whole shape into an ordered path
/// sequence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawValue {
    /// An already-concrete path.
    Path(PathBuf),
    /// A string notation naming a path, interpreted by the resolver.
    Text(String),
    /// An ordered collection of nested values.
    Collection(Vec<RawValue>),
    /// A map of named values. Keys are labels only; the values are the
    /// path-like things.
    Map(BTreeMap<String, RawValue>),
    /// A file-tree-like object rooted at a directory.
    Tree(FileTree),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Path(path) => write!(f, "{}", path.display()),
            RawValue::Text(text) => f.write_str(text),
            RawValue::Collection(items) => {
                f.write_str("[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
            RawValue::Map(entries) => {
                f.write_str("{")?;
                for (index, (key, item)) in entries.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}: {}", key, item)?;
                }
                f.write_str("}")
            }
            RawValue::Tree(tree) => write!(f, "file tree '{}'", tree.root.display()),
        }
    }
}

/// The value cannot be interpreted as a path-like thing.
///
/// This is the one resolver failure the validation dispatcher translates
/// into a diagnostic instead of propagating.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct NotationError(String);

impl NotationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

/// Errors from path resolution.
#[derive(Error, Debug)]
pub enum ResolveError {
    /// The value cannot be converted to a path. Caught at the dispatch
    /// boundary and reported as a diagnostic.
    #[error("cannot convert value to a path: {0}")]
    Notation(#[from] NotationError),

    /// Environment failure while resolving. Propagates as a hard error.
    #[error("i/o failure during path resolution: {0}")]
    Io(#[from] std::io::Error),
}

/// Capability that converts raw property values into concrete paths.
///
/// Implementations must be deterministic: resolving the same value twice
/// yields the same paths, so repeated validation against an unchanged
/// filesystem yields the same diagnostic set. Resolved paths are expected
/// to be absolute.
pub trait PathResolver: Send + Sync {
    /// Resolve a value that must designate exactly one path.
    fn resolve_single(&self, value: &RawValue) -> Result<PathBuf, ResolveError>;

    /// Resolve a value into an ordered sequence of paths.
    ///
    /// Map-like values resolve to their values in map iteration order
    /// (keys discarded); collection-like values keep their own order;
    /// nested shapes flatten recursively.
    fn resolve_many(&self, value: &RawValue) -> Result<Vec<PathBuf>, ResolveError>;
}
