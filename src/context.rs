//! Validation context and problem sinks.
//!
//! Every validation call receives a [`ValidationContext`] bundling the three
//! capabilities the engine needs from its environment: a path resolver, a
//! reserved-location policy, and the sink that owns reported diagnostics.
//! The engine keeps no state of its own between calls, so one context can
//! serve any number of properties, from any number of threads, as long as
//! the sink accepts concurrent appends.

use crate::diagnostic::{Diagnostic, Severity};
use crate::reserved::ReservedLocationPolicy;
use crate::resolve::{PathResolver, RawValue, ResolveError};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Sink that records diagnostics produced during validation.
///
/// Reporting takes `&self` so one sink can be shared by validations running
/// on independent threads; implementations must make appends safe for
/// concurrent callers.
pub trait ProblemSink: Send + Sync {
    /// Record one diagnostic. The sink owns the diagnostic from here on.
    fn report(&self, diagnostic: Diagnostic);
}

/// In-memory sink collecting diagnostics behind a mutex.
#[derive(Debug, Default)]
pub struct CollectingSink {
    diagnostics: Mutex<Vec<Diagnostic>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.lock().clone()
    }

    /// Drain the collected diagnostics, leaving the sink empty.
    pub fn take(&self) -> Vec<Diagnostic> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Whether any ERROR-severity diagnostic has been reported.
    pub fn has_errors(&self) -> bool {
        self.lock().iter().any(|d| d.severity == Severity::Error)
    }

    fn lock(&self) -> MutexGuard<'_, Vec<Diagnostic>> {
        self.diagnostics
            .lock()
            .unwrap_or_else(|poison| poison.into_inner())
    }
}

impl ProblemSink for CollectingSink {
    fn report(&self, diagnostic: Diagnostic) {
        self.lock().push(diagnostic);
    }
}

/// Bundle of capabilities passed into every validation call.
pub struct ValidationContext<'a> {
    resolver: &'a dyn PathResolver,
    reserved: &'a dyn ReservedLocationPolicy,
    sink: &'a dyn ProblemSink,
}

impl<'a> ValidationContext<'a> {
    pub fn new(
        resolver: &'a dyn PathResolver,
        reserved: &'a dyn ReservedLocationPolicy,
        sink: &'a dyn ProblemSink,
    ) -> Self {
        Self {
            resolver,
            reserved,
            sink,
        }
    }

    /// Resolve a value that must designate exactly one path.
    pub fn resolve_single(&self, value: &RawValue) -> Result<PathBuf, ResolveError> {
        self.resolver.resolve_single(value)
    }

    /// Resolve a value into an ordered sequence of paths.
    pub fn resolve_many(&self, value: &RawValue) -> Result<Vec<PathBuf>, ResolveError> {
        self.resolver.resolve_many(value)
    }

    /// Whether policy forbids task outputs at this path.
    pub fn is_reserved_location(&self, path: &Path) -> bool {
        self.reserved.is_reserved(path)
    }

    /// Report a diagnostic to the problem sink.
    pub fn report(&self, diagnostic: Diagnostic) {
        self.sink.report(diagnostic);
    }
}
