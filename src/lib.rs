//! Propvet: filesystem validation for declared build-task properties.
//!
//! Before a build task runs, every declared filesystem-backed property
//! (input file, input directory, output file, output directory, or a
//! collection/map of these) is checked against the real filesystem and a
//! reserved-location policy. Violations become structured [`Diagnostic`]s
//! collected through a problem sink, so the caller can report every problem
//! a task has instead of aborting on the first one, and decide afterwards
//! whether any of them fails the build.
//!
//! The engine holds no state between calls: one [`ValidationContext`] can
//! validate any number of properties, on any number of threads, as long as
//! the sink accepts concurrent appends.
//!
//! # Example
//!
//! ```
//! use propvet::{
//!     CollectingSink, RawValue, ReservedLocations, StandardResolver, ValidationAction,
//!     ValidationContext,
//! };
//!
//! let resolver = StandardResolver::new("/work/project");
//! let reserved = ReservedLocations::empty();
//! let sink = CollectingSink::new();
//! let context = ValidationContext::new(&resolver, &reserved, &sink);
//!
//! ValidationAction::InputFile
//!     .validate("configFile", &RawValue::Text("app.conf".into()), &context)
//!     .unwrap();
//!
//! // The input doesn't exist, so the sink now holds one diagnostic.
//! assert!(sink.has_errors());
//! ```

pub mod checks;
pub mod context;
pub mod diagnostic;
pub mod error;
pub mod property;
pub mod report;
pub mod reserved;
pub mod resolve;

#[cfg(test)]
mod test_support;

pub use checks::ValidationAction;
pub use context::{CollectingSink, ProblemSink, ValidationContext};
pub use diagnostic::{Diagnostic, DocLink, ProblemId, Severity};
pub use error::{PropvetError, Result};
pub use property::{DeclaredProperty, validate_properties};
pub use report::{ReportRecord, append_report, format_report};
pub use reserved::{ReservedLocationConfig, ReservedLocationPolicy, ReservedLocations};
pub use resolve::{
    FileTree, NotationError, PathResolver, RawValue, ResolveError, StandardResolver,
};
