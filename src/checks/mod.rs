//! Validation behaviors for declared task properties.
//!
//! Each declared property carries one [`ValidationAction`]: a fixed, named
//! validation behavior checked against the real filesystem before the
//! owning task runs. Checks report diagnostics through the context's
//! problem sink instead of failing fast, so a task with several broken
//! properties surfaces all of them in one pass. The only filesystem access
//! is existence/kind probing; no content is read or written.

mod inputs;
mod outputs;
mod problems;


use crate::context::ValidationContext;
use crate::diagnostic::{Diagnostic, ProblemId};
use crate::error::{PropvetError, Result};
use crate::resolve::{RawValue, ResolveError};
use std::path::PathBuf;

/// The closed set of validation behaviors a property can declare.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationAction {
    /// No filesystem validation; the property is intentionally exempt.
    NoOp,
    /// The property must point at an existing regular file.
    InputFile,
    /// The property must point at an existing directory.
    InputDirectory,
    /// The property names a file the task will write.
    OutputFile,
    /// The property names an ordered collection of files the task will write.
    OutputFiles,
    /// The property names a directory the task will populate.
    OutputDirectory,
    /// The property names an ordered collection of directories the task
    /// will populate.
    OutputDirectories,
}

impl ValidationAction {
    /// Human-readable label for the kind of target this action resolves,
    /// used verbatim in conversion diagnostics.
    pub fn target_kind(&self) -> &'static str {
        match self {
            ValidationAction::NoOp => "file collection",
            ValidationAction::InputFile => "file",
            ValidationAction::InputDirectory => "directory",
            ValidationAction::OutputFile => "file",
            ValidationAction::OutputFiles => "file collection",
            ValidationAction::OutputDirectory => "file",
            ValidationAction::OutputDirectories => "file collection",
        }
    }

    /// Validate one property value against the filesystem.
    ///
    /// Expected failure modes never surface as errors; they are reported to
    /// the context's problem sink. That includes unconvertible values: a
    /// notation failure from the resolver is translated into a single
    /// `NOTATION_CONVERSION_FAILED` diagnostic here, and nowhere else.
    /// Anything else the resolver raises is an environment problem and
    /// propagates as a hard error.
    ///
    /// # Arguments
    ///
    /// * `property_name` - Build-facing identifier of the property
    /// * `value` - The raw configured value, resolved via the context
    /// * `context` - Resolver, reserved-location policy, and problem sink
    pub fn validate(
        &self,
        property_name: &str,
        value: &RawValue,
        context: &ValidationContext<'_>,
    ) -> Result<()> {
        match self.do_validate(property_name, value, context) {
            Err(PropvetError::Resolve(ResolveError::Notation(_))) => {
                context.report(Diagnostic::new(
                    ProblemId::NotationConversionFailed,
                    property_name,
                    format!(
                        "Value '{}' specified for property '{}' cannot be converted to a {}",
                        value,
                        property_name,
                        self.target_kind()
                    ),
                ));
                Ok(())
            }
            result => result,
        }
    }

    fn do_validate(
        &self,
        property_name: &str,
        value: &RawValue,
        context: &ValidationContext<'_>,
    ) -> Result<()> {
        match self {
            ValidationAction::NoOp => Ok(()),
            ValidationAction::InputFile => {
                let file = context.resolve_single(value)?;
                inputs::validate_input_file(context, property_name, &file);
                Ok(())
            }
            ValidationAction::InputDirectory => {
                let directory = resolve_directory(context, value)?;
                inputs::validate_input_directory(context, property_name, &directory);
                Ok(())
            }
            ValidationAction::OutputFile => {
                let file = context.resolve_single(value)?;
                outputs::validate_output_file(context, property_name, &file);
                Ok(())
            }
            ValidationAction::OutputFiles => {
                for file in context.resolve_many(value)? {
                    outputs::validate_output_file(context, property_name, &file);
                }
                Ok(())
            }
            ValidationAction::OutputDirectory => {
                let directory = context.resolve_single(value)?;
                outputs::validate_output_directory(context, property_name, &directory);
                Ok(())
            }
            ValidationAction::OutputDirectories => {
                for directory in context.resolve_many(value)? {
                    outputs::validate_output_directory(context, property_name, &directory);
                }
                Ok(())
            }
        }
    }
}

/// Resolve a value for directory-input validation.
///
/// A file-tree-like value designates its own root directory; anything else
/// goes through single path resolution.
fn resolve_directory(context: &ValidationContext<'_>, value: &RawValue) -> Result<PathBuf> {
    match value {
        RawValue::Tree(tree) => Ok(tree.root.clone()),
        other => Ok(context.resolve_single(other)?),
    }
}
