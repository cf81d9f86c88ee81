//! Diagnostic construction for property validation problems.
//!
//! The message text here is part of the crate's outward contract: build
//! tools render these descriptions and solutions verbatim, and the
//! documentation anchors are stable identifiers into the user manual.

use crate::context::ValidationContext;
use crate::diagnostic::{Diagnostic, ProblemId};
use std::path::Path;

pub(super) fn report_missing_input(
    context: &ValidationContext<'_>,
    property_name: &str,
    kind: &str,
    input: &Path,
) {
    context.report(
        Diagnostic::new(
            ProblemId::InputDoesNotExist,
            property_name,
            format!("{} '{}' doesn't exist", kind, input.display()),
        )
        .with_cause("An input is missing")
        .with_solution(format!(
            "Make sure the {} exists before the task is called",
            kind
        ))
        .with_solution(format!(
            "Make sure that the task which produces the {} is declared as an input",
            kind
        ))
        .documented_at("validation_problems", "input_does_not_exist"),
    );
}

pub(super) fn report_unexpected_input_kind(
    context: &ValidationContext<'_>,
    property_name: &str,
    kind: &str,
    input: &Path,
) {
    let actual = actual_kind_of(input);
    context.report(
        Diagnostic::new(
            ProblemId::UnexpectedInputType,
            property_name,
            format!("{} '{}' is not a {}", kind, input.display(), kind),
        )
        .with_cause(format!(
            "Expected an input to be a {} but it was a {}",
            kind, actual
        ))
        .with_solution(format!("Use a {} as an input", kind))
        .with_solution(format!("Declare the input as a {} instead", actual))
        .documented_at("validation_problems", "unexpected_input_type"),
    );
}

/// `entry` is the existing filesystem entry the cause names: the output
/// itself when it exists with the wrong kind, or the blocking ancestor.
pub(super) fn report_cannot_write_directory(
    context: &ValidationContext<'_>,
    property_name: &str,
    entry: &Path,
    cause_text: impl Into<String>,
) {
    context.report(
        Diagnostic::new(
            ProblemId::CannotWriteOutput,
            property_name,
            format!("is not writable because {}", cause_text.into()),
        )
        .with_cause(format!(
            "Expected '{}' to be a directory but it's a {}",
            entry.display(),
            actual_kind_of(entry)
        ))
        .with_solution(format!(
            "Make sure that the '{}' is configured to a directory",
            property_name
        ))
        .documented_at("validation_problems", "cannot_write_output"),
    );
}

pub(super) fn report_cannot_write_file(
    context: &ValidationContext<'_>,
    property_name: &str,
    cause_text: impl Into<String>,
) {
    context.report(
        Diagnostic::new(
            ProblemId::CannotWriteOutput,
            property_name,
            format!("is not writable because {}", cause_text.into()),
        )
        .with_cause("Cannot write a file to a location pointing at a directory")
        .with_solution(format!(
            "Configure '{}' to point to a file, not a directory",
            property_name
        ))
        .documented_at("validation_problems", "cannot_write_output"),
    );
}

pub(super) fn report_reserved_location(
    context: &ValidationContext<'_>,
    property_name: &str,
    location: &Path,
) {
    context.report(Diagnostic::new(
        ProblemId::CannotWriteOutput,
        property_name,
        format!(
            "The output {} must not be in a reserved location",
            location.display()
        ),
    ));
}

/// Render the actual kind of an existing filesystem entry for messages.
fn actual_kind_of(entry: &Path) -> &'static str {
    if entry.is_file() {
        "file"
    } else if entry.is_dir() {
        "directory"
    } else {
        "unexpected file type"
    }
}
