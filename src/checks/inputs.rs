//! Input file and directory checks.
//!
//! An input must exist before the task runs and must be the declared kind.
//! Both failure modes are reported with remediation hints; nothing else
//! about the entry is probed.

use crate::context::ValidationContext;
use std::path::Path;

use super::problems::{report_missing_input, report_unexpected_input_kind};

pub(super) fn validate_input_file(
    context: &ValidationContext<'_>,
    property_name: &str,
    file: &Path,
) {
    if !file.exists() {
        report_missing_input(context, property_name, "file", file);
    } else if !file.is_file() {
        report_unexpected_input_kind(context, property_name, "file", file);
    }
}

pub(super) fn validate_input_directory(
    context: &ValidationContext<'_>,
    property_name: &str,
    directory: &Path,
) {
    if !directory.exists() {
        report_missing_input(context, property_name, "directory", directory);
    } else if !directory.is_dir() {
        report_unexpected_input_kind(context, property_name, "directory", directory);
    }
}
