//! Output file and directory checks.
//!
//! Outputs are checked for writability without probing permissions: an
//! existing entry of the right kind is assumed writable, and a missing one
//! must not be blocked by an existing non-directory ancestor. The
//! reserved-location check runs first and is independent of existence and
//! kind, so one path can report both problems.

use crate::context::ValidationContext;
use std::path::Path;

use super::problems::{
    report_cannot_write_directory, report_cannot_write_file, report_reserved_location,
};

pub(super) fn validate_output_file(
    context: &ValidationContext<'_>,
    property_name: &str,
    file: &Path,
) {
    check_reserved_location(context, property_name, file);
    if file.exists() {
        if file.is_dir() {
            report_cannot_write_file(
                context,
                property_name,
                format!("'{}' is not a file", file.display()),
            );
        }
        // anything that exists and is not a directory is assumed writable
    } else {
        let mut candidate = file.parent();
        while let Some(current) = candidate {
            if current.is_dir() {
                break;
            }
            if current.exists() {
                report_cannot_write_file(
                    context,
                    property_name,
                    format!(
                        "'{}' ancestor '{}' is not a directory",
                        file.display(),
                        current.display()
                    ),
                );
                break;
            }
            candidate = current.parent();
        }
    }
}

pub(super) fn validate_output_directory(
    context: &ValidationContext<'_>,
    property_name: &str,
    directory: &Path,
) {
    check_reserved_location(context, property_name, directory);
    if directory.exists() {
        if !directory.is_dir() {
            report_cannot_write_directory(
                context,
                property_name,
                directory,
                format!("'{}' is not a directory", directory.display()),
            );
        }
    } else {
        let mut candidate = directory.parent();
        while let Some(current) = candidate {
            if current.is_dir() {
                break;
            }
            if current.exists() {
                report_cannot_write_directory(
                    context,
                    property_name,
                    current,
                    format!(
                        "'{}' ancestor '{}' is not a directory",
                        directory.display(),
                        current.display()
                    ),
                );
                return;
            }
            candidate = current.parent();
        }
    }
}

fn check_reserved_location(context: &ValidationContext<'_>, property_name: &str, location: &Path) {
    if context.is_reserved_location(location) {
        report_reserved_location(context, property_name, location);
    }
}
