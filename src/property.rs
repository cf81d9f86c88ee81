//! Declared property descriptors.
//!
//! A task declares its filesystem-backed properties as named values bound
//! to a validation behavior. [`validate_properties`] runs the whole set in
//! declaration order; diagnostics accumulate in the context's sink and
//! never stop the run, so one broken property does not hide another.

use crate::checks::ValidationAction;
use crate::context::ValidationContext;
use crate::error::Result;
use crate::resolve::RawValue;

/// A named task property bound to a validation behavior and a raw value.
///
/// Descriptors are cheap, immutable snapshots: built for one validation
/// pass and discarded afterwards.
#[derive(Debug, Clone)]
pub struct DeclaredProperty {
    /// Build-facing property identifier (e.g. `outputDir`).
    pub name: String,
    /// The validation behavior the property declared.
    pub kind: ValidationAction,
    /// The raw configured value, resolved at validation time.
    pub value: RawValue,
}

impl DeclaredProperty {
    pub fn new(name: impl Into<String>, kind: ValidationAction, value: RawValue) -> Self {
        Self {
            name: name.into(),
            kind,
            value,
        }
    }

    /// Validate this property against the filesystem.
    pub fn validate(&self, context: &ValidationContext<'_>) -> Result<()> {
        self.kind.validate(&self.name, &self.value, context)
    }
}

/// Validate every property in declaration order.
///
/// Diagnostics do not short-circuit: every property is checked even when
/// earlier ones reported problems. Only hard failures (resolver I/O,
/// policy errors) end the pass early.
pub fn validate_properties(
    properties: &[DeclaredProperty],
    context: &ValidationContext<'_>,
) -> Result<()> {
    for property in properties {
        property.validate(context)?;
    }
    Ok(())
}
