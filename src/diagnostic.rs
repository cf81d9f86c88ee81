//! Structured validation diagnostics.
//!
//! A [`Diagnostic`] describes one validation failure of one declared
//! property: what went wrong, why, and how to fix it. Diagnostics are
//! handed to a problem sink instead of being raised as errors, so a task
//! with several broken properties surfaces all of them at once and the
//! caller decides whether any of them fails the build.

use serde::{Deserialize, Serialize};

/// Stable identifier for a class of validation problem.
///
/// The set is closed: build tools key documentation, suppression, and
/// aggregation on these values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProblemId {
    /// A declared input path does not exist on disk.
    InputDoesNotExist,
    /// A declared input exists but is the wrong kind (file vs directory).
    UnexpectedInputType,
    /// An output location cannot be written: wrong kind, blocked ancestor,
    /// or reserved location.
    CannotWriteOutput,
    /// The raw property value could not be interpreted as a path at all.
    NotationConversionFailed,
}

impl std::fmt::Display for ProblemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProblemId::InputDoesNotExist => write!(f, "INPUT_DOES_NOT_EXIST"),
            ProblemId::UnexpectedInputType => write!(f, "UNEXPECTED_INPUT_TYPE"),
            ProblemId::CannotWriteOutput => write!(f, "CANNOT_WRITE_OUTPUT"),
            ProblemId::NotationConversionFailed => write!(f, "NOTATION_CONVERSION_FAILED"),
        }
    }
}

/// Severity of a diagnostic.
///
/// The property checks in this crate only ever emit [`Severity::Error`];
/// the wider scale is part of the schema shared with callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Potential problem, does not block the task on its own.
    Warning,
    /// Something is wrong and should fail the build per caller policy.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// Stable pointer into the user manual: a topic page plus an anchor on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocLink {
    /// Documentation topic, e.g. `validation_problems`.
    pub topic: String,
    /// Anchor within the topic, e.g. `input_does_not_exist`.
    pub section: String,
}

impl DocLink {
    pub fn new(topic: impl Into<String>, section: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            section: section.into(),
        }
    }

    /// Render the link as `topic#section`.
    pub fn anchor(&self) -> String {
        format!("{}#{}", self.topic, self.section)
    }
}

/// A single validation diagnostic, attributable to exactly one declared
/// property.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Which class of problem this is.
    pub problem_id: ProblemId,
    /// The build-facing identifier of the offending property.
    pub property_name: String,
    /// Severity level. Property checks always report [`Severity::Error`].
    pub severity: Severity,
    /// Human-readable description of the failure.
    pub description: String,
    /// Why the failure happened, when there is more to say than the
    /// description itself.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cause: Option<String>,
    /// Ordered remediation hints, most direct fix first.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub possible_solutions: Vec<String>,
    /// Where the user manual explains this class of problem.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub documentation: Option<DocLink>,
}

impl Diagnostic {
    /// Create an ERROR-severity diagnostic with no cause, solutions, or
    /// documentation link.
    pub fn new(
        problem_id: ProblemId,
        property_name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            problem_id,
            property_name: property_name.into(),
            severity: Severity::Error,
            description: description.into(),
            cause: None,
            possible_solutions: Vec::new(),
            documentation: None,
        }
    }

    pub fn with_cause(mut self, cause: impl Into<String>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Append one remediation hint. Call order defines solution order.
    pub fn with_solution(mut self, solution: impl Into<String>) -> Self {
        self.possible_solutions.push(solution.into());
        self
    }

    pub fn documented_at(mut self, topic: &str, section: &str) -> Self {
        self.documentation = Some(DocLink::new(topic, section));
        self
    }
}
