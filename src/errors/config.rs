// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use thiserror::Error;

/// Errors that can occur while validating a pipeline graph at build time
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// An edge references a step name that was never registered
    #[error("Edge '{edge}' references unknown step '{node}'")]
    UnknownNode {
        /// The name that could not be resolved
        node: String,
        /// The edge that referenced it, rendered as `from -> to`
        edge: String,
    },

    /// A step was registered under the terminal sentinel's name
    #[error("Step name '{0}' is reserved for the end of the pipeline")]
    ReservedStepName(String),

    /// No entry node was designated
    #[error("Pipeline has no entry step")]
    MissingEntry,

    /// The entry node is not a registered step
    #[error("Entry step '{0}' is not registered")]
    UnknownEntry(String),

    /// More than one route was declared out of the same step
    #[error("Step '{0}' declares more than one outgoing route; use conditional edges to branch")]
    ConflictingRoutes(String),

    /// Nothing reachable from the entry ever terminates
    #[error("No path from entry step '{entry}' reaches the end of the pipeline")]
    NoTerminalPath { entry: String },
}

/// Non-fatal findings reported alongside a successfully built pipeline
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationWarning {
    /// A registered step can never be reached from the entry
    UnreachableStep(String),
}

impl fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationWarning::UnreachableStep(step) => {
                write!(f, "Step '{}' is not reachable from the entry step", step)
            }
        }
    }
}

/// All validation errors found while building a pipeline.
///
/// Validation accumulates every problem it finds so a caller can fix them in one pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildError {
    pub errors: Vec<ValidationError>,
}

impl BuildError {
    pub fn new(errors: Vec<ValidationError>) -> Self {
        Self { errors }
    }

    /// True if any of the collected errors is an unknown node reference
    pub fn has_unknown_node(&self) -> bool {
        self.errors
            .iter()
            .any(|e| matches!(e, ValidationError::UnknownNode { .. }))
    }
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pipeline validation failed:")?;
        for error in &self.errors {
            write!(f, "\n  {}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for BuildError {}

/// Errors raised while loading a YAML pipeline definition
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Step '{id}' has unknown type '{kind}'")]
    UnknownStepKind { id: String, kind: String },

    #[error("Step '{id}' has invalid options: {reason}")]
    InvalidOptions { id: String, reason: String },

    #[error("Step '{0}' declares both 'next' and 'branches'")]
    ConflictingRoutes(String),

    #[error("Step '{0}' declares branches without a 'default' target")]
    MissingBranchDefault(String),

    #[error(transparent)]
    Validation(#[from] BuildError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_error_lists_every_error() {
        let err = BuildError::new(vec![
            ValidationError::MissingEntry,
            ValidationError::UnknownNode {
                node: "ghost".into(),
                edge: "analyze -> ghost".into(),
            },
        ]);

        let msg = err.to_string();
        assert!(msg.starts_with("Pipeline validation failed:"));
        assert!(msg.contains("Pipeline has no entry step"));
        assert!(msg.contains("Edge 'analyze -> ghost' references unknown step 'ghost'"));
        assert!(err.has_unknown_node());
    }

    #[test]
    fn unreachable_warning_display() {
        let warning = ValidationWarning::UnreachableStep("orphan".into());
        assert_eq!(
            warning.to_string(),
            "Step 'orphan' is not reachable from the entry step"
        );
    }
}
