// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The record threaded through a pipeline run.
//!
//! A `State` always carries all six fields. Constructors fill anything the
//! caller leaves out with the documented defaults, so a step never observes an
//! undefined field. After construction the state only changes through
//! [`State::merge`], which applies a typed [`StateUpdate`].
//!
//! # Examples
//!
//! ```
//! use learning_pathway::state::{State, StateUpdate};
//!
//! let mut state = State::from_input(r#"{"student_data": "Weak in Abstract Algebra"}"#);
//! assert_eq!(state.revision_number(), 1);
//! assert_eq!(state.max_revisions(), 2);
//! assert!(state.learning_materials().is_empty());
//!
//! state.merge(StateUpdate::new().feedback("Start with groups.")).unwrap();
//! assert_eq!(state.feedback(), "Start with groups.");
//! assert_eq!(state.student_data(), "Weak in Abstract Algebra");
//! ```

mod update;

pub use update::{Field, FieldUpdate, StateUpdate};

use serde::{Deserialize, Serialize};

use crate::config::consts::{DEFAULT_MAX_REVISIONS, DEFAULT_REVISION_NUMBER};
use crate::errors::{MergeError, StateInitError};
use crate::observability::messages::{state::PayloadFallback, StructuredLog};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct State {
    student_data: String,
    learning_materials: Vec<String>,
    personalized_path: String,
    feedback: String,
    revision_number: u32,
    max_revisions: u32,
}

/// Caller-supplied structured input; every field is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StatePayload {
    pub student_data: Option<String>,
    pub learning_materials: Option<Vec<String>>,
    pub personalized_path: Option<String>,
    pub feedback: Option<String>,
    pub revision_number: Option<u32>,
    pub max_revisions: Option<u32>,
}

impl Default for State {
    fn default() -> Self {
        Self::from_payload(StatePayload::default())
    }
}

impl State {
    /// Fresh state for a free-text learner description
    pub fn new(student_data: impl Into<String>) -> Self {
        Self::from_payload(StatePayload {
            student_data: Some(student_data.into()),
            ..Default::default()
        })
    }

    /// Fill every missing field with its default
    pub fn from_payload(payload: StatePayload) -> Self {
        Self {
            student_data: payload.student_data.unwrap_or_default(),
            learning_materials: payload.learning_materials.unwrap_or_default(),
            personalized_path: payload.personalized_path.unwrap_or_default(),
            feedback: payload.feedback.unwrap_or_default(),
            revision_number: payload.revision_number.unwrap_or(DEFAULT_REVISION_NUMBER),
            max_revisions: payload.max_revisions.unwrap_or(DEFAULT_MAX_REVISIONS),
        }
    }

    /// Parse a JSON object payload. Unrecognized keys are ignored.
    pub fn from_json(json: &str) -> Result<Self, StateInitError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let kind = match &value {
            serde_json::Value::Object(_) => None,
            serde_json::Value::Array(_) => Some("an array"),
            serde_json::Value::String(_) => Some("a string"),
            serde_json::Value::Number(_) => Some("a number"),
            serde_json::Value::Bool(_) => Some("a boolean"),
            serde_json::Value::Null => Some("null"),
        };
        if let Some(kind) = kind {
            return Err(StateInitError::NotAnObject(kind));
        }

        let payload: StatePayload = serde_json::from_value(value)?;
        Ok(Self::from_payload(payload))
    }

    /// Build a state from whatever the caller typed.
    ///
    /// Input that looks like a JSON object is parsed as a structured payload.
    /// If that fails the whole input is used as raw `student_data` instead.
    pub fn from_input(input: &str) -> Self {
        if input.trim_start().starts_with('{') {
            match Self::from_json(input) {
                Ok(state) => return state,
                Err(e) => PayloadFallback {
                    input_len: input.len(),
                    error: &e,
                }
                .log(),
            }
        }
        Self::new(input)
    }

    pub fn student_data(&self) -> &str {
        &self.student_data
    }

    pub fn learning_materials(&self) -> &[String] {
        &self.learning_materials
    }

    pub fn personalized_path(&self) -> &str {
        &self.personalized_path
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn revision_number(&self) -> u32 {
        self.revision_number
    }

    pub fn max_revisions(&self) -> u32 {
        self.max_revisions
    }

    /// Feedback cycles still allowed before `max_revisions` is reached
    pub fn revisions_remaining(&self) -> bool {
        self.revision_number <= self.max_revisions
    }

    /// Apply an update, overwriting only the fields it names.
    ///
    /// The update is checked before anything is written, so a rejected update
    /// leaves the state untouched.
    pub fn merge(&mut self, update: StateUpdate) -> Result<(), MergeError> {
        let mut revision = self.revision_number;
        for field in update.iter() {
            if let FieldUpdate::RevisionNumber(proposed) = field {
                if *proposed < revision {
                    return Err(MergeError::RevisionRegression {
                        current: revision,
                        proposed: *proposed,
                    });
                }
                revision = *proposed;
            }
        }

        for field in update {
            match field {
                FieldUpdate::StudentData(v) => self.student_data = v,
                FieldUpdate::LearningMaterials(v) => self.learning_materials = v,
                FieldUpdate::PersonalizedPath(v) => self.personalized_path = v,
                FieldUpdate::Feedback(v) => self.feedback = v,
                FieldUpdate::RevisionNumber(v) => self.revision_number = v,
                FieldUpdate::MaxRevisions(v) => self.max_revisions = v,
            }
        }
        Ok(())
    }
}
