// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Names of the fields every `State` carries
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    StudentData,
    LearningMaterials,
    PersonalizedPath,
    Feedback,
    RevisionNumber,
    MaxRevisions,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::StudentData => "student_data",
            Field::LearningMaterials => "learning_materials",
            Field::PersonalizedPath => "personalized_path",
            Field::Feedback => "feedback",
            Field::RevisionNumber => "revision_number",
            Field::MaxRevisions => "max_revisions",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A new value for exactly one field, carrying that field's declared type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    StudentData(String),
    LearningMaterials(Vec<String>),
    PersonalizedPath(String),
    Feedback(String),
    RevisionNumber(u32),
    MaxRevisions(u32),
}

impl FieldUpdate {
    pub fn field(&self) -> Field {
        match self {
            FieldUpdate::StudentData(_) => Field::StudentData,
            FieldUpdate::LearningMaterials(_) => Field::LearningMaterials,
            FieldUpdate::PersonalizedPath(_) => Field::PersonalizedPath,
            FieldUpdate::Feedback(_) => Field::Feedback,
            FieldUpdate::RevisionNumber(_) => Field::RevisionNumber,
            FieldUpdate::MaxRevisions(_) => Field::MaxRevisions,
        }
    }
}

/// The partial update a step returns.
///
/// Only the fields set here are overwritten when the update is merged; every
/// other field keeps its prior value. When the same field is set twice, the
/// later value wins.
///
/// ```
/// use learning_pathway::state::{Field, StateUpdate};
///
/// let update = StateUpdate::new()
///     .feedback("Focus more on Abstract Algebra.")
///     .revision_number(2);
///
/// assert_eq!(update.fields(), vec![Field::Feedback, Field::RevisionNumber]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StateUpdate {
    updates: Vec<FieldUpdate>,
}

impl StateUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn student_data(self, value: impl Into<String>) -> Self {
        self.with(FieldUpdate::StudentData(value.into()))
    }

    pub fn learning_materials<I, S>(self, materials: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with(FieldUpdate::LearningMaterials(
            materials.into_iter().map(Into::into).collect(),
        ))
    }

    pub fn personalized_path(self, value: impl Into<String>) -> Self {
        self.with(FieldUpdate::PersonalizedPath(value.into()))
    }

    pub fn feedback(self, value: impl Into<String>) -> Self {
        self.with(FieldUpdate::Feedback(value.into()))
    }

    pub fn revision_number(self, value: u32) -> Self {
        self.with(FieldUpdate::RevisionNumber(value))
    }

    pub fn max_revisions(self, value: u32) -> Self {
        self.with(FieldUpdate::MaxRevisions(value))
    }

    /// Append a single field update
    pub fn with(mut self, update: FieldUpdate) -> Self {
        self.updates.push(update);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.updates.is_empty()
    }

    /// Fields touched by this update, in the order they were set
    pub fn fields(&self) -> Vec<Field> {
        self.updates.iter().map(FieldUpdate::field).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &FieldUpdate> {
        self.updates.iter()
    }
}

impl IntoIterator for StateUpdate {
    type Item = FieldUpdate;
    type IntoIter = std::vec::IntoIter<FieldUpdate>;

    fn into_iter(self) -> Self::IntoIter {
        self.updates.into_iter()
    }
}

impl FromIterator<FieldUpdate> for StateUpdate {
    fn from_iter<T: IntoIterator<Item = FieldUpdate>>(iter: T) -> Self {
        Self {
            updates: iter.into_iter().collect(),
        }
    }
}
