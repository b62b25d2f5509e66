// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::StepError;
use crate::state::{State, StateUpdate};
use crate::steps::build_path::path_topics;
use crate::traits::Step;

const NO_PATH_FEEDBACK: &str = "No learning path to review yet.";

/// Critiques the current path and counts one more feedback cycle.
///
/// This is the only built-in step that advances `revision_number`.
#[derive(Debug, Clone, Default)]
pub struct CollectFeedbackStep {
    feedback: Option<String>,
}

impl CollectFeedbackStep {
    /// Always give the same feedback instead of deriving it from the path
    pub fn with_feedback(feedback: impl Into<String>) -> Self {
        Self {
            feedback: Some(feedback.into()),
        }
    }

    fn critique(path: &str) -> String {
        match path_topics(path).last() {
            Some(topic) => format!("Focus more on {}.", topic),
            None => NO_PATH_FEEDBACK.to_string(),
        }
    }
}

#[async_trait]
impl Step for CollectFeedbackStep {
    async fn run(&self, state: &State) -> Result<StateUpdate, StepError> {
        let feedback = match &self.feedback {
            Some(feedback) => feedback.clone(),
            None => Self::critique(state.personalized_path()),
        };

        Ok(StateUpdate::new()
            .feedback(feedback)
            .revision_number(state.revision_number().saturating_add(1)))
    }

    fn name(&self) -> &'static str {
        "collect_feedback"
    }
}
