// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::config::consts::ANALYSIS_MARKER;
use crate::errors::StepError;
use crate::state::{State, StateUpdate};
use crate::traits::Step;

/// Marks the learner description as analyzed by appending a marker to `student_data`
#[derive(Debug, Clone)]
pub struct AnalyzeStudentDataStep {
    marker: String,
}

impl AnalyzeStudentDataStep {
    pub fn with_marker(marker: impl Into<String>) -> Self {
        Self {
            marker: marker.into(),
        }
    }
}

impl Default for AnalyzeStudentDataStep {
    fn default() -> Self {
        Self::with_marker(ANALYSIS_MARKER)
    }
}

#[async_trait]
impl Step for AnalyzeStudentDataStep {
    async fn run(&self, state: &State) -> Result<StateUpdate, StepError> {
        let annotated = format!("{}{}", state.student_data(), self.marker);
        Ok(StateUpdate::new().student_data(annotated))
    }

    fn name(&self) -> &'static str {
        "analyze_student_data"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;

    #[tokio::test]
    async fn appends_marker_and_touches_nothing_else() {
        let state = State::new("S");
        let update = AnalyzeStudentDataStep::default().run(&state).await.unwrap();
        assert_eq!(update.fields(), vec![Field::StudentData]);

        let mut merged = state.clone();
        merged.merge(update).unwrap();
        assert_eq!(merged.student_data(), "S | Analysis complete");
        // input snapshot is untouched
        assert_eq!(state.student_data(), "S");
    }

    #[tokio::test]
    async fn custom_marker() {
        let step = AnalyzeStudentDataStep::with_marker(" [analyzed]");
        let mut state = State::new("");
        state.merge(step.run(&state).await.unwrap()).unwrap();
        assert_eq!(state.student_data(), " [analyzed]");
    }
}
