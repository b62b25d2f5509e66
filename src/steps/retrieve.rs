// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;

use crate::errors::StepError;
use crate::state::{State, StateUpdate};
use crate::traits::Step;

const DEFAULT_MATERIALS: [&str; 3] = [
    "Video on Linear Algebra",
    "PDF on Matrix Algebra",
    "Exercises on Abstract Algebra",
];

/// Supplies the ordered list of `learning_materials` from a fixed catalog
#[derive(Debug, Clone)]
pub struct RetrieveMaterialsStep {
    materials: Vec<String>,
}

impl RetrieveMaterialsStep {
    pub fn new(materials: Vec<String>) -> Self {
        Self { materials }
    }
}

impl Default for RetrieveMaterialsStep {
    fn default() -> Self {
        Self::new(DEFAULT_MATERIALS.iter().map(|m| m.to_string()).collect())
    }
}

#[async_trait]
impl Step for RetrieveMaterialsStep {
    async fn run(&self, _state: &State) -> Result<StateUpdate, StepError> {
        Ok(StateUpdate::new().learning_materials(self.materials.clone()))
    }

    fn name(&self) -> &'static str {
        "retrieve_learning_materials"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Field;

    #[tokio::test]
    async fn returns_catalog_in_order() {
        let update = RetrieveMaterialsStep::default()
            .run(&State::new("S"))
            .await
            .unwrap();
        assert_eq!(update.fields(), vec![Field::LearningMaterials]);

        let mut state = State::new("S");
        state.merge(update).unwrap();
        assert_eq!(state.learning_materials(), DEFAULT_MATERIALS);
        assert_eq!(state.student_data(), "S");
    }
}
