// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use std::sync::Arc;

use crate::errors::StepError;
use crate::state::{State, StateUpdate};
use crate::suggest::{learning_path_prompt, SuggestionService};
use crate::taxonomy::Taxonomy;
use crate::traits::Step;

/// Asks a [`SuggestionService`] for a topic sequence and stores the topics it
/// names as `learning_materials`.
///
/// The prompt lists the whole taxonomy. Topics found in the response are kept
/// in taxonomy order, and a response that names no known topic leaves the
/// state unchanged.
pub struct SuggestTopicsStep {
    service: Arc<dyn SuggestionService>,
    taxonomy: Taxonomy,
}

impl SuggestTopicsStep {
    pub fn new(service: Arc<dyn SuggestionService>) -> Self {
        Self::with_taxonomy(service, Taxonomy::default())
    }

    pub fn with_taxonomy(service: Arc<dyn SuggestionService>, taxonomy: Taxonomy) -> Self {
        Self { service, taxonomy }
    }
}

#[async_trait]
impl Step for SuggestTopicsStep {
    async fn run(&self, state: &State) -> Result<StateUpdate, StepError> {
        let prompt = learning_path_prompt(state.student_data(), &self.taxonomy);
        let response = self.service.suggest(&prompt).await?;

        let topics = self.taxonomy.match_topics(&response);
        if topics.is_empty() {
            tracing::debug!(
                service = self.service.name(),
                "Suggestion named no known topics"
            );
            return Ok(StateUpdate::new());
        }

        Ok(StateUpdate::new().learning_materials(topics))
    }

    fn name(&self) -> &'static str {
        "suggest_topics"
    }
}

impl std::fmt::Debug for SuggestTopicsStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SuggestTopicsStep")
            .field("service", &self.service.name())
            .finish()
    }
}
