// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Seam for external text-suggestion services.
//!
//! A step that wants a language-model opinion calls a [`SuggestionService`]
//! and treats it as an opaque async function from prompt to text. The
//! engine knows nothing about the service; any failure surfaces as a
//! [`StepError`] on the calling step.

use async_trait::async_trait;

use crate::errors::StepError;
use crate::taxonomy::Taxonomy;

#[async_trait]
pub trait SuggestionService: Send + Sync {
    async fn suggest(&self, prompt: &str) -> Result<String, StepError>;

    fn name(&self) -> &'static str;
}

const DEFAULT_RESPONSE: &str = "Start with Linear Algebra to build intuition, \
    move on to Matrix Algebra for computation, then tackle Abstract Algebra.";

/// Offline service that always answers with the same text
#[derive(Debug, Clone)]
pub struct CannedSuggestions {
    response: String,
}

impl CannedSuggestions {
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            response: response.into(),
        }
    }
}

impl Default for CannedSuggestions {
    fn default() -> Self {
        Self::new(DEFAULT_RESPONSE)
    }
}

#[async_trait]
impl SuggestionService for CannedSuggestions {
    async fn suggest(&self, _prompt: &str) -> Result<String, StepError> {
        Ok(self.response.clone())
    }

    fn name(&self) -> &'static str {
        "canned"
    }
}

/// Prompt asking for a topic sequence drawn from `taxonomy`.
///
/// Every subject and its subfields are listed so the service answers with
/// topic names the taxonomy can match.
pub fn learning_path_prompt(student_data: &str, taxonomy: &Taxonomy) -> String {
    let subjects = taxonomy
        .subjects()
        .iter()
        .map(|s| format!("- {}: {}", s.name, s.subfields.join(", ")))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "Suggest a learning path across the following subjects and their subfields. \
         Name each topic explicitly.\n{}\n\nLearner: {}",
        subjects, student_data
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn canned_ignores_prompt() {
        let service = CannedSuggestions::new("Limits then Derivatives");
        assert_eq!(
            service.suggest("anything").await.unwrap(),
            "Limits then Derivatives"
        );
        assert_eq!(service.name(), "canned");
    }

    #[test]
    fn prompt_embeds_taxonomy_and_learner() {
        let prompt = learning_path_prompt("Weak in Limits", &Taxonomy::builtin());

        assert!(prompt.ends_with("Learner: Weak in Limits"));
        assert!(prompt.contains(
            "- Calculus: Differential Calculus, Integral Calculus, Multivariable Calculus, \
             Limits, Derivatives, Integrals"
        ));
        for subject in Taxonomy::builtin().subjects() {
            assert!(prompt.contains(&format!("- {}: ", subject.name)));
        }
    }
}
