// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::sync::Arc;

use crate::observability::messages::{step::StepReplaced, StructuredLog};
use crate::traits::Step;

/// Registry mapping step names to their implementations.
///
/// Steps are held as `Arc<dyn Step>` so a single registered step can be shared by
/// every run of a pipeline without cloning it. Registering a name that already
/// exists replaces the earlier step.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use learning_pathway::config::StepRegistry;
/// use learning_pathway::steps::{AnalyzeStudentDataStep, CollectFeedbackStep};
///
/// let mut registry = StepRegistry::new();
/// registry.register("analyze", Arc::new(AnalyzeStudentDataStep::default()));
/// registry.register("analyze", Arc::new(CollectFeedbackStep::default()));
///
/// assert_eq!(registry.len(), 1);
/// assert_eq!(registry.get("analyze").unwrap().name(), "collect_feedback");
/// ```
#[derive(Clone, Default)]
pub struct StepRegistry(HashMap<String, Arc<dyn Step>>);

impl StepRegistry {
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a step under `name`, replacing any step already registered there
    pub fn register(&mut self, name: impl Into<String>, step: Arc<dyn Step>) {
        let name = name.into();
        if let Some(previous) = self.0.get(&name) {
            StepReplaced {
                step: &name,
                previous_kind: previous.name(),
                kind: step.name(),
            }
            .log();
        }
        self.0.insert(name, step);
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn Step>> {
        self.0.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for StepRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut names: Vec<_> = self.0.keys().collect();
        names.sort();
        f.debug_struct("StepRegistry")
            .field("step_count", &self.0.len())
            .field("step_names", &names)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::steps::{AnalyzeStudentDataStep, RetrieveMaterialsStep};

    #[test]
    fn re_registration_last_write_wins() {
        let mut registry = StepRegistry::new();
        registry.register("step", Arc::new(AnalyzeStudentDataStep::default()));
        registry.register("step", Arc::new(RetrieveMaterialsStep::default()));
        registry.register("step", Arc::new(RetrieveMaterialsStep::default()));

        assert_eq!(registry.len(), 1);
        assert!(registry.contains("step"));
        assert_eq!(
            registry.get("step").map(|s| s.name()),
            Some("retrieve_learning_materials")
        );
    }

    #[test]
    fn debug_lists_sorted_names() {
        let mut registry = StepRegistry::new();
        registry.register("b", Arc::new(AnalyzeStudentDataStep::default()));
        registry.register("a", Arc::new(AnalyzeStudentDataStep::default()));

        let debug = format!("{:?}", registry);
        assert!(debug.contains("step_count: 2"));
        assert!(debug.contains(r#"["a", "b"]"#));
    }
}
