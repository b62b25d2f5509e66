// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use crate::config::consts::END;
use crate::state::State;

/// Where control goes after a step: another step, or the terminal sentinel.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Target {
    Step(String),
    End,
}

impl Target {
    pub fn as_str(&self) -> &str {
        match self {
            Target::Step(name) => name,
            Target::End => END,
        }
    }
}

impl From<&str> for Target {
    fn from(name: &str) -> Self {
        if name == END {
            Target::End
        } else {
            Target::Step(name.to_string())
        }
    }
}

impl From<String> for Target {
    fn from(name: String) -> Self {
        if name == END {
            Target::End
        } else {
            Target::Step(name)
        }
    }
}

impl fmt::Display for Target {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

type PredicateFn = dyn Fn(&State) -> bool + Send + Sync;

/// A labelled predicate over the state, used to pick a branch
#[derive(Clone)]
pub struct Condition {
    label: String,
    predicate: Arc<PredicateFn>,
}

impl Condition {
    pub fn new<F>(label: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&State) -> bool + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            predicate: Arc::new(predicate),
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn matches(&self, state: &State) -> bool {
        (self.predicate)(state)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Condition").field(&self.label).finish()
    }
}

/// One `(condition, target)` pair of a conditional route
#[derive(Debug, Clone)]
pub struct Branch {
    pub condition: Condition,
    pub target: Target,
}

impl Branch {
    pub fn new(condition: Condition, target: impl Into<Target>) -> Self {
        Self {
            condition,
            target: target.into(),
        }
    }
}

/// Outgoing route of a single step
#[derive(Debug, Clone)]
pub enum Route {
    /// Always continue to the same target
    Next(Target),
    /// Evaluate branches in order; the first match wins, else `default`
    Conditional { branches: Vec<Branch>, default: Target },
}

impl Route {
    pub fn resolve(&self, state: &State) -> &Target {
        match self {
            Route::Next(target) => target,
            Route::Conditional { branches, default } => branches
                .iter()
                .find(|b| b.condition.matches(state))
                .map(|b| &b.target)
                .unwrap_or(default),
        }
    }

    /// Every target this route could select
    pub fn targets(&self) -> Vec<&Target> {
        match self {
            Route::Next(target) => vec![target],
            Route::Conditional { branches, default } => branches
                .iter()
                .map(|b| &b.target)
                .chain(std::iter::once(default))
                .collect(),
        }
    }
}

/// Immutable step ordering: one entry step plus at most one route per step.
///
/// A step without a route is terminal, as is any route that resolves to
/// [`Target::End`]. The graph holds structure only; it owns no run data.
#[derive(Debug, Clone)]
pub struct PipelineGraph {
    entry: String,
    routes: HashMap<String, Route>,
}

impl PipelineGraph {
    pub(crate) fn new(entry: String, routes: HashMap<String, Route>) -> Self {
        Self { entry, routes }
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn route(&self, step: &str) -> Option<&Route> {
        self.routes.get(step)
    }

    /// The step that follows `step` given the state it just produced
    pub fn next(&self, step: &str, state: &State) -> Target {
        match self.routes.get(step) {
            Some(route) => route.resolve(state).clone(),
            None => Target::End,
        }
    }

    /// Steps that may follow `step`, not counting the terminal sentinel
    pub fn successors(&self, step: &str) -> Vec<&str> {
        match self.routes.get(step) {
            Some(route) => route
                .targets()
                .into_iter()
                .filter_map(|t| match t {
                    Target::Step(name) => Some(name.as_str()),
                    Target::End => None,
                })
                .collect(),
            None => Vec::new(),
        }
    }

    /// True if reaching `step` can end the run right after it
    pub fn can_terminate_after(&self, step: &str) -> bool {
        match self.routes.get(step) {
            Some(route) => route.targets().contains(&&Target::End),
            None => true,
        }
    }
}
