// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Build-time validation of pipeline graphs.
//!
//! Validation runs once, before any run can start, in three stages:
//!
//! 1. **Entry validation**: no step uses the terminal sentinel's name, and an
//!    entry step is set and registered
//! 2. **Reference validation**: every route starts at a registered step, every
//!    target is a registered step or the terminal sentinel, and no step
//!    declares two routes
//! 3. **Reachability**: walks the graph from the entry (BFS, O(V + E)) and
//!    requires at least one reachable step that can end the run
//!
//! Reachability needs a structurally valid graph, so it is skipped when the
//! first two stages report errors. Steps that are registered but unreachable
//! are reported as warnings, not errors.

use std::collections::{HashMap, HashSet, VecDeque};

use crate::config::consts::END;
use crate::config::graph::{PipelineGraph, Route, Target};
use crate::config::StepRegistry;
use crate::errors::{BuildError, ValidationError, ValidationWarning};
use crate::observability::messages::validation::{
    UnknownNodeDetected, UnreachableStepDetected, ValidationFailed,
};
use crate::observability::messages::StructuredLog;

/// Validate declared routes against the registry and assemble the graph.
///
/// All errors found are returned together rather than stopping at the first.
pub fn validate_pipeline(
    registry: &StepRegistry,
    entry: Option<&str>,
    routes: Vec<(String, Route)>,
) -> Result<(PipelineGraph, Vec<ValidationWarning>), BuildError> {
    let mut errors = Vec::new();

    if registry.contains(END) {
        errors.push(ValidationError::ReservedStepName(END.to_string()));
    }

    if let Err(e) = validate_entry(registry, entry) {
        errors.push(e);
    }

    let route_map = match validate_routes(registry, routes) {
        Ok(map) => map,
        Err(route_errors) => {
            errors.extend(route_errors);
            HashMap::new()
        }
    };

    let entry = match entry {
        Some(entry) if errors.is_empty() => entry.to_string(),
        _ => return Err(fail(errors)),
    };

    let graph = PipelineGraph::new(entry, route_map);
    let reachable = reachable_steps(&graph);

    if !reachable.iter().any(|step| graph.can_terminate_after(step)) {
        return Err(fail(vec![ValidationError::NoTerminalPath {
            entry: graph.entry().to_string(),
        }]));
    }

    let mut unreachable: Vec<&String> = registry
        .names()
        .filter(|name| !reachable.contains(name.as_str()))
        .collect();
    unreachable.sort();

    let warnings = unreachable
        .into_iter()
        .map(|step| {
            UnreachableStepDetected {
                step,
                entry: graph.entry(),
            }
            .log();
            ValidationWarning::UnreachableStep(step.clone())
        })
        .collect();

    Ok((graph, warnings))
}

fn fail(errors: Vec<ValidationError>) -> BuildError {
    ValidationFailed {
        error_count: errors.len(),
    }
    .log();
    BuildError::new(errors)
}

fn validate_entry(registry: &StepRegistry, entry: Option<&str>) -> Result<(), ValidationError> {
    match entry {
        None => Err(ValidationError::MissingEntry),
        Some(entry) if !registry.contains(entry) => {
            Err(ValidationError::UnknownEntry(entry.to_string()))
        }
        Some(_) => Ok(()),
    }
}

/// Check that every route references registered steps and that each step
/// has at most one route.
fn validate_routes(
    registry: &StepRegistry,
    routes: Vec<(String, Route)>,
) -> Result<HashMap<String, Route>, Vec<ValidationError>> {
    let mut errors = Vec::new();
    let mut conflicting = HashSet::new();
    let mut map = HashMap::new();

    for (from, route) in routes {
        for target in route.targets() {
            let edge = format!("{} -> {}", from, target);

            if !registry.contains(&from) {
                errors.push(unknown_node(&from, edge.clone()));
            }
            if let Target::Step(to) = target {
                if !registry.contains(to) {
                    errors.push(unknown_node(to, edge));
                }
            }
        }

        if map.contains_key(&from) {
            if conflicting.insert(from.clone()) {
                errors.push(ValidationError::ConflictingRoutes(from));
            }
            continue;
        }
        map.insert(from, route);
    }

    if errors.is_empty() {
        Ok(map)
    } else {
        Err(errors)
    }
}

fn unknown_node(node: &str, edge: String) -> ValidationError {
    UnknownNodeDetected { node, edge: &edge }.log();
    ValidationError::UnknownNode {
        node: node.to_string(),
        edge,
    }
}

fn reachable_steps(graph: &PipelineGraph) -> HashSet<&str> {
    let mut seen = HashSet::new();
    let mut queue = VecDeque::from([graph.entry()]);

    while let Some(step) = queue.pop_front() {
        if !seen.insert(step) {
            continue;
        }
        for next in graph.successors(step) {
            if !seen.contains(next) {
                queue.push_back(next);
            }
        }
    }

    seen
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::graph::{Branch, Condition};
    use crate::steps::AnalyzeStudentDataStep;
    use std::sync::Arc;

    fn registry(names: &[&str]) -> StepRegistry {
        let mut registry = StepRegistry::new();
        for name in names {
            registry.register(*name, Arc::new(AnalyzeStudentDataStep::default()));
        }
        registry
    }

    fn edge(from: &str, to: &str) -> (String, Route) {
        (from.to_string(), Route::Next(to.into()))
    }

    #[test]
    fn valid_chain_passes() {
        let registry = registry(&["a", "b", "c"]);
        let (graph, warnings) =
            validate_pipeline(&registry, Some("a"), vec![edge("a", "b"), edge("b", "c")]).unwrap();

        assert_eq!(graph.entry(), "a");
        assert!(warnings.is_empty());
    }

    #[test]
    fn validation_errors_table_driven() {
        struct TestCase {
            name: &'static str,
            steps: Vec<&'static str>,
            entry: Option<&'static str>,
            routes: Vec<(String, Route)>,
            expected: Vec<ValidationError>,
        }

        let test_cases = vec![
            TestCase {
                name: "missing entry",
                steps: vec!["a"],
                entry: None,
                routes: vec![],
                expected: vec![ValidationError::MissingEntry],
            },
            TestCase {
                name: "unknown entry",
                steps: vec!["a"],
                entry: Some("z"),
                routes: vec![],
                expected: vec![ValidationError::UnknownEntry("z".into())],
            },
            TestCase {
                name: "end is not a valid entry",
                steps: vec!["a"],
                entry: Some(END),
                routes: vec![],
                expected: vec![ValidationError::UnknownEntry(END.into())],
            },
            TestCase {
                name: "end registered as the entry step",
                steps: vec!["a", END],
                entry: Some(END),
                routes: vec![edge(END, "a")],
                expected: vec![ValidationError::ReservedStepName(END.into())],
            },
            TestCase {
                name: "end registered alongside other steps",
                steps: vec!["a", END],
                entry: Some("a"),
                routes: vec![edge("a", END)],
                expected: vec![ValidationError::ReservedStepName(END.into())],
            },
            TestCase {
                name: "edge to unregistered step",
                steps: vec!["a"],
                entry: Some("a"),
                routes: vec![edge("a", "ghost")],
                expected: vec![ValidationError::UnknownNode {
                    node: "ghost".into(),
                    edge: "a -> ghost".into(),
                }],
            },
            TestCase {
                name: "edge from unregistered step",
                steps: vec!["a"],
                entry: Some("a"),
                routes: vec![edge("ghost", "a")],
                expected: vec![ValidationError::UnknownNode {
                    node: "ghost".into(),
                    edge: "ghost -> a".into(),
                }],
            },
            TestCase {
                name: "two routes out of one step",
                steps: vec!["a", "b", "c"],
                entry: Some("a"),
                routes: vec![edge("a", "b"), edge("a", "c"), edge("a", END)],
                expected: vec![ValidationError::ConflictingRoutes("a".into())],
            },
            TestCase {
                name: "cycle with no exit",
                steps: vec!["a", "b"],
                entry: Some("a"),
                routes: vec![edge("a", "b"), edge("b", "a")],
                expected: vec![ValidationError::NoTerminalPath { entry: "a".into() }],
            },
            TestCase {
                name: "errors accumulate",
                steps: vec!["a"],
                entry: None,
                routes: vec![edge("a", "ghost")],
                expected: vec![
                    ValidationError::MissingEntry,
                    ValidationError::UnknownNode {
                        node: "ghost".into(),
                        edge: "a -> ghost".into(),
                    },
                ],
            },
        ];

        for tc in test_cases {
            let registry = registry(&tc.steps);
            let result = validate_pipeline(&registry, tc.entry, tc.routes);
            match result {
                Ok(_) => panic!("Test case '{}': expected validation to fail", tc.name),
                Err(err) => assert_eq!(err.errors, tc.expected, "Test case '{}'", tc.name),
            }
        }
    }

    #[test]
    fn loop_with_conditional_exit_is_valid() {
        let registry = registry(&["a", "b"]);
        let routes = vec![
            edge("a", "b"),
            (
                "b".to_string(),
                Route::Conditional {
                    branches: vec![Branch::new(
                        Condition::new("revisions_remaining", |s| s.revisions_remaining()),
                        "a",
                    )],
                    default: Target::End,
                },
            ),
        ];

        assert!(validate_pipeline(&registry, Some("a"), routes).is_ok());
    }

    #[test]
    fn unreachable_steps_are_warnings() {
        let registry = registry(&["a", "b", "orphan", "another"]);
        let (_, warnings) = validate_pipeline(&registry, Some("a"), vec![edge("a", "b")]).unwrap();

        assert_eq!(
            warnings,
            vec![
                ValidationWarning::UnreachableStep("another".into()),
                ValidationWarning::UnreachableStep("orphan".into()),
            ]
        );
    }
}
