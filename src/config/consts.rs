// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Terminal sentinel: routing to this name completes the run
pub const END: &str = "__end__";
/// Marker appended to `student_data` by the analysis step
pub const ANALYSIS_MARKER: &str = " | Analysis complete";
/// Baseline revision number for a fresh state
pub const DEFAULT_REVISION_NUMBER: u32 = 1;
/// Baseline upper bound on feedback cycles
pub const DEFAULT_MAX_REVISIONS: u32 = 2;
/// Upper bound on steps executed in one run, guards looping graphs
pub const DEFAULT_MAX_STEPS: usize = 25;
/// Separator between topics in a rendered learning path
pub const PATH_SEPARATOR: &str = " -> ";
