// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // graph, registry, validation, YAML loader
pub mod engine;     // pipeline runs
pub mod errors;     // error handling
pub mod observability;
pub mod presets;    // ready-made learning-path pipelines
pub mod state;      // shared state and typed updates
pub mod steps;      // built-in steps
pub mod suggest;    // external suggestion seam
pub mod taxonomy;
pub mod traits;     // unified abstractions
