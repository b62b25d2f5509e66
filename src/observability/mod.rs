// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Message types for every diagnostic and operational log line live here. Each
//! message is a small struct implementing `Display`, so log text is defined in
//! one place instead of as format strings scattered through the engine.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::engine` - pipeline run lifecycle events
//! * `messages::step` - step execution and registry events
//! * `messages::validation` - build-time graph validation findings
//! * `messages::state` - initial state construction events
//!
//! # Usage
//!
//! ```rust
//! use learning_pathway::observability::messages::{step::StepStarted, StructuredLog};
//!
//! let msg = StepStarted {
//!     step: "analyze",
//!     sequence: 0,
//! };
//!
//! msg.log();
//! ```

pub mod messages;
