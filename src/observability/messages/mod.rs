// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! This module contains all message types used for diagnostic and
//! operational logging. Each message type implements the `Display` trait
//! to provide consistent, human-readable output while enabling future
//! internationalization, and [`StructuredLog`] to emit the same event
//! with its fields attached.
//!
//! # Organization
//!
//! Messages are organized by subsystem:
//!
//! * `lifecycle` - Graph creation, destruction, and resolution events
//! * `validation` - Description validation warnings and errors
//!
//! # Usage Pattern
//!
//! ```rust
//! use dyngraph::observability::messages::lifecycle::GraphCreateStarted;
//!
//! let msg = GraphCreateStarted {
//!     graph_count: 2,
//!     engine_count: 5,
//! };
//!
//! tracing::info!("{}", msg);
//! ```

use tracing::Span;

pub mod lifecycle;
pub mod validation;

/// Emit a message as a structured tracing event.
///
/// `log()` records the event at the level documented on the message type,
/// with every message field attached as a tracing field. `span()` opens a
/// span carrying the same fields for callers that want to scope further
/// work under the event.
pub trait StructuredLog {
    fn log(&self);

    fn span(&self, name: &str) -> Span;
}
