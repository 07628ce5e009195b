// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and
//! operational logging in the crate. Message types follow a struct-based
//! pattern with `Display` trait implementation to:
//!
//! * Eliminate magic strings scattered throughout the codebase
//! * Enable future internationalization without code changes
//! * Keep each event's fields and wording defined in exactly one place
//! * Provide consistent, structured logging output
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::lifecycle` - Graph creation, destruction, and resolution events
//! * `messages::validation` - Description validation warnings and errors
//!
//! # Usage
//!
//! ```rust
//! use dyngraph::config::GraphId;
//! use dyngraph::observability::messages::lifecycle::GraphLookupFailed;
//!
//! let msg = GraphLookupFailed {
//!     graph_id: GraphId(100),
//! };
//!
//! tracing::error!("{}", msg);
//! ```

pub mod messages;
