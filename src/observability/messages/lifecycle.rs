// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for graph lifecycle events.
//!
//! This module contains message types for logging events related to:
//! * Graph creation and destruction
//! * Device initialization
//! * Live graph resolution

use crate::config::{DeviceId, GraphId};
use crate::errors::StatusCode;
use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Creation was requested with no graphs added.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct NoGraphsToCreate;

impl Display for NoGraphsToCreate {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No graphs to create")
    }
}

impl StructuredLog for NoGraphsToCreate {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(tracing::Level::ERROR, "span_name", name = name)
    }
}

/// Graph creation sequence started.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use dyngraph::observability::messages::lifecycle::GraphCreateStarted;
///
/// let msg = GraphCreateStarted {
///     graph_count: 2,
///     engine_count: 5,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct GraphCreateStarted {
    pub graph_count: usize,
    pub engine_count: usize,
}

impl Display for GraphCreateStarted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Creating {} graph(s) with {} engine(s)",
            self.graph_count, self.engine_count
        )
    }
}

impl StructuredLog for GraphCreateStarted {
    fn log(&self) {
        tracing::info!(
            graph_count = self.graph_count,
            engine_count = self.engine_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            graph_count = self.graph_count,
            engine_count = self.engine_count,
        )
    }
}

/// Every graph in the set was created.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GraphCreateCompleted {
    pub graph_count: usize,
}

impl Display for GraphCreateCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Created {} graph(s)", self.graph_count)
    }
}

impl StructuredLog for GraphCreateCompleted {
    fn log(&self) {
        tracing::info!(graph_count = self.graph_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            graph_count = self.graph_count,
        )
    }
}

/// The runtime rejected the translated configuration.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct GraphCreateFailed {
    pub status: StatusCode,
}

impl Display for GraphCreateFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Graph creation failed: {}", self.status)
    }
}

impl StructuredLog for GraphCreateFailed {
    fn log(&self) {
        tracing::error!(status = self.status.raw(), "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            status = self.status.raw(),
        )
    }
}

/// Device initialization failed before creation.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use dyngraph::config::DeviceId;
/// use dyngraph::errors::StatusCode;
/// use dyngraph::observability::messages::lifecycle::DeviceInitFailed;
///
/// let msg = DeviceInitFailed {
///     device_id: DeviceId(3),
///     status: StatusCode::new(0x6001),
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DeviceInitFailed {
    pub device_id: DeviceId,
    pub status: StatusCode,
}

impl Display for DeviceInitFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Device {} initialization failed: {}",
            self.device_id, self.status
        )
    }
}

impl StructuredLog for DeviceInitFailed {
    fn log(&self) {
        tracing::error!(
            device_id = self.device_id.0,
            status = self.status.raw(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            device_id = self.device_id.0,
            status = self.status.raw(),
        )
    }
}

/// Every graph in the set was destroyed.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GraphDestroyCompleted {
    pub graph_count: usize,
}

impl Display for GraphDestroyCompleted {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Destroyed {} graph(s)", self.graph_count)
    }
}

impl StructuredLog for GraphDestroyCompleted {
    fn log(&self) {
        tracing::info!(graph_count = self.graph_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::INFO,
            "span_name",
            name = name,
            graph_count = self.graph_count,
        )
    }
}

/// One graph could not be destroyed; the rest are still attempted.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct GraphDestroyFailed {
    pub graph_id: GraphId,
    pub status: StatusCode,
}

impl Display for GraphDestroyFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Failed to destroy graph {}: {}",
            self.graph_id, self.status
        )
    }
}

impl StructuredLog for GraphDestroyFailed {
    fn log(&self) {
        tracing::error!(
            graph_id = self.graph_id.0,
            status = self.status.raw(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            graph_id = self.graph_id.0,
            status = self.status.raw(),
        )
    }
}

/// A port operation addressed a graph with no live instance.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct GraphLookupFailed {
    pub graph_id: GraphId,
}

impl Display for GraphLookupFailed {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "No live graph instance for graph {}", self.graph_id)
    }
}

impl StructuredLog for GraphLookupFailed {
    fn log(&self) {
        tracing::error!(graph_id = self.graph_id.0, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            graph_id = self.graph_id.0,
        )
    }
}
