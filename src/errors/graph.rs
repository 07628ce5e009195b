// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by the graph lifecycle façade.
//!
//! Two families share the enum: precondition violations detected locally
//! (empty graph list, out-of-range index, unresolved graph id) and failures
//! reported by the external runtime. Runtime failures carry the runtime's
//! [`StatusCode`] verbatim; the façade never translates or enriches it.

use crate::config::{DeviceId, GraphId};
use crate::errors::StatusCode;
use crate::runtime::EnginePort;
use thiserror::Error;

/// Error type for every `DynamicGraph` operation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// `create` was called before any graph was added.
    #[error("no graphs to create")]
    EmptyGraphList,

    /// A positional graph lookup was out of bounds.
    #[error("graph index {index} out of range ({len} graphs)")]
    IndexOutOfRange { index: usize, len: usize },

    /// No live runtime instance exists for the addressed graph id.
    #[error("graph {graph_id} has no live runtime instance")]
    GraphNotFound { graph_id: GraphId },

    /// Device initialization failed; remaining devices were not attempted.
    #[error("device {device_id} initialization failed: {status}")]
    DeviceInitFailed {
        device_id: DeviceId,
        status: StatusCode,
    },

    /// The runtime rejected the translated configuration.
    #[error("graph creation failed: {status}")]
    CreateFailed { status: StatusCode },

    /// One or more graphs could not be destroyed. Destruction is attempted
    /// for every owned graph; `failures` lists each (graph id, status) that
    /// did not succeed, in insertion order.
    #[error("graph destroy failed for {} graph(s)", .failures.len())]
    DestroyFailed {
        failures: Vec<(GraphId, StatusCode)>,
    },

    /// The runtime refused the receive-callback registration.
    #[error("receiver registration failed on {port}: {status}")]
    RegisterFailed { port: EnginePort, status: StatusCode },

    /// The runtime refused to accept the message.
    #[error("send failed on {port}: {status}")]
    SendFailed { port: EnginePort, status: StatusCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_the_runtime_status_verbatim() {
        let err = GraphError::CreateFailed {
            status: StatusCode::new(0xC0DE),
        };
        assert_eq!(err.to_string(), "graph creation failed: status 0x0000C0DE");
    }

    #[test]
    fn destroy_failure_counts_graphs() {
        let err = GraphError::DestroyFailed {
            failures: vec![
                (GraphId(7), StatusCode::new(1)),
                (GraphId(9), StatusCode::new(2)),
            ],
        };
        assert_eq!(err.to_string(), "graph destroy failed for 2 graph(s)");
    }

    #[test]
    fn index_error_reports_bounds() {
        let err = GraphError::IndexOutOfRange { index: 3, len: 1 };
        assert_eq!(err.to_string(), "graph index 3 out of range (1 graphs)");
    }
}
