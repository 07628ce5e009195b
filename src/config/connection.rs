// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Engine, EngineId, GraphId, PortId};
use serde::Deserialize;

/// A directed edge between two engine ports.
///
/// Endpoints are named by engine id, not by reference; a connection is
/// valid only when both ids resolve to engines of the containing graph.
/// `target_graph_id` supports cross-graph wiring in the description and
/// defaults to graph 0; it is not carried by the serialized configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct Connection {
    pub src_engine_id: EngineId,
    pub src_port_id: PortId,
    pub target_engine_id: EngineId,
    pub target_port_id: PortId,
    #[serde(default)]
    pub target_graph_id: GraphId,
}

impl Connection {
    pub fn new(
        src_engine_id: impl Into<EngineId>,
        src_port_id: impl Into<PortId>,
        target_engine_id: impl Into<EngineId>,
        target_port_id: impl Into<PortId>,
    ) -> Self {
        Self {
            src_engine_id: src_engine_id.into(),
            src_port_id: src_port_id.into(),
            target_engine_id: target_engine_id.into(),
            target_port_id: target_port_id.into(),
            target_graph_id: GraphId(0),
        }
    }

    /// Convenience constructor taking the engines themselves, so callers
    /// wiring a graph by hand cannot transpose the ids.
    pub fn between(
        src: &Engine,
        src_port_id: impl Into<PortId>,
        target: &Engine,
        target_port_id: impl Into<PortId>,
    ) -> Self {
        Self::new(src.id, src_port_id, target.id, target_port_id)
    }
}
