// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Engine, EngineId, Graph, GraphId, PortId};
use std::fmt;

/// Full address of one engine port: graph, engine within the graph, and
/// port on the engine.
///
/// Receiver registration and sends are both addressed this way. The triple
/// is plain data; whether it points at anything live is only known to the
/// runtime when the operation is attempted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EnginePort {
    pub graph: GraphId,
    pub engine: EngineId,
    pub port: PortId,
}

impl EnginePort {
    pub fn new(
        graph: impl Into<GraphId>,
        engine: impl Into<EngineId>,
        port: impl Into<PortId>,
    ) -> Self {
        Self {
            graph: graph.into(),
            engine: engine.into(),
            port: port.into(),
        }
    }

    /// Address a port on an engine of a described graph, taking the ids
    /// from the descriptions themselves.
    pub fn of(graph: &Graph, engine: &Engine, port: impl Into<PortId>) -> Self {
        Self::new(graph.graph_id, engine.id, port)
    }
}

impl fmt::Display for EnginePort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "graph {}/engine {}/port {}",
            self.graph, self.engine, self.port
        )
    }
}
