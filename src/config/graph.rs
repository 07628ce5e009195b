// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Connection, DeviceId, Engine, GraphId};
use serde::Deserialize;

/// Description of one computation graph: its identity, the device it is
/// placed on, and the engines and connections that make up its topology.
///
/// Like the rest of the description types this is plain data. Engines and
/// connections are kept in insertion order, and nothing checks here that
/// connection endpoints resolve; run
/// [`validate_graphs`](crate::config::validate_graphs) before handing a
/// set of graphs to the builder if the description came from an untrusted
/// source.
///
/// # Example
/// ```
/// use dyngraph::config::{Connection, Engine, Graph, RunSide};
///
/// let src = Engine::new("Source", 1000, 1, RunSide::Host);
/// let dst = Engine::new("Inference", 1001, 2, RunSide::Device);
/// let edge = Connection::between(&src, 0, &dst, 0);
///
/// let mut graph = Graph::new(100, 0);
/// graph.add_engine(src);
/// graph.add_engine(dst);
/// graph.add_connection(edge);
/// assert_eq!(graph.engines.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Graph {
    pub graph_id: GraphId,
    #[serde(default)]
    pub device_id: DeviceId,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub engines: Vec<Engine>,
    #[serde(default)]
    pub connections: Vec<Connection>,
}

impl Graph {
    /// Create an empty graph description with default priority.
    pub fn new(graph_id: impl Into<GraphId>, device_id: impl Into<DeviceId>) -> Self {
        Self {
            graph_id: graph_id.into(),
            device_id: device_id.into(),
            priority: 0,
            engines: Vec::new(),
            connections: Vec::new(),
        }
    }

    pub fn add_engine(&mut self, engine: Engine) -> &mut Self {
        self.engines.push(engine);
        self
    }

    pub fn add_connection(&mut self, connection: Connection) -> &mut Self {
        self.connections.push(connection);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::RunSide;

    #[test]
    fn new_starts_empty() {
        let g = Graph::new(100, 1);
        assert_eq!(g.graph_id, GraphId(100));
        assert_eq!(g.device_id, DeviceId(1));
        assert_eq!(g.priority, 0);
        assert!(g.engines.is_empty());
        assert!(g.connections.is_empty());
    }

    #[test]
    fn add_preserves_insertion_order() {
        let mut g = Graph::new(100, 0);
        g.add_engine(Engine::new("A", 1, 1, RunSide::Host))
            .add_engine(Engine::new("B", 2, 1, RunSide::Device))
            .add_connection(Connection::new(1, 0, 2, 0));
        assert_eq!(g.engines[0].name, "A");
        assert_eq!(g.engines[1].name, "B");
        assert_eq!(g.connections.len(), 1);
    }

    #[test]
    fn deserializes_minimal_form() {
        let yaml = "graph_id: 7";
        let g: Graph = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(g.graph_id, GraphId(7));
        assert_eq!(g.device_id, DeviceId(0));
        assert_eq!(g.priority, 0);
        assert!(g.engines.is_empty());
    }
}
