// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{Graph, GraphId};
use crate::errors::GraphError;
use crate::observability::messages::lifecycle::{
    DeviceInitFailed, GraphCreateCompleted, GraphCreateFailed, GraphCreateStarted,
    GraphDestroyCompleted, GraphDestroyFailed, GraphLookupFailed, NoGraphsToCreate,
};
use crate::observability::messages::StructuredLog;
use crate::proto::GraphConfigList;
use crate::runtime::translate::build_config;
use crate::runtime::{EnginePort, Payload};
use crate::traits::{DataReceiver, GraphHandle, GraphRuntime};
use std::fmt;
use std::sync::Arc;

/// Lifecycle façade over a set of graph descriptions and the runtime that
/// hosts them.
///
/// A `DynamicGraph` collects descriptions with [`add_graph`], then drives
/// the whole set through the runtime as one unit: [`create`] initializes
/// every device, translates the descriptions into the runtime's
/// configuration message, and instantiates them; [`destroy`] tears every
/// graph down again. Between those two calls, [`set_data_receiver`] and
/// [`send`] address individual engine ports of the live graphs.
///
/// The runtime is an injected collaborator, so the same façade code runs
/// against the production bindings and against
/// [`StubRuntime`](crate::backends::StubRuntime) in tests.
///
/// # Example
/// ```
/// use dyngraph::backends::StubRuntime;
/// use dyngraph::config::{Engine, Graph, RunSide};
/// use dyngraph::runtime::DynamicGraph;
/// use std::sync::Arc;
///
/// let runtime = Arc::new(StubRuntime::new());
/// let mut graphs = DynamicGraph::new(runtime);
///
/// let mut graph = Graph::new(100, 0);
/// graph.add_engine(Engine::new("SourceEngine", 1000, 1, RunSide::Host));
/// graphs.add_graph(graph);
///
/// graphs.create()?;
/// assert_eq!(graphs.graph_id_at(0)?.0, 100);
/// graphs.destroy()?;
/// # Ok::<(), dyngraph::errors::GraphError>(())
/// ```
///
/// [`add_graph`]: DynamicGraph::add_graph
/// [`create`]: DynamicGraph::create
/// [`destroy`]: DynamicGraph::destroy
/// [`set_data_receiver`]: DynamicGraph::set_data_receiver
/// [`send`]: DynamicGraph::send
pub struct DynamicGraph {
    runtime: Arc<dyn GraphRuntime>,
    graphs: Vec<Graph>,
    last_config: Option<GraphConfigList>,
}

impl DynamicGraph {
    pub fn new(runtime: Arc<dyn GraphRuntime>) -> Self {
        Self {
            runtime,
            graphs: Vec::new(),
            last_config: None,
        }
    }

    /// Append a graph description to the set.
    ///
    /// Descriptions are kept in insertion order, which is also the order
    /// of device initialization, translation, and destruction. No checks
    /// happen here; call
    /// [`validate_graphs`](crate::config::validate_graphs) first when the
    /// description needs one.
    pub fn add_graph(&mut self, graph: Graph) -> &mut Self {
        self.graphs.push(graph);
        self
    }

    /// The owned descriptions, in insertion order.
    pub fn graphs(&self) -> &[Graph] {
        &self.graphs
    }

    /// The graph id at a position in insertion order.
    pub fn graph_id_at(&self, index: usize) -> Result<GraphId, GraphError> {
        self.graphs
            .get(index)
            .map(|g| g.graph_id)
            .ok_or(GraphError::IndexOutOfRange {
                index,
                len: self.graphs.len(),
            })
    }

    /// Create every owned graph on the runtime.
    ///
    /// Runs the full creation sequence: per graph in insertion order the
    /// graph's device is initialized, then the whole set is translated
    /// into one configuration message and handed to the runtime in a
    /// single call. The first failing device initialization aborts the
    /// sequence before anything is translated or created.
    ///
    /// The translated configuration is retained for inspection through
    /// [`last_config`](DynamicGraph::last_config) whether or not the
    /// runtime accepted it.
    pub fn create(&mut self) -> Result<(), GraphError> {
        if self.graphs.is_empty() {
            NoGraphsToCreate.log();
            return Err(GraphError::EmptyGraphList);
        }

        GraphCreateStarted {
            graph_count: self.graphs.len(),
            engine_count: self.graphs.iter().map(|g| g.engines.len()).sum(),
        }
        .log();

        for graph in &self.graphs {
            if let Err(status) = self.runtime.init_device(graph.device_id) {
                DeviceInitFailed {
                    device_id: graph.device_id,
                    status,
                }
                .log();
                return Err(GraphError::DeviceInitFailed {
                    device_id: graph.device_id,
                    status,
                });
            }
        }

        let config = build_config(&self.graphs);
        let result = self.runtime.create(&config);
        self.last_config = Some(config);

        match result {
            Ok(()) => {
                GraphCreateCompleted {
                    graph_count: self.graphs.len(),
                }
                .log();
                Ok(())
            }
            Err(status) => {
                GraphCreateFailed { status }.log();
                Err(GraphError::CreateFailed { status })
            }
        }
    }

    /// Destroy every owned graph on the runtime.
    ///
    /// Destruction is attempted for every graph regardless of earlier
    /// failures, so one refusing graph cannot leak the rest. All failures
    /// are collected into a single
    /// [`DestroyFailed`](GraphError::DestroyFailed) listing each graph id
    /// with the status the runtime returned for it.
    pub fn destroy(&self) -> Result<(), GraphError> {
        let mut failures = Vec::new();

        for graph in &self.graphs {
            if let Err(status) = self.runtime.destroy(graph.graph_id) {
                GraphDestroyFailed {
                    graph_id: graph.graph_id,
                    status,
                }
                .log();
                failures.push((graph.graph_id, status));
            }
        }

        if failures.is_empty() {
            GraphDestroyCompleted {
                graph_count: self.graphs.len(),
            }
            .log();
            Ok(())
        } else {
            Err(GraphError::DestroyFailed { failures })
        }
    }

    /// Attach a receive callback to an engine port of a live graph.
    ///
    /// Fails with [`GraphNotFound`](GraphError::GraphNotFound) when the
    /// port's graph has no live instance, without attempting the
    /// registration.
    pub fn set_data_receiver(
        &self,
        port: EnginePort,
        receiver: Arc<dyn DataReceiver>,
    ) -> Result<(), GraphError> {
        let handle = self.live_handle(port.graph)?;
        self.runtime
            .register_receiver(handle, &port, receiver)
            .map_err(|status| GraphError::RegisterFailed { port, status })
    }

    /// Post a payload to an engine port of a live graph.
    ///
    /// `message_name` tags the payload for the runtime; the payload
    /// itself is opaque here. Resolution failures behave exactly as in
    /// [`set_data_receiver`](DynamicGraph::set_data_receiver).
    pub fn send(
        &self,
        port: EnginePort,
        message_name: &str,
        payload: Payload,
    ) -> Result<(), GraphError> {
        let handle = self.live_handle(port.graph)?;
        self.runtime
            .send(handle, &port, message_name, payload)
            .map_err(|status| GraphError::SendFailed { port, status })
    }

    /// The configuration message built by the most recent
    /// [`create`](DynamicGraph::create) call, if any.
    pub fn last_config(&self) -> Option<&GraphConfigList> {
        self.last_config.as_ref()
    }

    fn live_handle(&self, graph_id: GraphId) -> Result<GraphHandle, GraphError> {
        match self.runtime.lookup(graph_id) {
            Some(handle) => Ok(handle),
            None => {
                GraphLookupFailed { graph_id }.log();
                Err(GraphError::GraphNotFound { graph_id })
            }
        }
    }
}

impl fmt::Debug for DynamicGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynamicGraph")
            .field("graph_count", &self.graphs.len())
            .field(
                "graph_ids",
                &self.graphs.iter().map(|g| g.graph_id).collect::<Vec<_>>(),
            )
            .field("has_config", &self.last_config.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backends::StubRuntime;

    fn empty_facade() -> DynamicGraph {
        DynamicGraph::new(Arc::new(StubRuntime::new()))
    }

    #[test]
    fn add_graph_preserves_insertion_order() {
        let mut graphs = empty_facade();
        graphs
            .add_graph(Graph::new(102, 0))
            .add_graph(Graph::new(100, 0));

        assert_eq!(graphs.graphs().len(), 2);
        assert_eq!(graphs.graph_id_at(0).unwrap(), GraphId(102));
        assert_eq!(graphs.graph_id_at(1).unwrap(), GraphId(100));
    }

    #[test]
    fn graph_id_at_rejects_out_of_range_index() {
        let mut graphs = empty_facade();
        graphs.add_graph(Graph::new(100, 0));

        let err = graphs.graph_id_at(3).unwrap_err();
        assert_eq!(err, GraphError::IndexOutOfRange { index: 3, len: 1 });
    }

    #[test]
    fn last_config_is_empty_until_create() {
        let mut graphs = empty_facade();
        graphs.add_graph(Graph::new(100, 0));
        assert!(graphs.last_config().is_none());

        graphs.create().unwrap();
        let config = graphs.last_config().unwrap();
        assert_eq!(config.graphs[0].graph_id, 100);
    }

    #[test]
    fn debug_reports_counts_not_contents() {
        let mut graphs = empty_facade();
        graphs.add_graph(Graph::new(100, 0));

        let rendered = format!("{graphs:?}");
        assert!(rendered.contains("graph_count: 1"));
        assert!(rendered.contains("has_config: false"));
    }
}
