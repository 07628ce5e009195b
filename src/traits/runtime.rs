use crate::config::{DeviceId, GraphId};
use crate::errors::StatusCode;
use crate::proto::GraphConfigList;
use crate::runtime::{EnginePort, Payload};
use crate::traits::receiver::DataReceiver;
use std::sync::Arc;

/// Opaque token for a live graph instance, minted by a [`GraphRuntime`]
/// when the graph is created and required for every per-graph operation
/// afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GraphHandle(u64);

impl GraphHandle {
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    pub const fn raw(&self) -> u64 {
        self.0
    }
}

/// Interface to the engine runtime that actually hosts graphs.
///
/// [`DynamicGraph`](crate::runtime::DynamicGraph) drives this trait and
/// never talks to a runtime any other way, so swapping the production
/// bindings for [`StubRuntime`](crate::backends::StubRuntime) in tests is
/// a constructor argument, not a feature flag.
///
/// All fallible operations report failure as the runtime's own
/// [`StatusCode`], unmodified; mapping those codes onto typed errors is
/// the caller's concern.
pub trait GraphRuntime: Send + Sync {
    /// Prepare the device a graph is placed on. Idempotent; called once
    /// per owned graph before creation.
    fn init_device(&self, device: DeviceId) -> Result<(), StatusCode>;

    /// Instantiate every graph in the serialized configuration.
    ///
    /// Creation is all-or-nothing from the caller's point of view: on
    /// error no handle from this call may be used.
    fn create(&self, config: &GraphConfigList) -> Result<(), StatusCode>;

    /// Tear down the named graph and release its resources.
    fn destroy(&self, graph: GraphId) -> Result<(), StatusCode>;

    /// Resolve a graph id to its live handle, or `None` when no such
    /// graph is currently instantiated.
    fn lookup(&self, graph: GraphId) -> Option<GraphHandle>;

    /// Attach a receive callback to an engine port.
    ///
    /// - `handle`: live graph the port belongs to
    /// - `port`: full engine port address
    /// - `receiver`: callback invoked for data leaving that port
    fn register_receiver(
        &self,
        handle: GraphHandle,
        port: &EnginePort,
        receiver: Arc<dyn DataReceiver>,
    ) -> Result<(), StatusCode>;

    /// Post a payload to an engine port.
    ///
    /// - `handle`: live graph the port belongs to
    /// - `port`: full engine port address
    /// - `message_name`: type tag the runtime uses to interpret the payload
    /// - `payload`: the data itself, serialized or shared
    fn send(
        &self,
        handle: GraphHandle,
        port: &EnginePort,
        message_name: &str,
        payload: Payload,
    ) -> Result<(), StatusCode>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handle_round_trips_raw_value() {
        let handle = GraphHandle::from_raw(42);
        assert_eq!(handle.raw(), 42);
        assert_eq!(handle, GraphHandle::from_raw(42));
    }
}
