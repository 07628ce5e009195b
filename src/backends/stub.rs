// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{DeviceId, GraphId};
use crate::errors::StatusCode;
use crate::proto::GraphConfigList;
use crate::runtime::{EnginePort, Payload};
use crate::traits::{DataReceiver, GraphHandle, GraphRuntime};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// One recorded runtime invocation, in call order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuntimeCall {
    InitDevice {
        device_id: DeviceId,
    },
    CreateGraphs {
        graph_ids: Vec<GraphId>,
    },
    Destroy {
        graph_id: GraphId,
    },
    RegisterReceiver {
        port: EnginePort,
    },
    Send {
        port: EnginePort,
        message_name: String,
    },
}

#[derive(Default)]
struct StubState {
    calls: Vec<RuntimeCall>,
    live: HashMap<GraphId, GraphHandle>,
    receivers: HashMap<EnginePort, Arc<dyn DataReceiver>>,
    next_handle: u64,
    fail_init: HashMap<DeviceId, StatusCode>,
    fail_create: Option<StatusCode>,
    fail_destroy: HashMap<GraphId, StatusCode>,
    fail_register: Option<StatusCode>,
    fail_send: Option<StatusCode>,
}

/// In-memory [`GraphRuntime`] that records every call and succeeds unless
/// told otherwise.
///
/// Each operation can be scripted to fail with a chosen status, keyed by
/// device or graph where the real runtime would discriminate. Created
/// graphs are tracked as live with minted handles until destroyed, so
/// lookup behaves like the real thing across the whole lifecycle.
///
/// Registered receivers are retained; [`deliver`](StubRuntime::deliver)
/// pushes a payload through one the way a live graph would, which lets a
/// test drive the receive path without any engine behind it.
///
/// The stub also serves outside tests as a dry-run target: point a
/// [`DynamicGraph`](crate::runtime::DynamicGraph) at it to exercise
/// description, validation, and translation with no device present.
pub struct StubRuntime {
    state: Mutex<StubState>,
}

impl StubRuntime {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(StubState::default()),
        }
    }

    /// Script `init_device` to fail for one device.
    pub fn fail_init_for(&self, device: impl Into<DeviceId>, status: StatusCode) {
        self.state().fail_init.insert(device.into(), status);
    }

    /// Script `create` to fail.
    pub fn fail_create(&self, status: StatusCode) {
        self.state().fail_create = Some(status);
    }

    /// Script `destroy` to fail for one graph.
    pub fn fail_destroy_for(&self, graph: impl Into<GraphId>, status: StatusCode) {
        self.state().fail_destroy.insert(graph.into(), status);
    }

    /// Script `register_receiver` to fail.
    pub fn fail_register(&self, status: StatusCode) {
        self.state().fail_register = Some(status);
    }

    /// Script `send` to fail.
    pub fn fail_send(&self, status: StatusCode) {
        self.state().fail_send = Some(status);
    }

    /// Every runtime call made so far, in order.
    pub fn calls(&self) -> Vec<RuntimeCall> {
        self.state().calls.clone()
    }

    /// Ids of the graphs currently live, sorted for stable assertions.
    pub fn live_graphs(&self) -> Vec<GraphId> {
        let mut ids: Vec<GraphId> = self.state().live.keys().copied().collect();
        ids.sort();
        ids
    }

    /// Whether a receiver is registered on the port.
    pub fn has_receiver(&self, port: &EnginePort) -> bool {
        self.state().receivers.contains_key(port)
    }

    /// Invoke the receiver registered on the port, as the runtime would
    /// when data leaves that port. `None` when no receiver is registered.
    pub fn deliver(&self, port: &EnginePort, payload: Payload) -> Option<Result<(), StatusCode>> {
        let receiver = self.state().receivers.get(port).cloned();
        receiver.map(|r| r.receive(payload))
    }

    fn state(&self) -> MutexGuard<'_, StubState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for StubRuntime {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphRuntime for StubRuntime {
    fn init_device(&self, device: DeviceId) -> Result<(), StatusCode> {
        let mut state = self.state();
        state.calls.push(RuntimeCall::InitDevice { device_id: device });
        match state.fail_init.get(&device) {
            Some(status) => Err(*status),
            None => Ok(()),
        }
    }

    fn create(&self, config: &GraphConfigList) -> Result<(), StatusCode> {
        let graph_ids: Vec<GraphId> = config.graphs.iter().map(|g| GraphId(g.graph_id)).collect();

        let mut state = self.state();
        state.calls.push(RuntimeCall::CreateGraphs {
            graph_ids: graph_ids.clone(),
        });

        if let Some(status) = state.fail_create {
            return Err(status);
        }

        for graph_id in graph_ids {
            state.next_handle += 1;
            let handle = GraphHandle::from_raw(state.next_handle);
            state.live.insert(graph_id, handle);
        }
        Ok(())
    }

    fn destroy(&self, graph: GraphId) -> Result<(), StatusCode> {
        let mut state = self.state();
        state.calls.push(RuntimeCall::Destroy { graph_id: graph });
        match state.fail_destroy.get(&graph) {
            Some(status) => Err(*status),
            None => {
                state.live.remove(&graph);
                Ok(())
            }
        }
    }

    fn lookup(&self, graph: GraphId) -> Option<GraphHandle> {
        self.state().live.get(&graph).copied()
    }

    fn register_receiver(
        &self,
        _handle: GraphHandle,
        port: &EnginePort,
        receiver: Arc<dyn DataReceiver>,
    ) -> Result<(), StatusCode> {
        let mut state = self.state();
        state.calls.push(RuntimeCall::RegisterReceiver { port: *port });
        if let Some(status) = state.fail_register {
            return Err(status);
        }
        state.receivers.insert(*port, receiver);
        Ok(())
    }

    fn send(
        &self,
        _handle: GraphHandle,
        port: &EnginePort,
        message_name: &str,
        _payload: Payload,
    ) -> Result<(), StatusCode> {
        let mut state = self.state();
        state.calls.push(RuntimeCall::Send {
            port: *port,
            message_name: message_name.to_string(),
        });
        match state.fail_send {
            Some(status) => Err(status),
            None => Ok(()),
        }
    }
}

impl fmt::Debug for StubRuntime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state();
        f.debug_struct("StubRuntime")
            .field("call_count", &state.calls.len())
            .field("live_count", &state.live.len())
            .finish()
    }
}
