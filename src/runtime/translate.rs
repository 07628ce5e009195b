// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Translation from graph descriptions to the runtime's configuration
//! message.
//!
//! The wire message carries a deliberate subset of the description: the
//! fields the runtime consumes at creation time. Description-only fields
//! (thread priority, internal libraries, input-wait deadline, the model
//! flags, cross-graph connection targets) are declared in the schema but
//! never written here; they ride at their protobuf defaults.

use crate::config::{Connection, Engine, Graph, RunSide};
use crate::proto::graph_v1 as pb;

/// Serialize a set of graph descriptions into one [`GraphConfigList`]
/// message, preserving graph, engine, connection, and config-item order.
///
/// Pure function of the descriptions; [`DynamicGraph::create`] calls it
/// and keeps the result for inspection, but it is equally usable to
/// produce a configuration without any runtime at hand.
///
/// [`GraphConfigList`]: crate::proto::GraphConfigList
/// [`DynamicGraph::create`]: crate::runtime::DynamicGraph::create
pub fn build_config(graphs: &[Graph]) -> pb::GraphConfigList {
    pb::GraphConfigList {
        graphs: graphs.iter().map(graph_config).collect(),
    }
}

fn graph_config(graph: &Graph) -> pb::GraphConfig {
    pb::GraphConfig {
        graph_id: graph.graph_id.into(),
        device_id: graph.device_id.to_string(),
        priority: graph.priority,
        engines: graph.engines.iter().map(engine_config).collect(),
        connects: graph.connections.iter().map(connect_config).collect(),
    }
}

fn engine_config(engine: &Engine) -> pb::EngineConfig {
    let mut config = pb::EngineConfig {
        id: engine.id.into(),
        engine_name: engine.name.clone(),
        thread_num: engine.thread_num,
        queue_size: engine.queue_size,
        so_name: engine.so_name.clone(),
        // Always present, even with no items; the runtime distinguishes
        // an empty config from an absent one.
        ai_config: Some(pb::AiConfig {
            items: engine
                .ai_config
                .items
                .iter()
                .map(|item| pb::AiConfigItem {
                    name: item.name.clone(),
                    value: item.value.clone(),
                })
                .collect(),
        }),
        ..Default::default()
    };
    config.set_side(run_side(engine.side));
    config
}

fn connect_config(connection: &Connection) -> pb::ConnectConfig {
    pb::ConnectConfig {
        src_engine_id: connection.src_engine_id.into(),
        src_port_id: connection.src_port_id.into(),
        target_engine_id: connection.target_engine_id.into(),
        target_port_id: connection.target_port_id.into(),
        ..Default::default()
    }
}

fn run_side(side: RunSide) -> pb::engine_config::RunSide {
    match side {
        RunSide::Device => pb::engine_config::RunSide::Device,
        RunSide::Host => pb::engine_config::RunSide::Host,
    }
}
