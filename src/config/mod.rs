// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod connection;
mod engine;
mod graph;
mod ids;
mod item;
mod loader;
mod validation;

pub use connection::Connection;
pub use engine::{Engine, RunSide};
pub use graph::Graph;
pub use ids::{DeviceId, EngineId, GraphId, PortId};
pub use item::{AiConfig, AiConfigItem};
pub use loader::{load_and_validate_config, load_config, GraphSet};
pub use validation::validate_graphs;
