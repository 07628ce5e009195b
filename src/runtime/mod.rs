// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dynamic_graph;
mod payload;
mod port;
mod translate;


pub use dynamic_graph::DynamicGraph;
pub use payload::Payload;
pub use port::EnginePort;
pub use translate::build_config;
