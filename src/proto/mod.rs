// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

// Module declaration for generated protobuf code. The generated file is
// checked in; regenerate with prost-build from proto/graph.v1.proto.
#[path = "graph.v1.rs"]
pub mod graph_v1;

// Re-export the types for easier access
pub use graph_v1::{GraphConfig, GraphConfigList};
