// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{AiConfig, EngineId};
use serde::Deserialize;

/// Placement of an engine: accelerator device or host processor.
///
/// The variant order mirrors the runtime's configuration enumeration
/// (`DEVICE` = 0, `HOST` = 1); translation relies on that correspondence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunSide {
    Device,
    Host,
}

/// Description of one processing node in a graph.
///
/// A pure data holder: fields are public and mutable until the description
/// is handed to the builder, and nothing is validated here. Engine ids must
/// be unique within their graph and consistent with every connection that
/// names them; that is the caller's responsibility (or
/// [`validate_graphs`](crate::config::validate_graphs), invoked explicitly).
///
/// Only a subset of these fields is carried by the serialized configuration
/// message; the rest (`thread_priority`, `internal_so_name`,
/// `wait_inputdata_max_time`, the two flags) are held for completeness of
/// the description and left unset on the wire.
///
/// # Example
/// ```
/// use dyngraph::config::{Engine, RunSide};
///
/// let mut src = Engine::new("SourceEngine", 1000, 1, RunSide::Host);
/// src.queue_size = 200;
/// src.so_name.push("libsource.so".to_string());
/// src.ai_config.add("input_path", "./data");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Engine {
    pub id: EngineId,
    pub name: String,
    pub side: RunSide,
    #[serde(default = "default_thread_num")]
    pub thread_num: u32,
    #[serde(default)]
    pub thread_priority: u32,
    #[serde(default)]
    pub queue_size: u32,
    #[serde(default)]
    pub so_name: Vec<String>,
    #[serde(default)]
    pub ai_config: AiConfig,
    #[serde(default)]
    pub internal_so_name: Vec<String>,
    #[serde(default)]
    pub wait_inputdata_max_time: u32,
    #[serde(default)]
    pub hold_model_file: bool,
    #[serde(default)]
    pub repeat_timeout: bool,
}

fn default_thread_num() -> u32 {
    1
}

impl Engine {
    /// Create an engine description with the commonly varied fields; the
    /// remainder start at their defaults and are set directly on the struct.
    pub fn new(
        name: impl Into<String>,
        id: impl Into<EngineId>,
        thread_num: u32,
        side: RunSide,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            side,
            thread_num,
            thread_priority: 0,
            queue_size: 0,
            so_name: Vec::new(),
            ai_config: AiConfig::default(),
            internal_so_name: Vec::new(),
            wait_inputdata_max_time: 0,
            hold_model_file: false,
            repeat_timeout: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let e = Engine::new("Inference", 42, 2, RunSide::Device);
        assert_eq!(e.id, EngineId(42));
        assert_eq!(e.name, "Inference");
        assert_eq!(e.thread_num, 2);
        assert_eq!(e.side, RunSide::Device);
        assert_eq!(e.queue_size, 0);
        assert!(e.so_name.is_empty());
        assert!(e.ai_config.items.is_empty());
        assert!(!e.hold_model_file);
        assert!(!e.repeat_timeout);
    }

    #[test]
    fn deserializes_with_defaults() {
        let yaml = r#"
id: 1000
name: SourceEngine
side: host
"#;
        let e: Engine = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(e.id, EngineId(1000));
        assert_eq!(e.side, RunSide::Host);
        assert_eq!(e.thread_num, 1);
        assert_eq!(e.queue_size, 0);
    }

    #[test]
    fn deserializes_full_form() {
        let yaml = r#"
id: 1001
name: InferenceEngine
side: device
thread_num: 4
queue_size: 200
so_name: [libinference.so]
ai_config:
  - name: model_path
    value: ./resnet18.om
"#;
        let e: Engine = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(e.thread_num, 4);
        assert_eq!(e.queue_size, 200);
        assert_eq!(e.so_name, vec!["libinference.so"]);
        assert_eq!(e.ai_config.items[0].value, "./resnet18.om");
    }

    #[test]
    fn side_rejects_unknown_values() {
        let yaml = r#"
id: 1
name: Broken
side: gpu
"#;
        assert!(serde_yaml::from_str::<Engine>(yaml).is_err());
    }
}
