// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::Graph;
use crate::errors::ConfigError;
use crate::observability::messages::validation::DescriptionRejected;
use crate::observability::messages::StructuredLog;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Top-level document for a file-based graph description.
///
/// A set holds every graph that will be created together in one
/// [`create`](crate::runtime::DynamicGraph::create) call. It is typically
/// loaded from a YAML file, though descriptions can equally be built in
/// code with the constructors on [`Graph`] and friends.
///
/// # Example
/// ```yaml
/// graphs:
///   - graph_id: 100
///     device_id: 0
///     priority: 0
///     engines:
///       - id: 1000
///         name: SourceEngine
///         side: host
///         so_name: [libsource.so]
///         ai_config:
///           - name: input_path
///             value: ./data
///       - id: 1001
///         name: InferenceEngine
///         side: device
///         thread_num: 2
///     connections:
///       - src_engine_id: 1000
///         src_port_id: 0
///         target_engine_id: 1001
///         target_port_id: 0
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GraphSet {
    pub graphs: Vec<Graph>,
}

/// Load a graph description set from a YAML file.
///
/// No structural validation happens here; the returned set is exactly what
/// the file said. Use [`load_and_validate_config`] when the file is not
/// fully trusted.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<GraphSet, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let set: GraphSet = serde_yaml::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(set)
}

/// Load a graph description set from a YAML file and validate it.
///
/// Runs [`validate_graphs`](crate::config::validate_graphs) on the loaded
/// set. Every validation failure is logged before the combined error is
/// returned, so a rejected file leaves a full account in the logs.
pub fn load_and_validate_config<P: AsRef<Path>>(path: P) -> Result<GraphSet, ConfigError> {
    let set = load_config(path)?;

    if let Err(errors) = crate::config::validate_graphs(&set.graphs) {
        for error in &errors {
            tracing::error!("{}", error);
        }
        DescriptionRejected {
            error_count: errors.len(),
        }
        .log();
        return Err(ConfigError::Validation { errors });
    }

    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DeviceId, EngineId, GraphId, RunSide};
    use std::io::Write;
    use tempfile::NamedTempFile;

    const WIRED_PAIR: &str = r#"
graphs:
  - graph_id: 100
    device_id: 0
    engines:
      - id: 1000
        name: SourceEngine
        side: host
        so_name: [libsource.so]
        ai_config:
          - name: input_path
            value: ./data
      - id: 1001
        name: InferenceEngine
        side: device
        thread_num: 2
    connections:
      - src_engine_id: 1000
        src_port_id: 0
        target_engine_id: 1001
        target_port_id: 0
"#;

    #[test]
    fn parse_basic_description() {
        let set: GraphSet = serde_yaml::from_str(WIRED_PAIR).unwrap();
        assert_eq!(set.graphs.len(), 1);

        let graph = &set.graphs[0];
        assert_eq!(graph.graph_id, GraphId(100));
        assert_eq!(graph.device_id, DeviceId(0));
        assert_eq!(graph.engines.len(), 2);
        assert_eq!(graph.engines[0].side, RunSide::Host);
        assert_eq!(graph.engines[0].ai_config.items[0].name, "input_path");
        assert_eq!(graph.engines[1].thread_num, 2);
        assert_eq!(graph.connections[0].target_engine_id, EngineId(1001));
    }

    #[test]
    fn test_load_valid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(WIRED_PAIR.as_bytes()).unwrap();

        let set = load_config(temp_file.path()).unwrap();
        assert_eq!(set.graphs[0].engines.len(), 2);
    }

    #[test]
    fn test_load_missing_file() {
        let result = load_config("/nonexistent/path/to/graphs.yaml");
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn test_load_malformed_yaml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"graphs: [unbalanced").unwrap();

        let result = load_config(temp_file.path());
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_load_and_validate_accepts_wired_pair() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(WIRED_PAIR.as_bytes()).unwrap();

        assert!(load_and_validate_config(temp_file.path()).is_ok());
    }

    #[test]
    fn test_load_and_validate_rejects_dangling_connection() {
        let yaml = r#"
graphs:
  - graph_id: 100
    engines:
      - id: 1000
        name: SourceEngine
        side: host
    connections:
      - src_engine_id: 1000
        src_port_id: 0
        target_engine_id: 9999
        target_port_id: 0
"#;
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml.as_bytes()).unwrap();

        let result = load_and_validate_config(temp_file.path());
        match result {
            Err(ConfigError::Validation { errors }) => assert_eq!(errors.len(), 1),
            other => panic!("expected validation failure, got {other:?}"),
        }
    }
}
