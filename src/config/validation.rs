// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Structural validation for graph descriptions.
//!
//! The description types deliberately accept anything; this module is the
//! explicit checkpoint to run before a description is serialized and handed
//! to the runtime. Validation performs three checks:
//!
//! 1. **Graph uniqueness**: no two graphs in the set share an id
//! 2. **Engine uniqueness**: no two engines within a graph share an id
//! 3. **Connection resolution**: every connection endpoint names an engine
//!    that exists in its graph
//!
//! All checks run unconditionally and every failure is reported, so a bad
//! description surfaces its full list of problems in one pass instead of
//! one error per attempt.

use crate::config::Graph;
use crate::errors::{ConnectionEnd, ValidationError};
use std::collections::HashSet;

/// Validates a set of graph descriptions for structural integrity.
///
/// This is the main validation entry point; it runs every check and
/// accumulates all errors found. The runtime itself rejects malformed
/// configurations, but with opaque status codes and only at creation time.
/// Validating first turns those failures into named, per-field errors.
///
/// # Arguments
///
/// * `graphs` - The graph descriptions to validate
///
/// # Returns
///
/// * `Ok(())` - Descriptions are structurally sound
/// * `Err(Vec<ValidationError>)` - Every problem found, in check order
pub fn validate_graphs(graphs: &[Graph]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if let Err(duplicate_errors) = validate_unique_graph_ids(graphs) {
        errors.extend(duplicate_errors);
    }

    if let Err(duplicate_errors) = validate_unique_engine_ids(graphs) {
        errors.extend(duplicate_errors);
    }

    if let Err(unresolved_errors) = validate_connection_references(graphs) {
        errors.extend(unresolved_errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that graph ids are unique across the whole set.
///
/// Graph ids are the primary key for every lifecycle operation: creation,
/// destruction, receiver registration, and sends are all addressed by graph
/// id. Two graphs sharing an id would make those operations ambiguous.
fn validate_unique_graph_ids(graphs: &[Graph]) -> Result<(), Vec<ValidationError>> {
    let mut seen_ids = HashSet::new();
    let mut errors = Vec::new();

    for graph in graphs {
        if !seen_ids.insert(graph.graph_id) {
            errors.push(ValidationError::DuplicateGraphId {
                graph_id: graph.graph_id,
            });
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that engine ids are unique within each graph.
///
/// Engine ids only need to be distinct inside their own graph; the same id
/// may appear in two different graphs. Connections resolve endpoints by
/// engine id, so a duplicate would make the topology ambiguous.
fn validate_unique_engine_ids(graphs: &[Graph]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for graph in graphs {
        let mut seen_ids = HashSet::new();
        for engine in &graph.engines {
            if !seen_ids.insert(engine.id) {
                errors.push(ValidationError::DuplicateEngineId {
                    graph_id: graph.graph_id,
                    engine_id: engine.id,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validates that every connection endpoint resolves to an engine of the
/// containing graph.
///
/// Both ends of every connection are checked independently, so a fully
/// dangling edge reports two errors. Connections are local to their graph;
/// an engine id from another graph in the set does not satisfy resolution.
fn validate_connection_references(graphs: &[Graph]) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    for graph in graphs {
        let engine_ids: HashSet<_> = graph.engines.iter().map(|e| e.id).collect();
        for connection in &graph.connections {
            if !engine_ids.contains(&connection.src_engine_id) {
                errors.push(ValidationError::UnresolvedConnection {
                    graph_id: graph.graph_id,
                    engine_id: connection.src_engine_id,
                    end: ConnectionEnd::Source,
                });
            }
            if !engine_ids.contains(&connection.target_engine_id) {
                errors.push(ValidationError::UnresolvedConnection {
                    graph_id: graph.graph_id,
                    engine_id: connection.target_engine_id,
                    end: ConnectionEnd::Target,
                });
            }
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Connection, Engine, Graph, RunSide};

    fn create_test_graph(graph_id: u32, engine_ids: Vec<u32>) -> Graph {
        let mut graph = Graph::new(graph_id, 0);
        for id in engine_ids {
            graph.add_engine(Engine::new(format!("engine_{id}"), id, 1, RunSide::Host));
        }
        graph
    }

    #[test]
    fn test_valid_empty_set() {
        assert!(validate_graphs(&[]).is_ok());
    }

    #[test]
    fn test_valid_wired_graph() {
        let mut graph = create_test_graph(100, vec![1000, 1001]);
        graph.add_connection(Connection::new(1000, 0, 1001, 0));
        assert!(validate_graphs(&[graph]).is_ok());
    }

    #[test]
    fn test_duplicate_graph_ids_detected() {
        let graphs = vec![
            create_test_graph(100, vec![]),
            create_test_graph(100, vec![]),
        ];
        let errors = validate_graphs(&graphs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::DuplicateGraphId { graph_id } if graph_id.0 == 100
        ));
    }

    #[test]
    fn test_duplicate_engine_ids_detected_per_graph() {
        let graph = create_test_graph(100, vec![1000, 1000]);
        let errors = validate_graphs(&[graph]).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::DuplicateEngineId { engine_id, .. } if engine_id.0 == 1000
        ));
    }

    #[test]
    fn test_same_engine_id_allowed_in_different_graphs() {
        let graphs = vec![
            create_test_graph(100, vec![1000]),
            create_test_graph(101, vec![1000]),
        ];
        assert!(validate_graphs(&graphs).is_ok());
    }

    #[test]
    fn test_dangling_connection_reports_each_end() {
        let mut graph = create_test_graph(100, vec![]);
        graph.add_connection(Connection::new(1000, 0, 1001, 0));
        let errors = validate_graphs(&[graph]).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(matches!(
            errors[0],
            ValidationError::UnresolvedConnection {
                end: ConnectionEnd::Source,
                ..
            }
        ));
        assert!(matches!(
            errors[1],
            ValidationError::UnresolvedConnection {
                end: ConnectionEnd::Target,
                ..
            }
        ));
    }

    #[test]
    fn test_engine_in_other_graph_does_not_resolve() {
        let mut consumer = create_test_graph(101, vec![2000]);
        consumer.add_connection(Connection::new(1000, 0, 2000, 0));
        let graphs = vec![create_test_graph(100, vec![1000]), consumer];
        let errors = validate_graphs(&graphs).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            errors[0],
            ValidationError::UnresolvedConnection {
                engine_id,
                end: ConnectionEnd::Source,
                ..
            } if engine_id.0 == 1000
        ));
    }

    #[test]
    fn test_errors_accumulate_across_checks() {
        let mut bad = create_test_graph(100, vec![1000, 1000]);
        bad.add_connection(Connection::new(9999, 0, 1000, 0));
        let graphs = vec![create_test_graph(100, vec![]), bad];
        let errors = validate_graphs(&graphs).unwrap_err();
        // Duplicate graph id, duplicate engine id, one dangling source.
        assert_eq!(errors.len(), 3);
    }
}
