// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::{EngineId, GraphId};
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Which end of a connection failed to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionEnd {
    Source,
    Target,
}

impl fmt::Display for ConnectionEnd {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionEnd::Source => write!(f, "source"),
            ConnectionEnd::Target => write!(f, "target"),
        }
    }
}

/// Errors that can occur during graph description validation
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two graphs in the same set share a graph id
    DuplicateGraphId {
        /// The duplicated graph id
        graph_id: GraphId,
    },
    /// Two engines within one graph share an engine id
    DuplicateEngineId {
        /// The graph the duplicate appears in
        graph_id: GraphId,
        /// The duplicated engine id
        engine_id: EngineId,
    },
    /// A connection endpoint names an engine the graph does not contain
    UnresolvedConnection {
        /// The graph the connection belongs to
        graph_id: GraphId,
        /// The engine id the endpoint names
        engine_id: EngineId,
        /// Which endpoint failed to resolve
        end: ConnectionEnd,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateGraphId { graph_id } => {
                write!(f, "Duplicate graph id: {}", graph_id)
            }
            ValidationError::DuplicateEngineId {
                graph_id,
                engine_id,
            } => {
                write!(
                    f,
                    "Graph {} contains duplicate engine id {}",
                    graph_id, engine_id
                )
            }
            ValidationError::UnresolvedConnection {
                graph_id,
                engine_id,
                end,
            } => {
                write!(
                    f,
                    "Graph {} has a connection whose {} engine {} does not exist",
                    graph_id, end, engine_id
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a graph description file.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid graph description.
    #[error("failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The description parsed but failed structural validation.
    #[error("description validation failed with {} error(s)", .errors.len())]
    Validation { errors: Vec<ValidationError> },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_display() {
        let err = ValidationError::UnresolvedConnection {
            graph_id: GraphId(100),
            engine_id: EngineId(1001),
            end: ConnectionEnd::Target,
        };
        assert_eq!(
            err.to_string(),
            "Graph 100 has a connection whose target engine 1001 does not exist"
        );
    }

    #[test]
    fn duplicate_engine_display_names_the_graph() {
        let err = ValidationError::DuplicateEngineId {
            graph_id: GraphId(2),
            engine_id: EngineId(5),
        };
        assert_eq!(err.to_string(), "Graph 2 contains duplicate engine id 5");
    }

    #[test]
    fn config_error_counts_validation_failures() {
        let err = ConfigError::Validation {
            errors: vec![ValidationError::DuplicateGraphId {
                graph_id: GraphId(1),
            }],
        };
        assert_eq!(
            err.to_string(),
            "description validation failed with 1 error(s)"
        );
    }
}
