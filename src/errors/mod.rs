// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod graph;
mod status;

pub use config::{ConfigError, ConnectionEnd, ValidationError};
pub use graph::GraphError;
pub use status::{
    DiagCode, Severity, StatusCode, DIAG_FACILITY, IDE_ERROR, IDE_INFO, IDE_WARNING,
    REGISTERED_CODES,
};
