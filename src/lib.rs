// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // runtime implementations
pub mod config;     // graph descriptions + loader
pub mod errors;     // error handling
pub mod observability;
pub mod proto;      // generated protobufs live here
pub mod runtime;    // translation + lifecycle facade
pub mod traits;     // unified abstractions
