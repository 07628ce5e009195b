// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runtime implementations behind the [`GraphRuntime`] seam.
//!
//! Everything above this module talks to an abstract runtime; the concrete
//! backends live here. The production bindings to the inference engine are
//! expected to slot in as another module implementing the same trait.
//!
//! # Available Backends
//!
//! ## Stub Backend
//! In-memory runtime for tests and dry runs:
//! - **Call Recording**: Every invocation logged in order for assertions
//! - **Scripted Failures**: Any operation fails on demand, per device or graph
//! - **Receiver Delivery**: Drives registered callbacks without an engine
//! - **Use Case**: Unit testing, integration testing, configuration dry runs
//! - **Note**: Ships in normal builds so downstream test harnesses can use it
//!
//! [`GraphRuntime`]: crate::traits::GraphRuntime

pub mod stub;

pub use stub::{RuntimeCall, StubRuntime};
