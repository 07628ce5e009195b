// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for description validation events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A loaded description failed structural validation.
///
/// Individual validation errors are logged separately; this message closes
/// the account with the total.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use dyngraph::observability::messages::validation::DescriptionRejected;
///
/// let msg = DescriptionRejected { error_count: 3 };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DescriptionRejected {
    pub error_count: usize,
}

impl Display for DescriptionRejected {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Graph description rejected with {} validation errors",
            self.error_count
        )
    }
}

impl StructuredLog for DescriptionRejected {
    fn log(&self) {
        tracing::error!(error_count = self.error_count, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            error_count = self.error_count,
        )
    }
}
