// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Runtime status words and diagnostics-code registration.
//!
//! The external runtime reports success or failure through an opaque numeric
//! status word; this crate never interprets the value beyond the zero/non-zero
//! distinction and forwards non-success words verbatim inside
//! [`GraphError`](crate::errors::GraphError) variants.
//!
//! The module also carries the static diagnostics registration consumed by the
//! runtime's logging facility: three severity-tagged identifiers under one
//! facility code. Registration is pure declaration; there is no runtime
//! behavior here.

use std::fmt;

/// Opaque status word returned by the external runtime.
///
/// `0` is the runtime's success value; every other value is a failure whose
/// meaning belongs to the runtime. The wrapper exists so statuses cannot be
/// confused with the many other `u32` quantities in a graph description.
///
/// # Example
/// ```
/// use dyngraph::errors::StatusCode;
///
/// assert!(StatusCode::OK.is_ok());
/// assert!(!StatusCode::new(0x8001).is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StatusCode(u32);

impl StatusCode {
    /// The runtime's success value.
    pub const OK: StatusCode = StatusCode(0);

    /// Wrap a raw status word.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw status word.
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Whether this is the runtime's success value.
    pub const fn is_ok(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ok() {
            write!(f, "status OK")
        } else {
            write!(f, "status 0x{:08X}", self.0)
        }
    }
}

impl From<u32> for StatusCode {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

/// Severity of a registered diagnostics code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    Error,
    Info,
    Warning,
}

impl Severity {
    /// The tracing level this severity maps to when events are emitted
    /// through the crate's own logging.
    pub fn as_tracing_level(self) -> tracing::Level {
        match self {
            Severity::Error => tracing::Level::ERROR,
            Severity::Info => tracing::Level::INFO,
            Severity::Warning => tracing::Level::WARN,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Info => write!(f, "INFO"),
            Severity::Warning => write!(f, "WARNING"),
        }
    }
}

/// One severity-tagged diagnostics identifier registered with the runtime's
/// logging facility.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiagCode {
    /// Facility the code is registered under.
    pub facility: u16,
    /// Severity tag.
    pub severity: Severity,
    /// Index within the facility.
    pub index: u8,
    /// Stable identifier name.
    pub name: &'static str,
}

impl fmt::Display for DiagCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (0x{:04X}/{})", self.name, self.facility, self.index)
    }
}

/// Facility code this crate's diagnostics are registered under.
pub const DIAG_FACILITY: u16 = 0x6001;

/// Error-severity diagnostics identifier.
pub const IDE_ERROR: DiagCode = DiagCode {
    facility: DIAG_FACILITY,
    severity: Severity::Error,
    index: 0,
    name: "IDE_ERROR",
};

/// Info-severity diagnostics identifier.
pub const IDE_INFO: DiagCode = DiagCode {
    facility: DIAG_FACILITY,
    severity: Severity::Info,
    index: 1,
    name: "IDE_INFO",
};

/// Warning-severity diagnostics identifier.
pub const IDE_WARNING: DiagCode = DiagCode {
    facility: DIAG_FACILITY,
    severity: Severity::Warning,
    index: 2,
    name: "IDE_WARNING",
};

/// Every diagnostics code this crate registers, in index order.
pub const REGISTERED_CODES: [DiagCode; 3] = [IDE_ERROR, IDE_INFO, IDE_WARNING];
