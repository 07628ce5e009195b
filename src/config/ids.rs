// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Identifier newtypes used throughout a graph description.
//!
//! The runtime addresses everything numerically: graphs, engines, devices,
//! and ports are all `u32` on the wire. The newtypes keep those quantities
//! from being swapped at call sites; `From<u32>` conversions keep literal
//! construction cheap.

use serde::Deserialize;
use std::fmt;

macro_rules! id_type {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<u32> for $name {
            fn from(raw: u32) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for u32 {
            fn from(id: $name) -> u32 {
                id.0
            }
        }
    };
}

id_type! {
    /// Identifier of one graph within the runtime.
    GraphId
}

id_type! {
    /// Identifier of one engine within a graph.
    EngineId
}

id_type! {
    /// Identifier of the accelerator device a graph is placed on.
    DeviceId
}

id_type! {
    /// Index of one input/output slot on an engine.
    PortId
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_round_trip_through_u32() {
        let id = GraphId::from(100);
        assert_eq!(u32::from(id), 100);
        assert_eq!(id, GraphId(100));
    }

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(EngineId(1000).to_string(), "1000");
        assert_eq!(PortId(0).to_string(), "0");
    }

    #[test]
    fn ids_deserialize_transparently() {
        let id: DeviceId = serde_yaml::from_str("3").unwrap();
        assert_eq!(id, DeviceId(3));
    }
}
