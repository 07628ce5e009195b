// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Data carried by a send or delivered to a receive callback.
///
/// The runtime interprets payloads by the message name given alongside
/// them, so the payload itself stays opaque here. Two transports cover
/// both deployment shapes:
///
/// * [`Payload::Bytes`] carries serialized data the runtime decodes by
///   message name, as it must when crossing the device boundary.
/// * [`Payload::Shared`] hands the runtime a shared in-process value to
///   downcast by message name, avoiding a serialize round-trip for
///   host-side engines.
#[derive(Clone)]
pub enum Payload {
    Bytes(Vec<u8>),
    Shared(Arc<dyn Any + Send + Sync>),
}

impl Payload {
    pub fn bytes(data: impl Into<Vec<u8>>) -> Self {
        Payload::Bytes(data.into())
    }

    pub fn shared<T: Any + Send + Sync>(value: T) -> Self {
        Payload::Shared(Arc::new(value))
    }

    /// The serialized form, when this payload carries one.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Payload::Bytes(data) => Some(data),
            Payload::Shared(_) => None,
        }
    }

    /// Downcast a shared payload to a concrete type.
    ///
    /// Returns `None` for byte payloads and for shared values of any
    /// other type.
    pub fn downcast<T: Any + Send + Sync>(&self) -> Option<Arc<T>> {
        match self {
            Payload::Bytes(_) => None,
            Payload::Shared(value) => Arc::clone(value).downcast::<T>().ok(),
        }
    }
}

impl From<Vec<u8>> for Payload {
    fn from(data: Vec<u8>) -> Self {
        Payload::Bytes(data)
    }
}

impl fmt::Debug for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Payload::Bytes(data) => f
                .debug_struct("Payload::Bytes")
                .field("len", &data.len())
                .finish(),
            Payload::Shared(value) => f
                .debug_struct("Payload::Shared")
                .field("type_id", &(**value).type_id())
                .finish(),
        }
    }
}
