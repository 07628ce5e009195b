pub mod receiver;
pub mod runtime;

pub use receiver::DataReceiver;
pub use crate::runtime::{EnginePort, Payload};
pub use runtime::{GraphHandle, GraphRuntime};
