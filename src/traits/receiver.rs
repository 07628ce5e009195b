use crate::errors::StatusCode;
use crate::runtime::Payload;

/// Callback interface for data arriving from a live graph.
///
/// Implementations are shared with the runtime as `Arc<dyn DataReceiver>`
/// and may be invoked from the runtime's own threads.
pub trait DataReceiver: Send + Sync {
    fn receive(&self, payload: Payload) -> Result<(), StatusCode>;
}
