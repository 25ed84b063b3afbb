use holo_core::ConnectionTarget;
use holo_render_models::DisplayList;

use crate::error::TransportError;

/// The IPC channel to the device message queue.
///
/// Encoding the display list is the transport's business. A [crate::RenderSession] always calls
/// `push` then `pull` with the same list and expects one result per command, in order.
pub trait Transport {
    fn open(&mut self, target: &ConnectionTarget) -> Result<(), TransportError>;
    fn close(&mut self) -> Result<(), TransportError>;
    fn push(&mut self, list: &DisplayList) -> Result<(), TransportError>;
    /// Blocks until every result of `list` is received.
    fn pull(&mut self, list: &DisplayList) -> Result<Vec<u32>, TransportError>;
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn open(&mut self, target: &ConnectionTarget) -> Result<(), TransportError> {
        (**self).open(target)
    }
    fn close(&mut self) -> Result<(), TransportError> {
        (**self).close()
    }
    fn push(&mut self, list: &DisplayList) -> Result<(), TransportError> {
        (**self).push(list)
    }
    fn pull(&mut self, list: &DisplayList) -> Result<Vec<u32>, TransportError> {
        (**self).pull(list)
    }
}
