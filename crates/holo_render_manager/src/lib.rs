//! Holo render manager drives primitives on the headset through its unity message queue.
//!
//! A [RenderSession] owns the IPC channel. Every operation builds one display list,
//! pushes it, waits for the results and only then updates the handles it tracks.
//! Nothing is retried: a transport failure goes straight back to the caller.

mod error;
mod transport;

use std::sync::{Arc, Mutex};

use holo_core::ConnectionTarget;
use holo_render_models::{
    command::PRIMITIVE_SEQUENCE_LEN, CommandKind, DisplayList, MessageToRenderSession,
    ObjectHandle, PrimitiveShape, RenderDescriptor,
};
use tracing::{debug, error, info, trace, warn};

pub use error::{RenderError, Result, TransportError};
pub use transport::Transport;

/// A session behind the one lock every caller has to take.
/// Each operation is a full round trip already, there is nothing to gain from finer locking.
pub type SharedRenderSession<T> = Arc<Mutex<RenderSession<T>>>;

/// This manages the render commands sent to the device and the objects they created.
pub struct RenderSession<T: Transport> {
    /// The channel to the render service. Only open between `start` and `stop`.
    transport: T,
    target: ConnectionTarget,
    connected: bool,
    /// Handles returned by the device and not removed since, in creation order.
    /// Kept across `stop`: objects outlive the connection on the device.
    live_objects: Vec<ObjectHandle>,
}

impl<T: Transport> RenderSession<T> {
    pub fn new(target: ConnectionTarget, transport: T) -> Self {
        Self {
            transport,
            target,
            connected: false,
            live_objects: Vec::new(),
        }
    }

    pub fn start(&mut self) -> Result<()> {
        if self.connected {
            warn!(device = %self.target, "render session already started");
            return Ok(());
        }
        self.transport.open(&self.target)?;
        self.connected = true;
        info!(device = %self.target, "render session started");
        Ok(())
    }

    /// Stopping a session which is not started does nothing.
    /// The session is considered closed even when the transport fails to close.
    pub fn stop(&mut self) -> Result<()> {
        if !self.connected {
            debug!("render session is not started, nothing to stop");
            return Ok(());
        }
        self.connected = false;
        self.transport.close()?;
        info!(
            device = %self.target,
            live_objects = self.live_objects.len(),
            "render session stopped"
        );
        Ok(())
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
    pub fn target(&self) -> &ConnectionTarget {
        &self.target
    }
    pub fn live_objects(&self) -> &[ObjectHandle] {
        &self.live_objects
    }
    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn into_shared(self) -> SharedRenderSession<T> {
        Arc::new(Mutex::new(self))
    }

    pub fn add_primitive(&mut self, desc: &RenderDescriptor) -> Result<ObjectHandle> {
        let shape = resolve_shape(desc)?;
        self.ensure_connected()?;

        let mut list = DisplayList::new();
        list.begin_display_list();
        let offset = list.push_primitive(shape, desc);
        list.end_display_list();

        let results = self.submit(&list)?;
        let handle = extract_handle(&list, &results, offset)?;
        self.live_objects.push(handle);
        debug!(%handle, %shape, "primitive added");
        Ok(handle)
    }

    /// All descriptors go in a single display list. The handles are returned in the order of `descs`.
    /// An empty slice still sends an empty begin/end pair, and returns no handle.
    pub fn add_primitives(&mut self, descs: &[RenderDescriptor]) -> Result<Vec<ObjectHandle>> {
        let shapes = descs
            .iter()
            .map(resolve_shape)
            .collect::<Result<Vec<PrimitiveShape>>>()?;
        self.ensure_connected()?;

        let mut list = DisplayList::new();
        list.begin_display_list();
        let offsets: Vec<usize> = shapes
            .iter()
            .zip(descs)
            .map(|(shape, desc)| list.push_primitive(*shape, desc))
            .collect();
        list.end_display_list();
        debug_assert!(offsets
            .iter()
            .enumerate()
            .all(|(i, offset)| *offset == 1 + PRIMITIVE_SEQUENCE_LEN * i));

        let results = self.submit(&list)?;
        let handles = offsets
            .iter()
            .map(|offset| extract_handle(&list, &results, *offset))
            .collect::<Result<Vec<ObjectHandle>>>()?;
        self.live_objects.extend_from_slice(&handles);
        debug!(count = handles.len(), "primitives added");
        Ok(handles)
    }

    /// Removing a handle this session does not track sends nothing.
    /// The connection is checked first: a closed session fails with `NotConnected` even for an untracked handle.
    /// The handle is forgotten once the device answered, so a failed removal can be retried.
    /// If the same handle was tracked twice, only the oldest entry is removed.
    pub fn remove_primitive(&mut self, handle: ObjectHandle) -> Result<()> {
        self.ensure_connected()?;
        let Some(position) = self.live_objects.iter().position(|h| *h == handle) else {
            warn!(%handle, "primitive is not tracked by this session, not removing it");
            return Ok(());
        };

        let mut list = DisplayList::new();
        list.begin_display_list().remove(handle).end_display_list();
        self.submit(&list)?;

        self.live_objects.remove(position);
        debug!(%handle, "primitive removed");
        Ok(())
    }

    /// Asks the device to remove everything, whether this session tracks objects or not.
    pub fn clear(&mut self) -> Result<()> {
        self.ensure_connected()?;
        let mut list = DisplayList::new();
        list.begin_display_list().remove_all().end_display_list();
        self.submit(&list)?;

        debug!(forgotten = self.live_objects.len(), "render session cleared");
        self.live_objects.clear();
        Ok(())
    }

    /// Returns the created handles, if any.
    pub fn handle_message(&mut self, msg: MessageToRenderSession) -> Result<Vec<ObjectHandle>> {
        match msg {
            MessageToRenderSession::AddPrimitive(desc) => {
                trace!("Handling of MessageToRenderSession::AddPrimitive");
                Ok(vec![self.add_primitive(&desc)?])
            }
            MessageToRenderSession::AddPrimitives(descs) => {
                trace!("Handling of MessageToRenderSession::AddPrimitives");
                self.add_primitives(&descs)
            }
            MessageToRenderSession::RemovePrimitive(handle) => {
                trace!("Handling of MessageToRenderSession::RemovePrimitive");
                self.remove_primitive(handle)?;
                Ok(Vec::new())
            }
            MessageToRenderSession::Clear => {
                trace!("Handling of MessageToRenderSession::Clear");
                self.clear()?;
                Ok(Vec::new())
            }
        }
    }

    fn ensure_connected(&self) -> Result<()> {
        if self.connected {
            Ok(())
        } else {
            Err(RenderError::NotConnected)
        }
    }

    /// One round trip. The results are checked to match the list command for command.
    fn submit(&mut self, list: &DisplayList) -> Result<Vec<u32>> {
        trace!(commands = list.len(), "submitting display list");
        self.transport.push(list).inspect_err(|e| {
            error!(?e, "failed to push display list");
        })?;
        let results = self.transport.pull(list).inspect_err(|e| {
            error!(?e, "failed to pull display list results");
        })?;
        if results.len() != list.len() {
            return Err(RenderError::ResultShapeMismatch {
                expected: list.len(),
                received: results.len(),
            });
        }
        Ok(results)
    }
}

impl<T: Transport> Drop for RenderSession<T> {
    fn drop(&mut self) {
        if self.connected {
            if let Err(e) = self.stop() {
                error!(?e, "failed to close render session on drop");
            }
        }
    }
}

fn resolve_shape(desc: &RenderDescriptor) -> Result<PrimitiveShape> {
    desc.shape().ok_or_else(|| RenderError::ShapeResolution {
        name: desc.shape_name().to_string(),
    })
}

fn extract_handle(list: &DisplayList, results: &[u32], position: usize) -> Result<ObjectHandle> {
    let kind = list.kind_at(position);
    if kind != Some(CommandKind::CreatePrimitive) {
        return Err(RenderError::UnexpectedCommand { position, kind });
    }
    results
        .get(position)
        .map(|id| ObjectHandle::from_raw(*id))
        .ok_or(RenderError::ResultShapeMismatch {
            expected: list.len(),
            received: results.len(),
        })
}
