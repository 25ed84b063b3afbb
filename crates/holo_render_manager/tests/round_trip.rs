use holo_core::{ConnectionTarget, RenderConfig};
use holo_render_manager::{RenderSession, Transport, TransportError};
use holo_render_models::{DisplayList, PrimitiveShape, RenderDescriptor};

/// Answers every create with the next id, everything else with 0.
#[derive(Default)]
struct CountingTransport {
    target: Option<ConnectionTarget>,
    opens: usize,
    closes: usize,
    pushes: usize,
    pulls: usize,
    next_id: u32,
}

impl Transport for CountingTransport {
    fn open(&mut self, target: &ConnectionTarget) -> Result<(), TransportError> {
        self.target = Some(target.clone());
        self.opens += 1;
        Ok(())
    }
    fn close(&mut self) -> Result<(), TransportError> {
        self.closes += 1;
        Ok(())
    }
    fn push(&mut self, _list: &DisplayList) -> Result<(), TransportError> {
        self.pushes += 1;
        Ok(())
    }
    fn pull(&mut self, list: &DisplayList) -> Result<Vec<u32>, TransportError> {
        self.pulls += 1;
        let mut results = vec![0; list.len()];
        for offset in list.create_offsets() {
            self.next_id += 1;
            results[offset] = self.next_id;
        }
        Ok(results)
    }
}

#[test]
fn test_add_then_remove_cube() {
    let config = RenderConfig::parse("host = \"192.168.1.7\"").unwrap();
    let mut session = RenderSession::new(config.target(), CountingTransport::default());

    session.start().unwrap();
    assert_eq!(
        session.transport().target,
        Some(ConnectionTarget::new("192.168.1.7", 3816))
    );

    let cube = RenderDescriptor::with_shape(
        PrimitiveShape::Cube,
        [0.0, 0.0, 1.5],
        [0.0, 0.0, 0.0, 1.0],
        [0.2, 0.2, 0.2],
        [0.0, 1.0, 0.0, 1.0],
    );
    let handle = session.add_primitive(&cube).unwrap();
    assert_eq!(session.live_objects(), &[handle]);

    session.remove_primitive(handle).unwrap();
    assert!(session.live_objects().is_empty());

    session.stop().unwrap();

    let transport = session.transport();
    assert_eq!(transport.opens, 1);
    assert_eq!(transport.closes, 1);
    assert_eq!(transport.pushes, 2);
    assert_eq!(transport.pulls, 2);
}

#[test]
fn test_boxed_transport() {
    let transport: Box<dyn Transport + Send> = Box::new(CountingTransport::default());
    let mut session = RenderSession::new(ConnectionTarget::message_queue("localhost"), transport);
    session.start().unwrap();

    let descs: Vec<RenderDescriptor> = ["sphere", "capsule"]
        .iter()
        .map(|name| {
            RenderDescriptor::new(
                name,
                glam::Vec3::ZERO,
                glam::Quat::IDENTITY,
                glam::Vec3::ONE,
                glam::Vec4::ONE,
            )
        })
        .collect();
    let handles = session.add_primitives(&descs).unwrap();
    assert_eq!(handles.len(), 2);
    assert_ne!(handles[0], handles[1]);

    session.clear().unwrap();
    assert!(session.live_objects().is_empty());
}
