use serde::{Deserialize, Serialize};

use crate::{descriptor::RenderDescriptor, handle::ObjectHandle};

/// Requests a render session can be driven with, for callers that route messages instead of calling methods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum MessageToRenderSession {
    AddPrimitive(Box<RenderDescriptor>),
    AddPrimitives(Vec<RenderDescriptor>),
    RemovePrimitive(ObjectHandle),
    Clear,
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::PrimitiveShape;

    #[test]
    fn test_messages_from_json() {
        let msg: MessageToRenderSession = serde_json::from_str(
            r#"{"AddPrimitives": [{
                "shape": "capsule",
                "position": [0.0, 0.0, 2.0],
                "rotation": [0.0, 0.0, 0.0, 1.0],
                "scale": [0.1, 0.1, 0.1],
                "color": [1.0, 1.0, 1.0, 1.0]
            }]}"#,
        )
        .unwrap();
        match msg {
            MessageToRenderSession::AddPrimitives(descs) => {
                assert_eq!(descs.len(), 1);
                assert_eq!(descs[0].shape(), Some(PrimitiveShape::Capsule));
            }
            other => panic!("unexpected message {other:?}"),
        }

        let msg: MessageToRenderSession = serde_json::from_str(r#"{"RemovePrimitive": 12}"#).unwrap();
        assert_eq!(
            msg,
            MessageToRenderSession::RemovePrimitive(ObjectHandle::from_raw(12))
        );
        let msg: MessageToRenderSession = serde_json::from_str(r#""Clear""#).unwrap();
        assert_eq!(msg, MessageToRenderSession::Clear);
    }
}
