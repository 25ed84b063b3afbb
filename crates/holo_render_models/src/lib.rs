//! Data exchanged with the render service running on the headset.
//!
//! Nothing in here talks to the device. [command::DisplayList] only records
//! the commands, a transport is responsible for encoding them.

pub mod command;
pub mod descriptor;
pub mod handle;
pub mod messages;
pub mod primitive;

pub use command::{ActiveState, Command, CommandKind, DisplayList, TargetMode};
pub use descriptor::RenderDescriptor;
pub use handle::ObjectHandle;
pub use messages::MessageToRenderSession;
pub use primitive::PrimitiveShape;
