use serde::{Deserialize, Serialize};

use crate::{descriptor::RenderDescriptor, handle::ObjectHandle, primitive::PrimitiveShape};

/// Which object the transform/color/active commands apply to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TargetMode {
    /// The `index` of the command is an object id.
    UseId = 0,
    /// The `index` of the command is relative to the last object created in this display list,
    /// 0 being the last one.
    UseLast = 1,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ActiveState {
    Inactive = 0,
    Active = 1,
}

/// Tag of a [Command], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CommandKind {
    BeginDisplayList,
    EndDisplayList,
    CreatePrimitive,
    SetTargetMode,
    SetWorldTransform,
    SetColor,
    SetActive,
    Remove,
    RemoveAll,
}

impl CommandKind {
    /// Only creation answers with something meaningful, every other result is a placeholder.
    pub fn yields_handle(self) -> bool {
        matches!(self, CommandKind::CreatePrimitive)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    BeginDisplayList,
    EndDisplayList,
    CreatePrimitive(PrimitiveShape),
    SetTargetMode(TargetMode),
    SetWorldTransform {
        index: u32,
        position: glam::Vec3,
        rotation: glam::Quat,
        scale: glam::Vec3,
    },
    SetColor {
        index: u32,
        color: glam::Vec4,
    },
    SetActive {
        index: u32,
        state: ActiveState,
    },
    Remove(ObjectHandle),
    RemoveAll,
}

impl Command {
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::BeginDisplayList => CommandKind::BeginDisplayList,
            Command::EndDisplayList => CommandKind::EndDisplayList,
            Command::CreatePrimitive(_) => CommandKind::CreatePrimitive,
            Command::SetTargetMode(_) => CommandKind::SetTargetMode,
            Command::SetWorldTransform { .. } => CommandKind::SetWorldTransform,
            Command::SetColor { .. } => CommandKind::SetColor,
            Command::SetActive { .. } => CommandKind::SetActive,
            Command::Remove(_) => CommandKind::Remove,
            Command::RemoveAll => CommandKind::RemoveAll,
        }
    }
}

/// Number of commands [DisplayList::push_primitive] appends for one primitive.
pub const PRIMITIVE_SEQUENCE_LEN: usize = 5;

/// Ordered commands sent in one round trip.
/// The device interprets them statefully: the target mode set by one command is used by the next ones.
/// The device answers with one result per command, in the same order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayList {
    commands: Vec<Command>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, command: Command) -> &mut Self {
        self.commands.push(command);
        self
    }

    pub fn begin_display_list(&mut self) -> &mut Self {
        self.push(Command::BeginDisplayList)
    }
    pub fn end_display_list(&mut self) -> &mut Self {
        self.push(Command::EndDisplayList)
    }
    pub fn create_primitive(&mut self, shape: PrimitiveShape) -> &mut Self {
        self.push(Command::CreatePrimitive(shape))
    }
    pub fn set_target_mode(&mut self, mode: TargetMode) -> &mut Self {
        self.push(Command::SetTargetMode(mode))
    }
    pub fn set_world_transform(
        &mut self,
        index: u32,
        position: glam::Vec3,
        rotation: glam::Quat,
        scale: glam::Vec3,
    ) -> &mut Self {
        self.push(Command::SetWorldTransform {
            index,
            position,
            rotation,
            scale,
        })
    }
    pub fn set_color(&mut self, index: u32, color: glam::Vec4) -> &mut Self {
        self.push(Command::SetColor { index, color })
    }
    pub fn set_active(&mut self, index: u32, state: ActiveState) -> &mut Self {
        self.push(Command::SetActive { index, state })
    }
    pub fn remove(&mut self, handle: ObjectHandle) -> &mut Self {
        self.push(Command::Remove(handle))
    }
    pub fn remove_all(&mut self) -> &mut Self {
        self.push(Command::RemoveAll)
    }

    /// Appends the create/target/transform/color/active sequence for one primitive
    /// and returns the position of its create command.
    /// The shape is given separately as the descriptor may not have resolved one.
    pub fn push_primitive(&mut self, shape: PrimitiveShape, desc: &RenderDescriptor) -> usize {
        let offset = self.commands.len();
        self.create_primitive(shape)
            .set_target_mode(TargetMode::UseLast)
            .set_world_transform(0, desc.position(), desc.rotation(), desc.scale())
            .set_color(0, desc.color())
            .set_active(0, ActiveState::Active);
        offset
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }
    pub fn len(&self) -> usize {
        self.commands.len()
    }
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
    pub fn kind_at(&self, position: usize) -> Option<CommandKind> {
        self.commands.get(position).map(Command::kind)
    }
    pub fn count(&self, kind: CommandKind) -> usize {
        self.commands.iter().filter(|c| c.kind() == kind).count()
    }
    /// Positions of every create command, those are where the handles are in the results.
    pub fn create_offsets(&self) -> Vec<usize> {
        self.commands
            .iter()
            .enumerate()
            .filter(|(_, c)| c.kind().yields_handle())
            .map(|(i, _)| i)
            .collect()
    }
}
