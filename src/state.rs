use crate::command::CommandId;

/// Pointer interaction state of the sketchpad
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractionState {
    #[default]
    Idle,
    /// The pointer is down and moves extend `command`
    Gesturing { command: CommandId },
}

impl InteractionState {
    pub fn is_gesturing(&self) -> bool {
        matches!(self, Self::Gesturing { .. })
    }

    /// The command the open gesture is extending, if any
    pub fn gesture_command(&self) -> Option<CommandId> {
        match self {
            Self::Gesturing { command } => Some(*command),
            Self::Idle => None,
        }
    }
}
