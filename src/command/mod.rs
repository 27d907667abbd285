mod history;
mod marker;
mod sticker;

use egui::Pos2;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::surface::Surface;
use crate::tools::ToolConfig;

pub use history::{History, HistoryChange};
pub use marker::MarkerLine;
pub use sticker::Sticker;

/// Stable identity of a command, assigned once at creation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CommandId(Uuid);

impl CommandId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CommandId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for CommandId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A drawable action recorded in the history.
///
/// Commands are never cloned by the history; undo and redo move the same
/// value between stacks.
#[derive(Debug)]
pub enum Command {
    MarkerLine(MarkerLine),
    Sticker(Sticker),
}

impl Command {
    /// Start a new command for the given tool at the gesture's first point
    pub fn create(tool: &ToolConfig, start: Pos2) -> Self {
        match tool {
            ToolConfig::Marker { thickness } => {
                Command::MarkerLine(MarkerLine::new(start, *thickness))
            }
            ToolConfig::Sticker { glyph } => Command::Sticker(Sticker::new(glyph.clone(), start)),
        }
    }

    pub fn id(&self) -> CommandId {
        match self {
            Command::MarkerLine(line) => line.id(),
            Command::Sticker(sticker) => sticker.id(),
        }
    }

    /// Human readable name used in the history panel and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Command::MarkerLine(_) => "Marker Line",
            Command::Sticker(_) => "Sticker",
        }
    }

    /// Continue the command while its gesture is still active
    pub fn extend(&mut self, point: Pos2) {
        match self {
            Command::MarkerLine(line) => line.extend(point),
            Command::Sticker(sticker) => sticker.extend(point),
        }
    }

    /// Paint the current state of the command
    pub fn render(&self, surface: &mut dyn Surface) {
        match self {
            Command::MarkerLine(line) => line.render(surface),
            Command::Sticker(sticker) => sticker.render(surface),
        }
    }

    pub fn as_marker_line(&self) -> Option<&MarkerLine> {
        match self {
            Command::MarkerLine(line) => Some(line),
            _ => None,
        }
    }

    pub fn as_sticker(&self) -> Option<&Sticker> {
        match self {
            Command::Sticker(sticker) => Some(sticker),
            _ => None,
        }
    }
}
