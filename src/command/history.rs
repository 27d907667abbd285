use log::{debug, info};

use super::{Command, CommandId};
use crate::event::{EventBus, SketchEvent};

/// What a history mutation did, carried by `SketchEvent::DrawingChanged`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryChange {
    Appended(CommandId),
    /// The in-progress command received another point
    Extended(CommandId),
    /// `None` when there was nothing to undo
    Undone(Option<CommandId>),
    /// `None` when there was nothing to redo
    Redone(Option<CommandId>),
    Cleared,
}

/// Linear undo/redo history of drawing commands.
///
/// `active` is the draw order. `redo` holds undone commands with the most
/// recently undone last. A command lives in at most one of the two stacks.
#[derive(Debug, Default)]
pub struct History {
    active: Vec<Command>,
    redo: Vec<Command>,
}

impl History {
    /// Creates a new empty history
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a freshly created command. Any undone work is discarded.
    pub fn append(&mut self, command: Command, bus: &EventBus) {
        let id = command.id();
        debug!("Appending {} {}", command.kind(), id);
        self.active.push(command);
        self.redo.clear();
        bus.emit(SketchEvent::DrawingChanged(HistoryChange::Appended(id)));
    }

    /// Move the newest active command onto the redo stack; a no-op when empty
    pub fn undo(&mut self, bus: &EventBus) -> Option<CommandId> {
        let undone = self.active.pop().map(|command| {
            let id = command.id();
            self.redo.push(command);
            id
        });
        match undone {
            Some(id) => info!("↩️ Undo {}", id),
            None => debug!("Nothing to undo"),
        }
        bus.emit(SketchEvent::DrawingChanged(HistoryChange::Undone(undone)));
        undone
    }

    /// Move the most recently undone command back to the active list; a no-op when empty
    pub fn redo(&mut self, bus: &EventBus) -> Option<CommandId> {
        let redone = self.redo.pop().map(|command| {
            let id = command.id();
            self.active.push(command);
            id
        });
        match redone {
            Some(id) => info!("↪️ Redo {}", id),
            None => debug!("Nothing to redo"),
        }
        bus.emit(SketchEvent::DrawingChanged(HistoryChange::Redone(redone)));
        redone
    }

    /// Drop every command, undone ones included
    pub fn clear(&mut self, bus: &EventBus) {
        info!(
            "🧹 Clearing history ({} active, {} undone)",
            self.active.len(),
            self.redo.len()
        );
        self.active.clear();
        self.redo.clear();
        bus.emit(SketchEvent::DrawingChanged(HistoryChange::Cleared));
    }

    /// The most recently appended command, i.e. the one an open gesture extends
    pub fn current_gesture(&mut self) -> Option<&mut Command> {
        self.active.last_mut()
    }

    /// Commands in draw order
    pub fn active(&self) -> &[Command] {
        &self.active
    }

    /// Undone commands, most recently undone last
    pub fn redo_stack(&self) -> &[Command] {
        &self.redo
    }

    /// Returns true if there are commands that can be undone
    pub fn can_undo(&self) -> bool {
        !self.active.is_empty()
    }

    /// Returns true if there are commands that can be redone
    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }
}
