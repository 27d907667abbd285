use egui::{Context, Key, Pos2, Rect};

/// Input reaching the sketchpad. Positions are canvas-local.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    /// Primary button pressed over the canvas
    PointerDown { position: Pos2 },
    /// Pointer moved over the canvas, pressed or not
    PointerMove { position: Pos2 },
    /// Primary button released
    PointerUp,
    /// Pointer left the canvas
    PointerLeave,
    SelectMarker { thickness: f32 },
    SelectSticker { glyph: String },
    Undo,
    Redo,
    ClearAll,
}

/// What the pointer and keyboard did during one frame, in screen coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_released: bool,
    pub undo_shortcut: bool,
    pub redo_shortcut: bool,
}

impl PointerSnapshot {
    /// Read the current frame's input from egui
    pub fn capture(ctx: &Context) -> Self {
        ctx.input(|input| {
            let command = input.modifiers.command;
            let z = input.key_pressed(Key::Z);
            Self {
                hover_pos: input.pointer.hover_pos(),
                primary_pressed: input.pointer.primary_pressed(),
                primary_released: input.pointer.primary_released(),
                undo_shortcut: command && z && !input.modifiers.shift,
                redo_shortcut: command
                    && ((z && input.modifiers.shift) || input.key_pressed(Key::Y)),
            }
        })
    }
}

/// Converts raw per-frame pointer state into canvas-local `InputEvent`s
#[derive(Debug)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
    canvas_rect: Rect,
    pressed: bool,
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            last_pointer_pos: None,
            canvas_rect,
            pressed: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    pub fn canvas_rect(&self) -> Rect {
        self.canvas_rect
    }

    fn to_canvas(&self, pos: Pos2) -> Pos2 {
        (pos - self.canvas_rect.min).to_pos2()
    }

    /// Turn one frame of input into events for the sketchpad
    pub fn process(&mut self, snapshot: PointerSnapshot) -> Vec<InputEvent> {
        let mut events = Vec::new();

        let inside = snapshot
            .hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos));

        match inside {
            Some(pos) => {
                if Some(pos) != self.last_pointer_pos {
                    events.push(InputEvent::PointerMove {
                        position: self.to_canvas(pos),
                    });
                }
                if snapshot.primary_pressed {
                    self.pressed = true;
                    events.push(InputEvent::PointerDown {
                        position: self.to_canvas(pos),
                    });
                }
                if snapshot.primary_released && self.pressed {
                    self.pressed = false;
                    events.push(InputEvent::PointerUp);
                }
                self.last_pointer_pos = Some(pos);
            }
            None => {
                if self.last_pointer_pos.take().is_some() {
                    self.pressed = false;
                    events.push(InputEvent::PointerLeave);
                }
            }
        }

        if snapshot.undo_shortcut {
            events.push(InputEvent::Undo);
        }
        if snapshot.redo_shortcut {
            events.push(InputEvent::Redo);
        }

        events
    }
}
