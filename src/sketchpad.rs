use egui::Pos2;
use log::{debug, trace, warn};

use crate::command::{Command, History, HistoryChange};
use crate::error::{SketchError, SketchResult};
use crate::event::{EventBus, EventHandler, SketchEvent};
use crate::input::InputEvent;
use crate::preview::Preview;
use crate::renderer::RenderPipeline;
use crate::state::InteractionState;
use crate::surface::Surface;
use crate::tools::{ToolConfig, ToolSelector};

/// Builds a [`Sketchpad`]. A surface is mandatory.
#[derive(Debug)]
pub struct SketchpadBuilder<S> {
    surface: Option<S>,
    tool: ToolConfig,
}

impl<S: Surface> Default for SketchpadBuilder<S> {
    fn default() -> Self {
        Self {
            surface: None,
            tool: ToolConfig::default(),
        }
    }
}

impl<S: Surface> SketchpadBuilder<S> {
    pub fn surface(mut self, surface: S) -> Self {
        self.surface = Some(surface);
        self
    }

    /// Tool that is active when the sketchpad starts
    pub fn tool(mut self, tool: ToolConfig) -> Self {
        self.tool = tool;
        self
    }

    pub fn build(self) -> SketchResult<Sketchpad<S>> {
        let surface = self.surface.ok_or(SketchError::SurfaceUnavailable)?;
        let mut sketchpad = Sketchpad {
            history: History::new(),
            tools: ToolSelector::new(self.tool.validated_or_default()),
            preview: None,
            state: InteractionState::Idle,
            events: EventBus::new(),
            pipeline: RenderPipeline::new(),
            surface,
        };
        sketchpad.redraw();
        Ok(sketchpad)
    }
}

/// One drawing session: history, tool, preview and the surface they are drawn on.
///
/// Every input is handled to completion, then each change it produced is
/// turned into a redraw, in the order the changes were emitted.
#[derive(Debug)]
pub struct Sketchpad<S> {
    history: History,
    tools: ToolSelector,
    preview: Option<Preview>,
    state: InteractionState,
    events: EventBus,
    pipeline: RenderPipeline,
    surface: S,
}

impl<S: Surface> Sketchpad<S> {
    pub fn builder() -> SketchpadBuilder<S> {
        SketchpadBuilder::default()
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn tool(&self) -> &ToolConfig {
        self.tools.current()
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn state(&self) -> InteractionState {
        self.state
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn redraw_count(&self) -> u64 {
        self.pipeline.redraw_count()
    }

    /// Register an observer for every change the sketchpad makes
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.events.subscribe(handler);
    }

    pub fn handle_event(&mut self, event: InputEvent) {
        trace!("Input: {:?}", event);
        match event {
            InputEvent::PointerDown { position } => self.press(position),
            InputEvent::PointerMove { position } => self.move_to(position),
            InputEvent::PointerUp => self.release(),
            InputEvent::PointerLeave => self.leave(),
            InputEvent::SelectMarker { thickness } => self.select_marker(thickness),
            InputEvent::SelectSticker { glyph } => self.select_sticker(glyph),
            InputEvent::Undo => self.undo(),
            InputEvent::Redo => self.redo(),
            InputEvent::ClearAll => self.clear_all(),
        }
    }

    /// Start a gesture: create a command from the active tool and append it
    pub fn press(&mut self, position: Pos2) {
        if let Some(open) = self.state.gesture_command() {
            warn!("Press while gesture {} is open, closing it", open);
        }
        self.set_preview(None);
        let command = Command::create(self.tools.current(), position);
        debug!("✏️ Gesture started: {} at {:?}", command.kind(), position);
        self.state = InteractionState::Gesturing {
            command: command.id(),
        };
        self.history.append(command, &self.events);
        self.process_notifications();
    }

    /// Extend the open gesture, or refresh the hover preview when idle
    pub fn move_to(&mut self, position: Pos2) {
        match self.state {
            InteractionState::Gesturing { command: open } => {
                match self.history.current_gesture() {
                    Some(command) if command.id() == open => {
                        command.extend(position);
                        self.events
                            .emit(SketchEvent::DrawingChanged(HistoryChange::Extended(open)));
                    }
                    _ => {
                        warn!("Gesture {} is no longer the newest command", open);
                        self.state = InteractionState::Idle;
                    }
                }
            }
            InteractionState::Idle => {
                let preview = Preview::from_tool(self.tools.current(), position);
                self.set_preview(Some(preview));
            }
        }
        self.process_notifications();
    }

    pub fn release(&mut self) {
        self.end_gesture("released");
    }

    /// Pointer left the canvas: end any gesture and drop the preview
    pub fn leave(&mut self) {
        self.end_gesture("left canvas");
        self.set_preview(None);
        self.process_notifications();
    }

    /// Switch tools. An unusable tool (bad thickness, blank glyph) is ignored.
    pub fn select_tool(&mut self, tool: ToolConfig) {
        if let Err(err) = tool.validate() {
            warn!("Rejected tool {}: {}", tool, err);
            return;
        }
        self.end_gesture("tool changed");
        self.tools.select(tool, &self.events);
        self.set_preview(None);
        self.process_notifications();
    }

    pub fn select_marker(&mut self, thickness: f32) {
        self.select_tool(ToolConfig::Marker { thickness });
    }

    pub fn select_sticker(&mut self, glyph: impl Into<String>) {
        self.select_tool(ToolConfig::Sticker {
            glyph: glyph.into(),
        });
    }

    pub fn undo(&mut self) {
        self.end_gesture("undo");
        self.history.undo(&self.events);
        self.process_notifications();
    }

    pub fn redo(&mut self) {
        self.end_gesture("redo");
        self.history.redo(&self.events);
        self.process_notifications();
    }

    pub fn clear_all(&mut self) {
        self.end_gesture("clear");
        self.history.clear(&self.events);
        self.process_notifications();
    }

    fn end_gesture(&mut self, reason: &str) {
        if let Some(command) = self.state.gesture_command() {
            debug!("Gesture {} finished ({})", command, reason);
            self.state = InteractionState::Idle;
        }
    }

    fn set_preview(&mut self, preview: Option<Preview>) {
        if self.preview.is_none() && preview.is_none() {
            return;
        }
        self.preview = preview;
        self.events.emit(SketchEvent::PreviewChanged);
    }

    /// Redraw once for every queued change, oldest first
    fn process_notifications(&mut self) {
        while let Some(event) = self.events.next_pending() {
            trace!("Redrawing after {:?}", event);
            self.redraw();
        }
    }

    fn redraw(&mut self) {
        self.pipeline
            .redraw(&mut self.surface, self.history.active(), self.preview.as_ref());
    }
}
