#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod command;
pub mod config;
pub mod error;
pub mod event;
pub mod input;
pub mod panels;
pub mod preview;
pub mod renderer;
pub mod sketchpad;
pub mod state;
pub mod surface;
pub mod tools;

/// Surface-local coordinates
pub type Point = egui::Pos2;

pub use app::SketchApp;
pub use command::{Command, CommandId, History, HistoryChange, MarkerLine, Sticker};
pub use config::SketchConfig;
pub use error::{SketchError, SketchResult};
pub use event::{EventBus, EventHandler, SketchEvent};
pub use input::{InputEvent, InputHandler, PointerSnapshot};
pub use preview::Preview;
pub use renderer::{RenderPipeline, ShapeSurface};
pub use sketchpad::{Sketchpad, SketchpadBuilder};
pub use state::InteractionState;
pub use surface::{DrawCall, RecordingSurface, Surface};
pub use tools::{MarkerPreset, ToolConfig, ToolPalette, ToolSelector};
