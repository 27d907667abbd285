use log::info;

use super::ToolConfig;
use crate::event::{EventBus, SketchEvent};

/// Holds the active tool. Selection never touches the history.
#[derive(Debug, Default)]
pub struct ToolSelector {
    current: ToolConfig,
}

impl ToolSelector {
    pub fn new(initial: ToolConfig) -> Self {
        Self { current: initial }
    }

    pub fn current(&self) -> &ToolConfig {
        &self.current
    }

    /// Replace the active tool and announce the change
    pub fn select(&mut self, config: ToolConfig, bus: &EventBus) {
        info!("🛠️ Tool selected: {}", config);
        let old = std::mem::replace(&mut self.current, config.clone());
        bus.emit(SketchEvent::ToolChanged { old, new: config });
    }
}
