use crate::command::HistoryChange;
use crate::tools::ToolConfig;

#[derive(Debug, Clone, PartialEq)]
pub enum SketchEvent {
    /// The committed drawing changed
    DrawingChanged(HistoryChange),
    /// A different tool was selected
    ToolChanged { old: ToolConfig, new: ToolConfig },
    /// The hover preview was replaced or cleared
    PreviewChanged,
}

impl SketchEvent {
    pub fn is_drawing_change(&self) -> bool {
        matches!(self, SketchEvent::DrawingChanged(_))
    }
}
