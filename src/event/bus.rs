use std::cell::RefCell;
use std::collections::VecDeque;

use crate::event::{EventHandler, SketchEvent};

/// Broadcasts sketch events to registered handlers and queues them for the
/// redraw loop.
pub struct EventBus {
    handlers: RefCell<Vec<Box<dyn EventHandler>>>,
    pending: RefCell<VecDeque<SketchEvent>>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &format!("<{} handlers>", self.handlers.borrow().len()))
            .field("pending", &self.pending.borrow().len())
            .finish()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

impl EventBus {
    /// Creates a new event bus
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
            pending: RefCell::new(VecDeque::new()),
        }
    }

    /// Subscribe a handler to receive events
    pub fn subscribe(&self, handler: Box<dyn EventHandler>) {
        self.handlers.borrow_mut().push(handler);
    }

    /// Emit an event to all registered handlers, then queue it
    pub fn emit(&self, event: SketchEvent) {
        for handler in &mut *self.handlers.borrow_mut() {
            handler.handle_event(&event);
        }
        self.pending.borrow_mut().push_back(event);
    }

    /// Take the oldest queued event
    pub fn next_pending(&self) -> Option<SketchEvent> {
        self.pending.borrow_mut().pop_front()
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.borrow().is_empty()
    }
}
