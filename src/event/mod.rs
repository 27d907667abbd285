mod bus;
mod events;

pub use bus::EventBus;
pub use events::SketchEvent;

/// Observer notified synchronously on every emitted event
pub trait EventHandler {
    fn handle_event(&mut self, event: &SketchEvent);
}
