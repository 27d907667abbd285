use std::cell::RefCell;
use std::rc::Rc;

use egui::pos2;
use sticker_sketchpad::{
    EventHandler, HistoryChange, InputEvent, InteractionState, Preview, RecordingSurface,
    SketchEvent, Sketchpad, ToolConfig,
};

fn sketchpad() -> Sketchpad<RecordingSurface> {
    Sketchpad::builder()
        .surface(RecordingSurface::new())
        .build()
        .unwrap()
}

struct Recorder(Rc<RefCell<Vec<SketchEvent>>>);

impl EventHandler for Recorder {
    fn handle_event(&mut self, event: &SketchEvent) {
        self.0.borrow_mut().push(event.clone());
    }
}

#[test]
fn test_single_stroke_records_every_point() {
    let mut pad = sketchpad();
    pad.handle_event(InputEvent::PointerDown {
        position: pos2(10.0, 10.0),
    });
    pad.handle_event(InputEvent::PointerMove {
        position: pos2(20.0, 10.0),
    });
    pad.handle_event(InputEvent::PointerMove {
        position: pos2(20.0, 20.0),
    });
    pad.handle_event(InputEvent::PointerUp);

    let history = pad.history();
    assert_eq!(history.active().len(), 1);
    assert_eq!(history.redo_stack().len(), 0);
    let line = history.active()[0].as_marker_line().unwrap();
    assert_eq!(
        line.points(),
        &[pos2(10.0, 10.0), pos2(20.0, 10.0), pos2(20.0, 20.0)]
    );
    assert_eq!(pad.state(), InteractionState::Idle);
}

#[test]
fn test_two_strokes_then_undo() {
    let mut pad = sketchpad();
    pad.press(pos2(0.0, 0.0));
    pad.move_to(pos2(5.0, 0.0));
    pad.release();
    let first = pad.history().active()[0].id();

    pad.press(pos2(0.0, 10.0));
    pad.move_to(pos2(5.0, 10.0));
    pad.release();
    let second = pad.history().active()[1].id();

    pad.undo();

    assert_eq!(pad.history().active().len(), 1);
    assert_eq!(pad.history().active()[0].id(), first);
    assert_eq!(pad.history().redo_stack().len(), 1);
    assert_eq!(pad.history().redo_stack()[0].id(), second);
}

#[test]
fn test_sticker_tap() {
    let mut pad = sketchpad();
    pad.select_sticker("★");
    pad.move_to(pos2(40.0, 40.0));
    pad.press(pos2(5.0, 5.0));
    pad.release();

    let history = pad.history();
    assert_eq!(history.active().len(), 1);
    let sticker = history.active()[0].as_sticker().unwrap();
    assert_eq!(sticker.glyph(), "★");
    assert_eq!(sticker.position(), pos2(5.0, 5.0));
}

#[test]
fn test_sticker_drag_moves_it() {
    let mut pad = sketchpad();
    pad.select_sticker("🐸");
    pad.press(pos2(5.0, 5.0));
    pad.move_to(pos2(8.0, 9.0));
    pad.move_to(pos2(30.0, 12.0));
    pad.release();

    let sticker = pad.history().active()[0].as_sticker().unwrap();
    assert_eq!(sticker.position(), pos2(30.0, 12.0));
}

#[test]
fn test_idle_move_shows_marker_preview_and_press_clears_it() {
    let mut pad = sketchpad();
    pad.select_marker(6.0);
    pad.move_to(pos2(12.0, 14.0));

    assert_eq!(
        pad.preview(),
        Some(&Preview::MarkerOutline {
            center: pos2(12.0, 14.0),
            thickness: 6.0,
        })
    );
    assert!(pad.history().active().is_empty());

    let events = Rc::new(RefCell::new(Vec::new()));
    pad.subscribe(Box::new(Recorder(events.clone())));
    pad.press(pos2(12.0, 14.0));

    assert!(pad.preview().is_none());
    let events = events.borrow();
    assert_eq!(events[0], SketchEvent::PreviewChanged);
    assert!(matches!(
        events[1],
        SketchEvent::DrawingChanged(HistoryChange::Appended(_))
    ));
}

#[test]
fn test_move_while_gesturing_never_previews() {
    let mut pad = sketchpad();
    pad.press(pos2(1.0, 1.0));
    pad.move_to(pos2(2.0, 2.0));
    pad.move_to(pos2(3.0, 3.0));

    assert!(pad.preview().is_none());
    assert!(pad.state().is_gesturing());
}

#[test]
fn test_leave_ends_gesture_and_clears_preview() {
    let mut pad = sketchpad();
    pad.press(pos2(1.0, 1.0));
    pad.handle_event(InputEvent::PointerLeave);
    assert_eq!(pad.state(), InteractionState::Idle);

    // Moves after the gesture ended must not reach the finished line.
    pad.move_to(pos2(50.0, 50.0));
    let line = pad.history().active()[0].as_marker_line().unwrap();
    assert_eq!(line.points(), &[pos2(1.0, 1.0)]);
    assert!(pad.preview().is_some());

    pad.leave();
    assert!(pad.preview().is_none());
}

#[test]
fn test_thickness_fixed_at_creation() {
    let mut pad = sketchpad();
    pad.select_marker(2.0);
    pad.press(pos2(0.0, 0.0));
    pad.release();
    pad.select_marker(8.0);

    let line = pad.history().active()[0].as_marker_line().unwrap();
    assert_eq!(line.thickness(), 2.0);
    assert_eq!(pad.tool(), &ToolConfig::Marker { thickness: 8.0 });
}

#[test]
fn test_tool_selection_does_not_touch_history() {
    let mut pad = sketchpad();
    pad.press(pos2(0.0, 0.0));
    pad.release();
    pad.undo();
    pad.move_to(pos2(4.0, 4.0));

    pad.handle_event(InputEvent::SelectSticker {
        glyph: "⭐".to_owned(),
    });

    assert!(pad.history().active().is_empty());
    assert_eq!(pad.history().redo_stack().len(), 1);
    assert!(pad.preview().is_none());
}

#[test]
fn test_tool_change_is_announced() {
    let mut pad = sketchpad();
    let events = Rc::new(RefCell::new(Vec::new()));
    pad.subscribe(Box::new(Recorder(events.clone())));

    pad.select_sticker("★");

    assert_eq!(
        events.borrow()[0],
        SketchEvent::ToolChanged {
            old: ToolConfig::default(),
            new: ToolConfig::Sticker {
                glyph: "★".to_owned()
            },
        }
    );
}

#[test]
fn test_outward_commands_are_safe_when_empty() {
    let mut pad = sketchpad();
    pad.handle_event(InputEvent::Undo);
    pad.handle_event(InputEvent::Redo);
    pad.handle_event(InputEvent::ClearAll);

    assert!(pad.history().active().is_empty());
    assert!(pad.history().redo_stack().is_empty());
}

#[test]
fn test_clear_all_drops_everything() {
    let mut pad = sketchpad();
    for i in 0..3 {
        pad.press(pos2(i as f32, 0.0));
        pad.release();
    }
    pad.undo();
    pad.clear_all();
    pad.undo();

    assert!(pad.history().active().is_empty());
    assert!(pad.history().redo_stack().is_empty());
}
