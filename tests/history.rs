use egui::pos2;
use sticker_sketchpad::command::{Command, History, MarkerLine, Sticker};
use sticker_sketchpad::event::EventBus;

fn marker(x: f32) -> Command {
    Command::MarkerLine(MarkerLine::new(pos2(x, x), 2.0))
}

#[test]
fn test_n_appends_then_n_undos() {
    let bus = EventBus::new();
    let mut history = History::new();
    let mut ids = Vec::new();
    for i in 0..5 {
        let command = marker(i as f32);
        ids.push(command.id());
        history.append(command, &bus);
    }
    for _ in 0..5 {
        history.undo(&bus);
    }

    assert!(history.active().is_empty());
    // Last created is undone first, and the most recently undone sits on top.
    let redo_ids: Vec<_> = history.redo_stack().iter().map(Command::id).collect();
    let mut reversed = ids.clone();
    reversed.reverse();
    assert_eq!(redo_ids, reversed);
}

#[test]
fn test_undo_redo_round_trips_same_instance() {
    let bus = EventBus::new();
    let mut history = History::new();
    let mut command = marker(1.0);
    command.extend(pos2(4.0, 4.0));
    let id = command.id();
    history.append(command, &bus);

    assert_eq!(history.undo(&bus), Some(id));
    assert_eq!(history.redo(&bus), Some(id));

    let restored = &history.active()[0];
    assert_eq!(restored.id(), id);
    assert_eq!(
        restored.as_marker_line().unwrap().points(),
        &[pos2(1.0, 1.0), pos2(4.0, 4.0)]
    );
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_append_after_undo_clears_all_redo() {
    let bus = EventBus::new();
    let mut history = History::new();
    for i in 0..3 {
        history.append(marker(i as f32), &bus);
    }
    history.undo(&bus);
    history.undo(&bus);
    assert_eq!(history.redo_stack().len(), 2);

    history.append(Command::Sticker(Sticker::new("★", pos2(0.0, 0.0))), &bus);

    assert!(history.redo_stack().is_empty());
    assert!(!history.can_redo());
    assert_eq!(history.active().len(), 2);
}

#[test]
fn test_clear_then_undo_is_noop() {
    let bus = EventBus::new();
    let mut history = History::new();
    history.append(marker(0.0), &bus);
    history.undo(&bus);
    history.append(marker(1.0), &bus);

    history.clear(&bus);
    assert_eq!(history.undo(&bus), None);

    assert!(history.active().is_empty());
    assert!(history.redo_stack().is_empty());
}

#[test]
fn test_undo_and_redo_on_empty_are_noops() {
    let bus = EventBus::new();
    let mut history = History::new();

    assert_eq!(history.undo(&bus), None);
    assert_eq!(history.redo(&bus), None);
    assert!(!history.can_undo());
    assert!(!history.can_redo());

    // Clearing twice is just as harmless.
    history.clear(&bus);
    history.clear(&bus);
    assert!(history.active().is_empty());
}

#[test]
fn test_stacks_never_share_a_command() {
    let bus = EventBus::new();
    let mut history = History::new();
    for i in 0..4 {
        history.append(marker(i as f32), &bus);
    }
    history.undo(&bus);
    history.undo(&bus);
    history.redo(&bus);

    let active: Vec<_> = history.active().iter().map(Command::id).collect();
    for undone in history.redo_stack() {
        assert!(!active.contains(&undone.id()));
    }
    assert_eq!(active.len() + history.redo_stack().len(), 4);
}
