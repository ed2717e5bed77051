use super::events::{InputEvent, Key, MouseButton};
use super::{Editor, Mode};

fn editor() -> Editor {
    Editor::new(1280.0, 720.0)
}

fn click(editor: &mut Editor, x: f64, y: f64) {
    editor
        .handle_event(InputEvent::PointerPressed { button: MouseButton::Left, x, y })
        .unwrap();
}

fn key(editor: &mut Editor, key: Key) {
    editor.handle_event(InputEvent::KeyPressed(key)).unwrap();
}

fn select_mode(editor: &mut Editor) {
    key(editor, Key::Tab);
    key(editor, Key::Tab);
    assert_eq!(editor.mode(), Mode::Select);
}

#[test]
fn test_click_toggles_selection() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    select_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    let selected = ed.selected_point().expect("point selected");
    assert_eq!(ed.scene().points()[0].id, selected);

    click(&mut ed, 100.0, 100.0);
    assert!(ed.selected_point().is_none());
}

#[test]
fn test_empty_click_clears_selection() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    select_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    assert!(ed.selected_point().is_some());
    click(&mut ed, 600.0, 600.0);
    assert!(ed.selected_point().is_none());
}

#[test]
fn test_selecting_another_point_moves_selection() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 300.0);
    select_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    let first = ed.selected_point().unwrap();
    click(&mut ed, 300.0, 300.0);
    let second = ed.selected_point().unwrap();
    assert_ne!(first, second);
}

#[test]
fn test_delete_without_selection_is_noop() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    select_mode(&mut ed);

    key(&mut ed, Key::Delete);
    assert_eq!(ed.scene().points().len(), 1);
}

#[test]
fn test_delete_cascades_lines_and_surfaces() {
    let mut ed = editor();
    // Triangle plus a spur point connected to one vertex.
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 200.0, 300.0);
    click(&mut ed, 500.0, 500.0);
    key(&mut ed, Key::Tab); // LINE mode

    for (from, to) in [
        ((100.0, 100.0), (300.0, 100.0)),
        ((300.0, 100.0), (200.0, 300.0)),
        ((200.0, 300.0), (100.0, 100.0)),
        ((100.0, 100.0), (500.0, 500.0)),
    ] {
        click(&mut ed, from.0, from.1);
        click(&mut ed, to.0, to.1);
    }
    assert_eq!(ed.scene().lines().len(), 4);
    assert_eq!(ed.scene().surfaces().len(), 1);

    key(&mut ed, Key::Tab); // SELECT mode
    click(&mut ed, 100.0, 100.0); // select the degree-3 vertex
    key(&mut ed, Key::Delete);

    // Exactly the three incident lines vanish, the surface is invalidated,
    // and the rest of the scene is untouched.
    assert_eq!(ed.scene().points().len(), 3);
    assert_eq!(ed.scene().lines().len(), 1); // B–C survives
    assert!(ed.scene().surfaces().is_empty());
    assert!(ed.selected_point().is_none());
}

#[test]
fn test_backspace_is_delete_alias() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    select_mode(&mut ed);
    click(&mut ed, 100.0, 100.0);

    key(&mut ed, Key::Backspace);
    assert!(ed.scene().points().is_empty());
}
