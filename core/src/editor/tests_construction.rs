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

fn move_to(editor: &mut Editor, x: f64, y: f64) {
    editor
        .handle_event(InputEvent::PointerMoved { x, y })
        .unwrap();
}

fn line_mode(editor: &mut Editor) {
    editor.handle_event(InputEvent::KeyPressed(Key::Tab)).unwrap();
    assert_eq!(editor.mode(), Mode::Line);
}

#[test]
fn test_point_mode_creates_points() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 200.0, 150.0);
    assert_eq!(ed.scene().points().len(), 2);
}

#[test]
fn test_point_mode_click_on_existing_point_is_noop() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    // Within the hit radius of the first point.
    click(&mut ed, 104.0, 102.0);
    assert_eq!(ed.scene().points().len(), 1);
}

#[test]
fn test_line_construction_flow() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    line_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    let start = ed.line_start().expect("construction began");
    assert_eq!(ed.scene().point(start).map(|p| p.x), Some(100.0));

    click(&mut ed, 300.0, 100.0);
    assert!(ed.line_start().is_none());
    assert_eq!(ed.scene().lines().len(), 1);
}

#[test]
fn test_line_mode_same_point_click_cancels() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    line_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    assert!(ed.line_start().is_some());
    click(&mut ed, 100.0, 100.0);
    assert!(ed.line_start().is_none());
    assert!(ed.scene().lines().is_empty());
}

#[test]
fn test_line_mode_empty_click_cancels_without_creating_point() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    line_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    assert!(ed.line_start().is_some());
    click(&mut ed, 500.0, 500.0);
    assert!(ed.line_start().is_none());
    // Deliberately different from POINT mode: no point appears.
    assert_eq!(ed.scene().points().len(), 1);
    assert!(ed.scene().lines().is_empty());
}

#[test]
fn test_preview_line_lifecycle() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    line_mode(&mut ed);

    // No construction in progress: no preview.
    move_to(&mut ed, 400.0, 400.0);
    assert!(ed.preview_line().is_none());

    click(&mut ed, 100.0, 100.0);
    move_to(&mut ed, 400.0, 400.0);
    let preview = ed.preview_line().expect("preview follows the cursor");
    assert_eq!(preview.to, [400.0, 400.0]);

    // Hovering a point suppresses the preview.
    move_to(&mut ed, 102.0, 100.0);
    assert!(ed.preview_line().is_none());
}

#[test]
fn test_closing_line_commits_polygon() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 200.0, 300.0);
    line_mode(&mut ed);

    for (from, to) in [
        ((100.0, 100.0), (300.0, 100.0)),
        ((300.0, 100.0), (200.0, 300.0)),
        ((200.0, 300.0), (100.0, 100.0)),
    ] {
        click(&mut ed, from.0, from.1);
        click(&mut ed, to.0, to.1);
    }

    assert_eq!(ed.scene().lines().len(), 3);
    assert_eq!(ed.scene().surfaces().len(), 1);
    assert_eq!(ed.scene().surfaces()[0].vertices().len(), 3);
}

#[test]
fn test_open_path_commits_no_polygon() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 200.0, 300.0);
    line_mode(&mut ed);

    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 200.0, 300.0);

    assert_eq!(ed.scene().lines().len(), 2);
    assert!(ed.scene().surfaces().is_empty());
}

#[test]
fn test_unrelated_line_does_not_duplicate_polygon() {
    let mut ed = editor();
    click(&mut ed, 100.0, 100.0);
    click(&mut ed, 300.0, 100.0);
    click(&mut ed, 200.0, 300.0);
    click(&mut ed, 600.0, 600.0);
    click(&mut ed, 700.0, 600.0);
    line_mode(&mut ed);

    for (from, to) in [
        ((100.0, 100.0), (300.0, 100.0)),
        ((300.0, 100.0), (200.0, 300.0)),
        ((200.0, 300.0), (100.0, 100.0)),
    ] {
        click(&mut ed, from.0, from.1);
        click(&mut ed, to.0, to.1);
    }
    assert_eq!(ed.scene().surfaces().len(), 1);

    // A later line far from the triangle re-runs detection but must not
    // re-append the already-committed polygon.
    click(&mut ed, 600.0, 600.0);
    click(&mut ed, 700.0, 600.0);
    assert_eq!(ed.scene().lines().len(), 4);
    assert_eq!(ed.scene().surfaces().len(), 1);
}
