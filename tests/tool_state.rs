use egui::Color32;
use image::{Rgba, RgbaImage};
use mega_paint::input::{InputEvent, InputLocation};
use mega_paint::{BACKGROUND, EditorContext, EditorState, Point, SizeTarget, Tool, UiRequest};

// Rows at or above this y belong to the toolbar
const BELOW_TOOLBAR: i32 = 150;

fn create_test_editor() -> EditorContext {
    EditorContext::new(200, 300)
}

fn p(x: i32, y: i32) -> Point {
    Point::new(x, y)
}

fn drag(editor: &mut EditorContext, path: &[Point]) {
    let (first, rest) = path.split_first().unwrap();
    editor.on_pointer_down(*first);
    for point in rest {
        editor.on_pointer_move(*point);
    }
    editor.on_pointer_up(*path.last().unwrap());
}

fn count(editor: &EditorContext, color: Color32) -> usize {
    editor.canvas().pixels().iter().filter(|&&c| c == color).count()
}

#[test]
fn test_brush_gesture_draws_and_returns_to_idle() {
    let mut editor = create_test_editor();
    editor.on_pointer_down(p(50, BELOW_TOOLBAR));
    assert_eq!(
        *editor.current_state(),
        EditorState::Dragging {
            start: p(50, BELOW_TOOLBAR),
            last: p(50, BELOW_TOOLBAR)
        }
    );
    assert_eq!(editor.history().len(), 1);

    editor.on_pointer_move(p(80, BELOW_TOOLBAR));
    assert_eq!(editor.current_state().last_point(), Some(p(80, BELOW_TOOLBAR)));
    editor.on_pointer_up(p(80, BELOW_TOOLBAR));

    assert_eq!(*editor.current_state(), EditorState::Idle);
    // One snapshot for the whole stroke
    assert_eq!(editor.history().len(), 1);
    assert_eq!(editor.canvas().get_pixel(65, BELOW_TOOLBAR), Some(Color32::BLACK));
}

#[test]
fn test_eraser_paints_background() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Fill);
    editor.on_pointer_down(p(100, 200));
    assert_eq!(count(&editor, BACKGROUND), 0);

    editor.set_tool(Tool::Eraser);
    editor.set_size(SizeTarget::Eraser, 6);
    drag(&mut editor, &[p(40, 200), p(60, 200)]);

    assert_eq!(editor.canvas().get_pixel(40, 200), Some(BACKGROUND));
    assert_eq!(editor.canvas().get_pixel(50, 202), Some(BACKGROUND));
    assert_eq!(editor.canvas().get_pixel(50, 210), Some(Color32::BLACK));
}

#[test]
fn test_shape_ignores_drag_and_commits_on_release() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Rectangle);
    editor.set_size(SizeTarget::Brush, 1);

    editor.on_pointer_down(p(20, 120));
    editor.on_pointer_move(p(150, 250));
    assert_eq!(count(&editor, Color32::BLACK), 0, "nothing drawn before release");
    assert_eq!(editor.current_state().last_point(), Some(p(20, 120)));

    editor.on_pointer_up(p(40, 130));
    assert_eq!(*editor.current_state(), EditorState::Idle);
    // 21x11 outline
    assert_eq!(count(&editor, Color32::BLACK), 2 * 21 + 2 * 9);
    assert_eq!(editor.canvas().get_pixel(150, 250), Some(BACKGROUND));
}

#[test]
fn test_shapes_use_brush_width_not_eraser_width() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Line);
    editor.set_size(SizeTarget::Brush, 1);
    editor.set_size(SizeTarget::Eraser, 30);
    drag(&mut editor, &[p(10, 200), p(50, 200)]);
    assert_eq!(count(&editor, Color32::BLACK), 41);
}

#[test]
fn test_release_outside_canvas_still_ends_gesture() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Line);
    editor.on_pointer_down(p(100, 200));
    editor.on_pointer_up(p(-50, 900));

    assert_eq!(*editor.current_state(), EditorState::Idle);
    assert_eq!(editor.canvas().get_pixel(100, 200), Some(Color32::BLACK));
}

#[test]
fn test_fill_acts_immediately() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Fill);
    editor.set_color_index(1);
    editor.on_pointer_down(p(10, 200));

    assert_eq!(*editor.current_state(), EditorState::Idle);
    assert_eq!(count(&editor, Color32::RED), 200 * 300);
    assert_eq!(editor.history().len(), 1);

    // Same color again changes nothing and takes no snapshot
    editor.on_pointer_down(p(10, 200));
    assert_eq!(editor.history().len(), 1);
}

#[test]
fn test_toolbar_press_never_draws() {
    let mut editor = create_test_editor();
    // Empty spot in the toolbar band
    editor.on_pointer_down(p(195, 95));
    editor.on_pointer_move(p(195, 250));
    editor.on_pointer_up(p(195, 250));

    assert_eq!(count(&editor, BACKGROUND), 200 * 300);
    assert!(!editor.history().can_undo());
    assert_eq!(*editor.current_state(), EditorState::Idle);
}

#[test]
fn test_toolbar_selects_tools_and_colors() {
    let mut editor = create_test_editor();
    assert_eq!(editor.on_pointer_down(p(95, 20)), None); // third swatch
    assert_eq!(editor.color(), Color32::from_rgb(0, 255, 0));

    editor.on_pointer_down(p(400, 75));
    assert_eq!(editor.tool(), Tool::Eraser);
    editor.on_pointer_down(p(1050, 75));
    assert_eq!(editor.tool(), Tool::Fill);

    assert!(!editor.history().can_undo(), "selection takes no snapshot");
}

#[test]
fn test_toolbar_platform_requests() {
    let mut editor = create_test_editor();
    assert_eq!(editor.on_pointer_down(p(120, 70)), Some(UiRequest::SaveImage));
    assert_eq!(editor.on_pointer_down(p(200, 70)), Some(UiRequest::OpenImage));
    assert_eq!(
        editor.on_pointer_down(p(830, 70)),
        Some(UiRequest::EditSize(SizeTarget::Brush))
    );
    assert_eq!(
        editor.on_pointer_down(p(1000, 70)),
        Some(UiRequest::EditSize(SizeTarget::Eraser))
    );
}

#[test]
fn test_clear_and_undo_buttons() {
    let mut editor = create_test_editor();
    drag(&mut editor, &[p(10, 200), p(100, 250)]);
    let drawn = editor.canvas().clone();

    editor.on_pointer_down(p(30, 70)); // Clear
    assert_eq!(count(&editor, BACKGROUND), 200 * 300);
    assert_eq!(editor.history().len(), 2);

    editor.on_pointer_down(p(750, 70)); // Undo
    assert_eq!(editor.canvas(), &drawn);
    editor.on_pointer_down(p(750, 70)); // Undo
    assert_eq!(count(&editor, BACKGROUND), 200 * 300);

    // Empty history: nothing happens
    editor.on_pointer_down(p(750, 70));
    assert_eq!(count(&editor, BACKGROUND), 200 * 300);
}

#[test]
fn test_every_operation_is_undoable() {
    let mut editor = create_test_editor();
    drag(&mut editor, &[p(10, 200), p(100, 250)]);

    let operations: Vec<Box<dyn Fn(&mut EditorContext)>> = vec![
        Box::new(|e: &mut EditorContext| drag(e, &[p(30, 120), p(60, 290)])),
        Box::new(|e: &mut EditorContext| {
            e.set_tool(Tool::Circle);
            drag(e, &[p(20, 130), p(180, 280)]);
        }),
        Box::new(|e: &mut EditorContext| {
            e.set_tool(Tool::Fill);
            e.set_color_index(6);
            e.on_pointer_down(p(190, 290));
        }),
        Box::new(|e: &mut EditorContext| e.clear()),
        Box::new(|e: &mut EditorContext| {
            e.load_image(RgbaImage::from_pixel(64, 400, Rgba([255, 0, 255, 255])));
        }),
    ];

    for operation in operations {
        let before = editor.canvas().clone();
        operation(&mut editor);
        assert_ne!(editor.canvas(), &before);
        assert!(editor.undo());
        assert_eq!(editor.canvas(), &before);
        editor.set_tool(Tool::Brush);
    }
}

#[test]
fn test_size_input_validation() {
    let mut editor = create_test_editor();
    assert!(editor.apply_size_input(SizeTarget::Brush, "12"));
    assert_eq!(editor.brush_size(), 12);

    for bad in ["", "abc", "0", "-4", "3.5"] {
        assert!(!editor.apply_size_input(SizeTarget::Brush, bad));
        assert_eq!(editor.brush_size(), 12);
    }

    // Sizes are independent
    assert!(editor.apply_size_input(SizeTarget::Eraser, "7"));
    assert_eq!(editor.eraser_size(), 7);
    assert_eq!(editor.brush_size(), 12);
}

#[test]
fn test_oversized_widths_are_rejected() {
    let mut editor = create_test_editor();
    assert!(!editor.apply_size_input(SizeTarget::Brush, "4294967295"));
    assert!(!editor.set_size(SizeTarget::Eraser, u32::MAX));
    assert_eq!(editor.brush_size(), 4);
    assert_eq!(editor.eraser_size(), 20);

    // Pressing afterwards still stamps the old, small brush.
    editor.on_pointer_down(p(100, BELOW_TOOLBAR));
    editor.on_pointer_up(p(100, BELOW_TOOLBAR));
    assert!(count(&editor, Color32::BLACK) < 30);
}

#[test]
fn test_widest_brush_stroke_stays_on_canvas() {
    let mut editor = create_test_editor();
    assert!(editor.apply_size_input(SizeTarget::Brush, "500"));
    drag(&mut editor, &[p(10, 110), p(190, 290), p(10, 290)]);

    // The disc covers the whole 200x300 canvas from any of those points.
    assert_eq!(count(&editor, Color32::BLACK), 200 * 300);
    assert_eq!(*editor.current_state(), EditorState::Idle);
}

#[test]
fn test_input_events_drive_the_same_machine() {
    let mut editor = create_test_editor();
    let events = [
        InputEvent::PointerDown {
            location: InputLocation::in_canvas(20, 200),
        },
        InputEvent::PointerMove {
            location: InputLocation::in_canvas(60, 200),
        },
        InputEvent::PointerUp {
            location: InputLocation {
                position: p(60, 200),
                is_in_canvas: false,
            },
        },
    ];
    for event in &events {
        assert_eq!(editor.handle_event(event), None);
    }
    assert_eq!(editor.canvas().get_pixel(40, 200), Some(Color32::BLACK));
    assert_eq!(*editor.current_state(), EditorState::Idle);

    // Presses outside the canvas widget are ignored
    let outside = InputEvent::PointerDown {
        location: InputLocation {
            position: p(20, 200),
            is_in_canvas: false,
        },
    };
    editor.handle_event(&outside);
    assert_eq!(*editor.current_state(), EditorState::Idle);
}

#[test]
fn test_resize_keeps_drawing_and_is_not_undoable() {
    let mut editor = create_test_editor();
    drag(&mut editor, &[p(10, 200), p(20, 200)]);
    editor.resize_canvas(300, 100);
    assert_eq!(editor.canvas().size(), [300, 100]);
    assert_eq!(editor.history().len(), 1);

    editor.resize_canvas(200, 300);
    // Clipped by the shrink, so the stroke is gone
    assert_eq!(count(&editor, Color32::BLACK), 0);
}

#[test]
fn test_preferences_round_trip() {
    let mut editor = create_test_editor();
    editor.set_tool(Tool::Circle);
    editor.set_color_index(4);
    editor.set_size(SizeTarget::Brush, 9);

    let mut other = create_test_editor();
    other.apply_preferences(editor.preferences());
    assert_eq!(other.tool(), Tool::Circle);
    assert_eq!(other.color_index(), 4);
    assert_eq!(other.brush_size(), 9);
    assert_eq!(other.eraser_size(), 20);
}
