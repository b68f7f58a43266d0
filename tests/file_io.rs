use std::fs;

use egui::Color32;
use mega_paint::file_handler::{self, FileError};
use mega_paint::settings::{SETTINGS_FILE, Settings};
use mega_paint::{BACKGROUND, Canvas, EditorContext, Point};

#[test]
fn test_png_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("drawing.png");

    let mut canvas = Canvas::new(12, 7);
    canvas.set_pixel(3, 4, Color32::RED);
    canvas.set_pixel(11, 6, Color32::from_rgb(255, 200, 0));
    file_handler::save_png(&canvas, &path).unwrap();

    let image = file_handler::load_image(&path).unwrap();
    assert_eq!(image.dimensions(), (12, 7));

    let mut loaded = Canvas::new(12, 7);
    loaded.draw_image(&image);
    assert_eq!(loaded, canvas);
}

#[test]
fn test_open_draws_at_origin_without_resizing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");

    let mut small = Canvas::new(5, 5);
    small.fill(Color32::BLUE);
    file_handler::save_png(&small, &path).unwrap();

    let mut editor = EditorContext::new(20, 20);
    editor.load_image(file_handler::load_image(&path).unwrap());
    assert_eq!(editor.canvas().size(), [20, 20]);
    assert_eq!(editor.canvas().get_pixel(4, 4), Some(Color32::BLUE));
    assert_eq!(editor.canvas().get_pixel(5, 5), Some(BACKGROUND));

    assert!(editor.undo());
    assert_eq!(editor.canvas(), &Canvas::new(20, 20));
}

#[test]
fn test_missing_and_corrupt_images_are_errors() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.png");
    assert!(matches!(
        file_handler::load_image(&missing),
        Err(FileError::Read { .. })
    ));

    let corrupt = dir.path().join("corrupt.png");
    fs::write(&corrupt, b"definitely not a png").unwrap();
    assert!(matches!(
        file_handler::load_image(&corrupt),
        Err(FileError::Decode(_))
    ));
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no/such/dir/out.png");
    let canvas = Canvas::new(2, 2);
    assert!(matches!(
        file_handler::save_png(&canvas, &path),
        Err(FileError::Encode { .. })
    ));
}

#[test]
fn test_failed_open_leaves_canvas_alone() {
    let dir = tempfile::tempdir().unwrap();
    let mut editor = EditorContext::new(30, 200);
    editor.set_tool(mega_paint::Tool::Fill);
    editor.on_pointer_down(Point::new(10, 120));

    // Same flow as the Open button: only a decoded image reaches the editor
    let before = editor.canvas().clone();
    if let Ok(image) = file_handler::load_image(&dir.path().join("missing.png")) {
        editor.load_image(image);
    }
    assert_eq!(editor.canvas(), &before);
}

#[test]
fn test_settings_show_welcome_false() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "showWelcome=false\n").unwrap();
    assert!(!Settings::load(&path).show_welcome);
}

#[test]
fn test_settings_without_key_default_to_shown() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "language=en\n").unwrap();
    assert!(Settings::load(&path).show_welcome);

    // Missing file behaves the same
    assert!(Settings::load(&dir.path().join("absent.txt")).show_welcome);
}

#[test]
fn test_settings_save_overwrites_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(SETTINGS_FILE);
    fs::write(&path, "showWelcome=true\nlegacy=1\nmore=2\n").unwrap();

    let settings = Settings {
        show_welcome: false,
    };
    settings.save(&path).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "showWelcome=false\n");
    assert_eq!(Settings::try_load(&path).unwrap(), settings);
}
