#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod command;
pub mod components;
pub mod draw;
pub mod file_handler;
pub mod geometry;
pub mod input;
pub mod panels;
pub mod renderer;
pub mod settings;
pub mod state;
pub mod toolbar;
pub mod tools;

pub use app::PaintApp;
pub use canvas::{BACKGROUND, Canvas};
pub use command::{Command, Snapshot, UndoHistory};
pub use geometry::Point;
pub use input::{InputEvent, InputLocation};
pub use renderer::Renderer;
pub use settings::Settings;
pub use state::{EditorContext, EditorState};
pub use toolbar::{SizeTarget, Toolbar, ToolbarItem, UiRequest};
pub use tools::Tool;
