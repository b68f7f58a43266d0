mod editor_state;
pub mod context;
mod persistence;

pub use editor_state::EditorState;
pub use context::{EditorContext, parse_size};
pub use persistence::{MAX_STROKE_WIDTH, ToolPreferences};
