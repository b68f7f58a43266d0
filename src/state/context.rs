//! The editor core: one canvas, its undo history, the current tool settings
//! and the gesture state machine that turns pointer input into drawing
//! commands.
//!
//! Nothing here touches a window, so every transition can be driven from
//! tests by feeding [`InputEvent`]s or calling the pointer methods directly.
//! Toolbar actions that need the platform (file dialogs, numeric prompts)
//! are handed back to the caller as [`UiRequest`]s.
use egui::Color32;
use image::RgbaImage;

use super::EditorState;
use super::persistence::{
    DEFAULT_BRUSH_SIZE, DEFAULT_ERASER_SIZE, MAX_STROKE_WIDTH, ToolPreferences,
};
use crate::canvas::{BACKGROUND, Canvas};
use crate::command::{Command, UndoHistory};
use crate::draw::Shape;
use crate::geometry::Point;
use crate::input::InputEvent;
use crate::toolbar::{SizeTarget, Toolbar, ToolbarItem, UiRequest, in_toolbar_region};
use crate::tools::{PALETTE, Tool, color_name};

/// Parses a stroke width typed into a size prompt. Only whole numbers from 1
/// to [`MAX_STROKE_WIDTH`] are accepted.
pub fn parse_size(input: &str) -> Option<u32> {
    input
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|size| (1..=MAX_STROKE_WIDTH).contains(size))
}

/// The main context for the paint application editor.
#[derive(Debug)]
pub struct EditorContext {
    canvas: Canvas,
    history: UndoHistory,
    /// Current gesture
    state: EditorState,
    toolbar: Toolbar,
    tool: Tool,
    /// Index into the palette
    color_index: usize,
    brush_size: u32,
    eraser_size: u32,
    /// Set whenever the canvas pixels change; cleared by the renderer.
    canvas_dirty: bool,
}

impl EditorContext {
    /// Creates an editor with a blank canvas of the given size, the brush
    /// selected, black as the current color and an unbounded undo history.
    pub fn new(width: usize, height: usize) -> Self {
        Self::with_history(Canvas::new(width, height), UndoHistory::new())
    }

    pub fn with_history(canvas: Canvas, history: UndoHistory) -> Self {
        Self {
            canvas,
            history,
            state: EditorState::Idle,
            toolbar: Toolbar::new(),
            tool: Tool::Brush,
            color_index: 0,
            brush_size: DEFAULT_BRUSH_SIZE,
            eraser_size: DEFAULT_ERASER_SIZE,
            canvas_dirty: true,
        }
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn history(&self) -> &UndoHistory {
        &self.history
    }

    /// Gets a reference to the current state.
    pub fn current_state(&self) -> &EditorState {
        &self.state
    }

    pub fn toolbar(&self) -> &Toolbar {
        &self.toolbar
    }

    pub fn tool(&self) -> Tool {
        self.tool
    }

    pub fn color(&self) -> Color32 {
        PALETTE[self.color_index].color
    }

    pub fn color_index(&self) -> usize {
        self.color_index
    }

    pub fn brush_size(&self) -> u32 {
        self.brush_size
    }

    pub fn eraser_size(&self) -> u32 {
        self.eraser_size
    }

    pub fn size(&self, target: SizeTarget) -> u32 {
        match target {
            SizeTarget::Brush => self.brush_size,
            SizeTarget::Eraser => self.eraser_size,
        }
    }

    pub fn set_tool(&mut self, tool: Tool) {
        if self.tool != tool {
            log::info!("Tool selected: {}", tool);
            self.tool = tool;
        }
    }

    /// Selects a palette color. Out-of-range indices are ignored.
    pub fn set_color_index(&mut self, index: usize) {
        if let Some(entry) = PALETTE.get(index) {
            log::info!("Color selected: {}", entry.name);
            self.color_index = index;
        }
    }

    /// Sets a stroke width. Zero and widths above [`MAX_STROKE_WIDTH`] are
    /// rejected and leave the old width.
    pub fn set_size(&mut self, target: SizeTarget, size: u32) -> bool {
        if !(1..=MAX_STROKE_WIDTH).contains(&size) {
            log::debug!("Rejecting {:?} size {}", target, size);
            return false;
        }
        match target {
            SizeTarget::Brush => self.brush_size = size,
            SizeTarget::Eraser => self.eraser_size = size,
        }
        log::info!("{:?} size set to {}", target, size);
        true
    }

    /// Applies text typed into a size prompt. Invalid input is discarded and
    /// the previous width kept.
    pub fn apply_size_input(&mut self, target: SizeTarget, input: &str) -> bool {
        match parse_size(input) {
            Some(size) => self.set_size(target, size),
            None => {
                log::debug!("Ignoring invalid {:?} size input {:?}", target, input);
                false
            }
        }
    }

    /// "Tool: Brush | Color: Black"
    pub fn status_text(&self) -> String {
        format!("Tool: {} | Color: {}", self.tool, color_name(self.color()))
    }

    pub fn preferences(&self) -> ToolPreferences {
        ToolPreferences {
            tool: self.tool,
            color_index: self.color_index,
            brush_size: self.brush_size,
            eraser_size: self.eraser_size,
        }
    }

    pub fn apply_preferences(&mut self, preferences: ToolPreferences) {
        let preferences = preferences.sanitized();
        self.tool = preferences.tool;
        self.color_index = preferences.color_index;
        self.brush_size = preferences.brush_size;
        self.eraser_size = preferences.eraser_size;
    }

    /// Returns whether the canvas changed since the last call.
    pub fn take_canvas_dirty(&mut self) -> bool {
        std::mem::take(&mut self.canvas_dirty)
    }

    /// Returns the editor to the idle state, dropping the gesture points.
    pub fn return_to_idle(&mut self) {
        self.state = EditorState::Idle;
    }

    /// Feeds one input event through the state machine.
    pub fn handle_event(&mut self, event: &InputEvent) -> Option<UiRequest> {
        match event {
            InputEvent::PointerDown { location } if location.is_in_canvas => {
                self.on_pointer_down(location.position)
            }
            InputEvent::PointerDown { .. } => None,
            InputEvent::PointerMove { location } => {
                self.on_pointer_move(location.position);
                None
            }
            InputEvent::PointerUp { location } => {
                self.on_pointer_up(location.position);
                None
            }
        }
    }

    /// Handles a press. Presses in the toolbar band are routed to the
    /// toolbar; presses below it start a gesture with the current tool.
    pub fn on_pointer_down(&mut self, pos: Point) -> Option<UiRequest> {
        if let Some(last) = self.state.last_point() {
            // The release of the previous gesture never arrived.
            log::debug!("Press while dragging; finishing previous gesture");
            self.on_pointer_up(last);
        }

        if in_toolbar_region(pos) {
            return self.toolbar_click(pos);
        }

        if self.tool == Tool::Fill {
            self.fill_at(pos);
            return None;
        }

        self.begin_operation();
        self.state = EditorState::Dragging {
            start: pos,
            last: pos,
        };

        if self.tool.is_freehand() {
            let (width, color) = self.stroke_style();
            self.execute(&Command::Segment {
                from: pos,
                to: pos,
                width,
                color,
            });
        }
        None
    }

    /// Handles pointer motion. Only brush and eraser react, and only while a
    /// gesture is in progress.
    pub fn on_pointer_move(&mut self, pos: Point) {
        let EditorState::Dragging { start, last } = self.state else {
            return;
        };
        if !self.tool.is_freehand() || last == pos {
            return;
        }

        let (width, color) = self.stroke_style();
        self.execute(&Command::Segment {
            from: last,
            to: pos,
            width,
            color,
        });
        self.state = EditorState::Dragging { start, last: pos };
    }

    /// Handles a release. Shape tools commit their outline from the press
    /// point to `pos`; the gesture ends in every case.
    pub fn on_pointer_up(&mut self, pos: Point) {
        let Some(start) = self.state.start_point() else {
            return;
        };

        if let Some(kind) = self.tool.shape_kind() {
            self.execute(&Command::DrawShape(Shape {
                kind,
                start,
                end: pos,
                width: self.brush_size,
                color: self.color(),
            }));
        }
        self.return_to_idle();
    }

    /// Restores the canvas to its state before the most recent operation.
    /// Returns `false` when there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        let restored = self.history.undo(&mut self.canvas);
        if restored {
            log::debug!("Undo; {} snapshot(s) left", self.history.len());
            self.canvas_dirty = true;
        } else {
            log::debug!("Nothing to undo");
        }
        restored
    }

    /// Resets the canvas to the background color.
    pub fn clear(&mut self) {
        self.begin_operation();
        self.execute(&Command::Clear);
    }

    /// Draws a decoded image at the canvas origin.
    pub fn load_image(&mut self, image: RgbaImage) {
        self.begin_operation();
        self.execute(&Command::DrawImage(image));
    }

    /// Resizes the canvas to the viewport, keeping content at the origin.
    /// Resizing is not an undoable operation.
    pub fn resize_canvas(&mut self, width: usize, height: usize) {
        if self.canvas.size() != [width, height] {
            self.canvas.resize_preserving(width, height);
            self.canvas_dirty = true;
        }
    }

    fn toolbar_click(&mut self, pos: Point) -> Option<UiRequest> {
        let item = self.toolbar.hit_test(pos)?;
        match item {
            ToolbarItem::Swatch(index) => self.set_color_index(index),
            ToolbarItem::Tool(tool) => self.set_tool(tool),
            ToolbarItem::Clear => self.clear(),
            ToolbarItem::Undo => {
                self.undo();
            }
            ToolbarItem::Save => return Some(UiRequest::SaveImage),
            ToolbarItem::Open => return Some(UiRequest::OpenImage),
            ToolbarItem::BrushSize => return Some(UiRequest::EditSize(SizeTarget::Brush)),
            ToolbarItem::EraserSize => return Some(UiRequest::EditSize(SizeTarget::Eraser)),
        }
        None
    }

    fn fill_at(&mut self, pos: Point) {
        let color = self.color();
        match self.canvas.get_pixel(pos.x, pos.y) {
            Some(target) if target != color => {
                self.begin_operation();
                self.execute(&Command::Fill { seed: pos, color });
            }
            // Outside the canvas or already the fill color: nothing would change.
            _ => {}
        }
    }

    /// Width and color of the current freehand tool. The eraser always paints
    /// the background color.
    fn stroke_style(&self) -> (u32, Color32) {
        match self.tool {
            Tool::Eraser => (self.eraser_size, BACKGROUND),
            _ => (self.brush_size, self.color()),
        }
    }

    /// Snapshots the canvas before an undoable operation starts.
    fn begin_operation(&mut self) {
        self.history.push_snapshot(&self.canvas);
    }

    fn execute(&mut self, command: &Command) {
        command.execute(&mut self.canvas);
        self.canvas_dirty = true;
    }
}
