use crate::geometry::{PixelRect, Point};
use crate::tools::{PALETTE, Tool};

/// Everything at or above this row belongs to the toolbar; presses there
/// never reach the drawing tools.
pub const TOOLBAR_HEIGHT: i32 = 100;

const SWATCH_SIZE: i32 = 30;
const SWATCH_PITCH: i32 = 40;
const BUTTON_ROW_Y: i32 = 60;
const BUTTON_HEIGHT: i32 = 30;

/// A hit-testable toolbar region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolbarItem {
    /// Index into [`PALETTE`].
    Swatch(usize),
    Clear,
    Save,
    Open,
    Tool(Tool),
    Undo,
    BrushSize,
    EraserSize,
}

/// Which stroke width a numeric prompt edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTarget {
    Brush,
    Eraser,
}

impl SizeTarget {
    pub fn prompt(&self) -> &'static str {
        match self {
            SizeTarget::Brush => "Enter brush size:",
            SizeTarget::Eraser => "Enter eraser size:",
        }
    }
}

/// Toolbar actions that need the platform (dialogs, file system) and are
/// therefore carried out by the UI shell rather than the editor core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiRequest {
    SaveImage,
    OpenImage,
    EditSize(SizeTarget),
}

/// Returns true if `p` lies in the toolbar band.
pub fn in_toolbar_region(p: Point) -> bool {
    p.y <= TOOLBAR_HEIGHT
}

/// A labeled toolbar button.
#[derive(Debug, Clone, Copy)]
pub struct ToolbarButton {
    pub rect: PixelRect,
    pub item: ToolbarItem,
    pub label: &'static str,
}

/// Fixed layout of the toolbar: a row of color swatches above a row of
/// labeled buttons.
#[derive(Debug, Clone)]
pub struct Toolbar {
    swatches: Vec<PixelRect>,
    buttons: Vec<ToolbarButton>,
}

impl Default for Toolbar {
    fn default() -> Self {
        Self::new()
    }
}

impl Toolbar {
    pub fn new() -> Self {
        let swatches = (0..PALETTE.len() as i32)
            .map(|i| PixelRect::new(10 + i * SWATCH_PITCH, 10, SWATCH_SIZE, SWATCH_SIZE))
            .collect();

        let button = |x: i32, width: i32, item: ToolbarItem, label: &'static str| ToolbarButton {
            rect: PixelRect::new(x, BUTTON_ROW_Y, width, BUTTON_HEIGHT),
            item,
            label,
        };
        let buttons = vec![
            button(10, 80, ToolbarItem::Clear, "Clear"),
            button(100, 80, ToolbarItem::Save, "Save"),
            button(190, 80, ToolbarItem::Open, "Open"),
            button(280, 80, ToolbarItem::Tool(Tool::Brush), "Brush"),
            button(370, 80, ToolbarItem::Tool(Tool::Eraser), "Eraser"),
            button(460, 80, ToolbarItem::Tool(Tool::Rectangle), "Rect"),
            button(550, 80, ToolbarItem::Tool(Tool::Circle), "Circle"),
            button(640, 80, ToolbarItem::Tool(Tool::Line), "Line"),
            button(730, 80, ToolbarItem::Undo, "Undo"),
            button(820, 100, ToolbarItem::BrushSize, "Brush Size"),
            button(930, 100, ToolbarItem::EraserSize, "Eraser Size"),
            button(1040, 80, ToolbarItem::Tool(Tool::Fill), "Fill"),
        ];

        Self { swatches, buttons }
    }

    pub fn swatches(&self) -> &[PixelRect] {
        &self.swatches
    }

    pub fn buttons(&self) -> &[ToolbarButton] {
        &self.buttons
    }

    /// Finds the item under `p`. Swatches are checked before buttons.
    pub fn hit_test(&self, p: Point) -> Option<ToolbarItem> {
        if let Some(index) = self.swatches.iter().position(|rect| rect.contains(p)) {
            return Some(ToolbarItem::Swatch(index));
        }
        self.buttons
            .iter()
            .find(|button| button.rect.contains(p))
            .map(|button| button.item)
    }

    /// Width needed to show every toolbar item.
    pub fn width(&self) -> i32 {
        self.swatches
            .iter()
            .chain(self.buttons.iter().map(|b| &b.rect))
            .map(PixelRect::right)
            .max()
            .unwrap_or(0)
    }
}
