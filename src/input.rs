use egui::{Context, PointerButton, Pos2, Rect};

use crate::geometry::Point;

/// Represents the location where an input event occurred
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputLocation {
    /// Position relative to the canvas origin, in pixels
    pub position: Point,
    /// Whether this position is within the canvas bounds
    pub is_in_canvas: bool,
}

impl InputLocation {
    /// A location inside the canvas, mostly useful for driving the editor
    /// without a window.
    pub fn in_canvas(x: i32, y: i32) -> Self {
        Self {
            position: Point::new(x, y),
            is_in_canvas: true,
        }
    }
}

/// Primary-button pointer events, in the order they happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Primary button was pressed
    PointerDown { location: InputLocation },
    /// Pointer moved while the primary button was held
    PointerMove { location: InputLocation },
    /// Primary button was released
    PointerUp { location: InputLocation },
}

/// Handles converting raw egui input into canvas-local [`InputEvent`]s.
#[derive(Debug, Default)]
pub struct InputHandler {
    last_pointer_pos: Option<Pos2>,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an InputLocation from a screen position
    fn make_location(canvas_rect: Rect, pos: Pos2) -> InputLocation {
        InputLocation {
            position: Point::from_pos2((pos - canvas_rect.min).to_pos2()),
            is_in_canvas: canvas_rect.contains(pos),
        }
    }

    /// Process raw egui input for this frame. `canvas_rect` is where the
    /// canvas is painted on screen.
    pub fn process_input(&mut self, ctx: &Context, canvas_rect: Rect) -> Vec<InputEvent> {
        let mut events = Vec::new();

        ctx.input(|input| {
            let pointer = &input.pointer;
            let pos = pointer.latest_pos().or(self.last_pointer_pos);

            if pointer.button_pressed(PointerButton::Primary) {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerDown {
                        location: Self::make_location(canvas_rect, pos),
                    });
                }
            }

            if pointer.button_down(PointerButton::Primary) {
                if let Some(pos) = pos {
                    if Some(pos) != self.last_pointer_pos {
                        events.push(InputEvent::PointerMove {
                            location: Self::make_location(canvas_rect, pos),
                        });
                    }
                }
            }

            // A release outside the window still ends the gesture, at the
            // last position we saw.
            if pointer.button_released(PointerButton::Primary) {
                if let Some(pos) = pos {
                    events.push(InputEvent::PointerUp {
                        location: Self::make_location(canvas_rect, pos),
                    });
                }
            }

            if pos.is_some() {
                self.last_pointer_pos = pos;
            }
        });

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations_are_canvas_local() {
        let rect = Rect::from_min_size(egui::pos2(8.0, 30.0), egui::vec2(100.0, 50.0));
        let inside = InputHandler::make_location(rect, egui::pos2(18.5, 40.0));
        assert_eq!(inside.position, Point::new(10, 10));
        assert!(inside.is_in_canvas);

        let outside = InputHandler::make_location(rect, egui::pos2(4.0, 40.0));
        assert_eq!(outside.position, Point::new(-4, 10));
        assert!(!outside.is_in_canvas);
    }
}
