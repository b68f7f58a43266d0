use eframe::egui;

use crate::toolbar::SizeTarget;

const WELCOME_TEXT: &str = "Welcome to Mega Paint App!

- Use the toolbar to select tools and colors
- Click 'Open' to load an image
- Click 'Save' to store your masterpiece
- Use 'Undo' to go back one step

Have fun creating!";

/// Startup greeting with a "Don't show this again" checkbox.
#[derive(Debug, Default)]
pub struct WelcomeDialog {
    dont_show_again: bool,
}

impl WelcomeDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the dialog. Returns `Some(dont_show_again)` once it is closed.
    pub fn show(&mut self, ctx: &egui::Context) -> Option<bool> {
        let mut open = true;
        let mut confirmed = false;

        egui::Window::new("Welcome")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(WELCOME_TEXT);
                ui.add_space(8.0);
                ui.checkbox(&mut self.dont_show_again, "Don't show this again");
                ui.add_space(4.0);
                if ui.button("OK").clicked() {
                    confirmed = true;
                }
            });

        (!open || confirmed).then_some(self.dont_show_again)
    }
}

/// Outcome of a frame of the size prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptResult {
    Pending,
    Submitted(String),
    Cancelled,
}

/// Numeric prompt for the brush or eraser width.
#[derive(Debug)]
pub struct SizePrompt {
    target: SizeTarget,
    input: String,
    focus_requested: bool,
}

impl SizePrompt {
    /// Starts with the current width filled in.
    pub fn new(target: SizeTarget, current: u32) -> Self {
        Self {
            target,
            input: current.to_string(),
            focus_requested: false,
        }
    }

    pub fn target(&self) -> SizeTarget {
        self.target
    }

    pub fn show(&mut self, ctx: &egui::Context) -> PromptResult {
        let mut result = PromptResult::Pending;
        let mut open = true;

        egui::Window::new("Input")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .open(&mut open)
            .show(ctx, |ui| {
                ui.label(self.target.prompt());
                let response = ui.text_edit_singleline(&mut self.input);
                if !self.focus_requested {
                    response.request_focus();
                    self.focus_requested = true;
                }
                let entered =
                    response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));

                ui.horizontal(|ui| {
                    if ui.button("OK").clicked() || entered {
                        result = PromptResult::Submitted(self.input.clone());
                    }
                    if ui.button("Cancel").clicked() {
                        result = PromptResult::Cancelled;
                    }
                });
            });

        if !open {
            result = PromptResult::Cancelled;
        }
        result
    }
}
