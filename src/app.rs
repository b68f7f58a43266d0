use std::path::PathBuf;

use crate::file_handler::{self, FileHandler};
use crate::input::InputHandler;
use crate::panels::{self, PromptResult, SizePrompt, WelcomeDialog};
use crate::renderer::Renderer;
use crate::settings::{SETTINGS_FILE, Settings};
use crate::state::{EditorContext, ToolPreferences};
use crate::toolbar::UiRequest;

/// Canvas size before the first frame reports the real viewport.
pub const INITIAL_CANVAS_SIZE: [usize; 2] = [1000, 600];

/// The paint application: editor core plus the window-side plumbing
/// (texture upload, dialogs, settings file, file pickers).
pub struct PaintApp {
    pub(crate) editor: EditorContext,
    pub(crate) renderer: Renderer,
    pub(crate) input: InputHandler,
    file_handler: FileHandler,
    settings: Settings,
    settings_path: PathBuf,
    welcome: Option<WelcomeDialog>,
    size_prompt: Option<SizePrompt>,
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let mut app = Self::with_settings_path(PathBuf::from(SETTINGS_FILE));

        // Tool choices from the previous run, if any.
        if let Some(storage) = cc.storage {
            if let Some(preferences) =
                eframe::get_value::<ToolPreferences>(storage, eframe::APP_KEY)
            {
                app.editor.apply_preferences(preferences);
            }
        }

        app
    }

    /// Builds the app without a window, reading settings from `settings_path`.
    pub fn with_settings_path(settings_path: PathBuf) -> Self {
        let settings = Settings::load(&settings_path);
        let [width, height] = INITIAL_CANVAS_SIZE;
        log::info!("Starting with a {}x{} canvas", width, height);

        Self {
            editor: EditorContext::new(width, height),
            renderer: Renderer::new(),
            input: InputHandler::new(),
            file_handler: FileHandler::new(),
            welcome: settings.show_welcome.then(WelcomeDialog::new),
            settings,
            settings_path,
            size_prompt: None,
        }
    }

    pub fn editor(&self) -> &EditorContext {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut EditorContext {
        &mut self.editor
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn is_welcome_open(&self) -> bool {
        self.welcome.is_some()
    }

    pub fn size_prompt(&self) -> Option<&SizePrompt> {
        self.size_prompt.as_ref()
    }

    /// Whether a dialog currently blocks canvas input.
    pub fn has_modal(&self) -> bool {
        self.welcome.is_some() || self.size_prompt.is_some()
    }

    /// Carries out a toolbar action that needs the platform.
    pub fn handle_request(&mut self, request: UiRequest) {
        match request {
            UiRequest::SaveImage => {
                if let Some(path) = file_handler::pick_save_path() {
                    if let Err(err) = file_handler::save_png(self.editor.canvas(), &path) {
                        log::error!("{}", err);
                    }
                }
            }
            UiRequest::OpenImage => {
                if let Some(path) = file_handler::pick_open_path() {
                    match file_handler::load_image(&path) {
                        Ok(image) => self.editor.load_image(image),
                        Err(err) => log::error!("{}", err),
                    }
                }
            }
            UiRequest::EditSize(target) => {
                self.size_prompt = Some(SizePrompt::new(target, self.editor.size(target)));
            }
        }
    }

    /// Records the welcome dialog's checkbox once the dialog is closed.
    pub fn close_welcome(&mut self, dont_show_again: bool) {
        self.welcome = None;
        if dont_show_again {
            self.settings.show_welcome = false;
            if let Err(err) = self.settings.save(&self.settings_path) {
                log::warn!("{}", err);
            }
        }
    }

    fn show_dialogs(&mut self, ctx: &egui::Context) {
        if let Some(welcome) = &mut self.welcome {
            if let Some(dont_show_again) = welcome.show(ctx) {
                self.close_welcome(dont_show_again);
            }
        }

        if let Some(prompt) = &mut self.size_prompt {
            match prompt.show(ctx) {
                PromptResult::Pending => {}
                PromptResult::Submitted(input) => {
                    let target = prompt.target();
                    self.editor.apply_size_input(target, &input);
                    self.size_prompt = None;
                }
                PromptResult::Cancelled => self.size_prompt = None,
            }
        }
    }

    fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        if !self.file_handler.check_for_dropped_files(ctx) {
            return;
        }
        match self.file_handler.take_dropped_image() {
            Some(Ok(image)) => self.editor.load_image(image),
            Some(Err(err)) => log::error!("{}", err),
            None => {}
        }
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, &self.editor.preferences());
    }

    /// Called each time the UI needs repainting.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Decided before the dialogs run so the click that closes a dialog
        // does not also land on the canvas.
        let accept_input = !self.has_modal();

        self.show_dialogs(ctx);
        self.handle_dropped_files(ctx);
        panels::central_panel(self, ctx, accept_input);
    }
}
