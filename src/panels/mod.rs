mod central_panel;
mod dialogs;

pub use central_panel::central_panel;
pub use dialogs::{PromptResult, SizePrompt, WelcomeDialog};
