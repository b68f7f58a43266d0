use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Settings file, relative to the working directory.
pub const SETTINGS_FILE: &str = "paint_settings.txt";

const SHOW_WELCOME_KEY: &str = "showWelcome";

/// Errors that can occur while reading or writing the settings file
#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write settings file {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Result type for settings operations
pub type SettingsResult<T> = Result<T, SettingsError>;

/// User settings persisted as `key=value` lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Whether the welcome dialog appears at startup
    pub show_welcome: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self { show_welcome: true }
    }
}

impl Settings {
    /// Parses settings text. Unknown keys and malformed lines are skipped, and
    /// keys that never appear keep their defaults.
    pub fn parse(text: &str) -> Self {
        let mut settings = Self::default();
        for line in text.lines() {
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            match key.trim() {
                // Anything but "true" switches the dialog off.
                SHOW_WELCOME_KEY => settings.show_welcome = parse_bool(value),
                other => log::debug!("Ignoring unknown setting {:?}", other),
            }
        }
        settings
    }

    /// Renders the full settings file.
    pub fn to_text(&self) -> String {
        format!("{}={}\n", SHOW_WELCOME_KEY, self.show_welcome)
    }

    /// Reads settings from `path`.
    pub fn try_load(path: &Path) -> SettingsResult<Self> {
        let text = fs::read_to_string(path).map_err(|source| SettingsError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Reads settings from `path`, falling back to defaults when the file is
    /// missing or unreadable.
    pub fn load(path: &Path) -> Self {
        match Self::try_load(path) {
            Ok(settings) => settings,
            Err(SettingsError::Read { source, .. })
                if source.kind() == std::io::ErrorKind::NotFound =>
            {
                Self::default()
            }
            Err(err) => {
                log::warn!("{}", err);
                Self::default()
            }
        }
    }

    /// Overwrites `path` with the current settings.
    pub fn save(&self, path: &Path) -> SettingsResult<()> {
        fs::write(path, self.to_text()).map_err(|source| SettingsError::Write {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn parse_bool(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("true")
}
