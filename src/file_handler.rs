use std::path::{Path, PathBuf};

use eframe::egui;
use image::{ImageFormat, RgbaImage};
use rfd::FileDialog;
use thiserror::Error;

use crate::canvas::Canvas;

/// Extensions offered in the open dialog and accepted from drag-and-drop.
pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp"];

/// Errors that can occur while reading or writing image files
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("Failed to write {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Dropped file has no accessible data: {0}")]
    NoData(String),
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;

/// Writes the canvas as a PNG, whatever extension `path` carries.
pub fn save_png(canvas: &Canvas, path: &Path) -> FileResult<()> {
    canvas
        .to_rgba_image()
        .save_with_format(path, ImageFormat::Png)
        .map_err(|source| FileError::Encode {
            path: path.to_path_buf(),
            source,
        })?;
    log::info!("Saved {}x{} image to {}", canvas.width(), canvas.height(), path.display());
    Ok(())
}

/// Reads and decodes an image file into RGBA.
pub fn load_image(path: &Path) -> FileResult<RgbaImage> {
    let bytes = std::fs::read(path).map_err(|source| FileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let image = decode_image(&bytes)?;
    log::info!("Loaded {}x{} image from {}", image.width(), image.height(), path.display());
    Ok(image)
}

/// Decodes in-memory image data into RGBA, guessing the format from content.
pub fn decode_image(bytes: &[u8]) -> FileResult<RgbaImage> {
    image::load_from_memory(bytes)
        .map(|img| img.to_rgba8())
        .map_err(FileError::Decode)
}

/// Asks the user where to save. Adds a `.png` extension when none was typed.
pub fn pick_save_path() -> Option<PathBuf> {
    let path = FileDialog::new()
        .set_title("Save Image")
        .add_filter("PNG image", &["png"])
        .save_file()?;
    Some(if path.extension().is_none() {
        path.with_extension("png")
    } else {
        path
    })
}

/// Asks the user for an image to open.
pub fn pick_open_path() -> Option<PathBuf> {
    FileDialog::new()
        .set_title("Open Image")
        .add_filter("Images", IMAGE_EXTENSIONS)
        .pick_file()
}

/// Check if a path looks like an image based on its extension
pub fn has_image_extension(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}

/// Collects images dropped onto the window this frame.
#[derive(Debug, Default)]
pub struct FileHandler {
    dropped_files: Vec<egui::DroppedFile>,
}

impl FileHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Grabs any newly dropped files from the UI context.
    /// Returns true if there is something to process.
    pub fn check_for_dropped_files(&mut self, ctx: &egui::Context) -> bool {
        ctx.input(|i| {
            if !i.raw.dropped_files.is_empty() {
                self.dropped_files = i.raw.dropped_files.clone();
            }
        });
        !self.dropped_files.is_empty()
    }

    /// Decodes the first dropped image. Other files are skipped with a warning.
    pub fn take_dropped_image(&mut self) -> Option<FileResult<RgbaImage>> {
        let files = std::mem::take(&mut self.dropped_files);
        for file in files {
            let name = match &file.path {
                Some(path) => path.display().to_string(),
                None if !file.name.is_empty() => file.name.clone(),
                None => "unknown".to_owned(),
            };

            let is_image = if !file.mime.is_empty() {
                file.mime.starts_with("image/")
            } else {
                file.path.as_deref().is_some_and(has_image_extension)
            };
            if !is_image {
                log::warn!("Dropped file is not a supported type: {}", name);
                continue;
            }

            if let Some(bytes) = &file.bytes {
                return Some(decode_image(bytes));
            }
            return Some(match &file.path {
                Some(path) => load_image(path),
                None => Err(FileError::NoData(name)),
            });
        }
        None
    }
}
