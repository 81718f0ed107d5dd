//! Output collaborators: clipboard and CSV download targets.
//!
//! Export code receives these explicitly instead of reaching for global
//! helpers. Failures are logged and reported as a boolean or `None`; they
//! never abort the action that triggered them.

use crate::csv_export::export_filename;
use std::io::Write;
use std::path::PathBuf;

/// Something plain text can be copied to
pub trait ClipboardWriter {
    fn write_text(&mut self, text: &str) -> std::io::Result<()>;
}

/// Where exported CSV documents are saved
pub trait CsvDownload {
    /// Save `content` under `filename`, returning where it ended up
    fn save_csv(&mut self, filename: &str, content: &str) -> std::io::Result<PathBuf>;
}

/// Clipboard stand-in that writes the text to any `Write` (stdout for the CLI)
pub struct WriterClipboard<W: Write> {
    out: W,
}

impl<W: Write> WriterClipboard<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ClipboardWriter for WriterClipboard<W> {
    fn write_text(&mut self, text: &str) -> std::io::Result<()> {
        self.out.write_all(text.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.out.flush()
    }
}

/// Saves CSV files into a directory, creating it if needed
pub struct DirectoryDownload {
    dir: PathBuf,
}

impl DirectoryDownload {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The user's download directory, or the working directory
    pub fn default_dir() -> PathBuf {
        dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
    }
}

impl CsvDownload for DirectoryDownload {
    fn save_csv(&mut self, filename: &str, content: &str) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(export_filename(filename));
        std::fs::write(&path, content)?;
        Ok(path)
    }
}

/// Copy text, logging instead of failing
pub fn copy_to_clipboard(clipboard: &mut dyn ClipboardWriter, text: &str) -> bool {
    match clipboard.write_text(text) {
        Ok(()) => {
            log::info!("Copied {} lines to clipboard", text.lines().count());
            true
        }
        Err(e) => {
            log::error!("Failed to write to clipboard: {}", e);
            false
        }
    }
}

/// Save a CSV document, logging instead of failing
pub fn download_csv(target: &mut dyn CsvDownload, filename: &str, content: &str) -> Option<PathBuf> {
    match target.save_csv(filename, content) {
        Ok(path) => {
            log::info!("Saved CSV to {}", path.display());
            Some(path)
        }
        Err(e) => {
            log::error!("Failed to save {}: {}", filename, e);
            None
        }
    }
}
