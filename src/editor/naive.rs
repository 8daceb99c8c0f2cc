//! String-list editor that guesses element kinds from file extensions.
//!
//! Text and images are stored the same way, so the renderer has to decide
//! what each entry is by looking at how it ends. Any text ending in `.jpg`
//! or `.png` is shown as an image. [`super::Editor`] does not have this
//! problem because it keeps the element kind.

use std::path::{Path, PathBuf};

use crate::storage::{DEFAULT_OUTPUT, FileStorage, Storage, StorageError};

const IMAGE_SUFFIXES: &[&str] = &[".jpg", ".png"];

#[derive(Debug, Clone)]
pub struct NaiveEditor {
    entries: Vec<String>,
    rendered: String,
    output: PathBuf,
}

impl NaiveEditor {
    pub fn new() -> Self {
        Self::with_output(DEFAULT_OUTPUT)
    }

    pub fn with_output(output: impl Into<PathBuf>) -> Self {
        Self {
            entries: Vec::new(),
            rendered: String::new(),
            output: output.into(),
        }
    }

    pub fn output(&self) -> &Path {
        &self.output
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn add_text(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    pub fn add_image(&mut self, path: impl Into<String>) {
        self.entries.push(path.into());
    }

    /// Render every entry on its own line.
    ///
    /// The result is cached on first use and never refreshed.
    pub fn render_document(&mut self) -> &str {
        if self.rendered.is_empty() {
            let mut out = String::new();
            for entry in &self.entries {
                if looks_like_image(entry) {
                    out.push_str("[Image: ");
                    out.push_str(entry);
                    out.push(']');
                } else {
                    out.push_str(entry);
                }
                out.push('\n');
            }
            self.rendered = out;
        }
        &self.rendered
    }

    /// Write the rendering to the output file.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the output file cannot be written.
    pub fn save_to_file(&mut self) -> Result<(), StorageError> {
        let rendered = self.render_document().to_owned();
        FileStorage::new(&self.output).save(&rendered)
    }
}

impl Default for NaiveEditor {
    fn default() -> Self {
        Self::new()
    }
}

fn looks_like_image(entry: &str) -> bool {
    IMAGE_SUFFIXES.iter().any(|suffix| entry.ends_with(suffix))
}
