//! Input documents and their rendered form.

use std::path::{Path, PathBuf};

use crate::error::{Result, ViewError};
use crate::markdown::Renderer;

/// One input Markdown file, rendered to an HTML fragment.
///
/// Immutable after construction; the display title and derived output name
/// both come from the source file name.
#[derive(Debug, Clone)]
pub struct Document {
    source: PathBuf,
    title: String,
    html: String,
}

impl Document {
    /// Reads and renders a Markdown file.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Input`] if the file is missing, unreadable, or
    /// not valid UTF-8, and [`ViewError::Render`] if rendering fails.
    pub fn load(path: impl AsRef<Path>, renderer: &Renderer) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ViewError::Input {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_markdown(path, &text, renderer)
    }

    /// Renders Markdown text under a synthetic source path.
    ///
    /// Used for bundled content such as the README, which has no file on
    /// disk but still needs a title and a derived output name.
    pub fn from_markdown(
        source: impl Into<PathBuf>,
        text: &str,
        renderer: &Renderer,
    ) -> Result<Self> {
        let source = source.into();
        let html = renderer.render(text)?;
        let title = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| source.display().to_string());

        Ok(Self {
            source,
            title,
            html,
        })
    }

    /// Source path this document was read from.
    pub fn source(&self) -> &Path {
        &self.source
    }

    /// Display title (the source file name).
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Rendered HTML fragment.
    pub fn html(&self) -> &str {
        &self.html
    }

    /// Output file name derived from the source: base name with `.html`.
    pub fn output_name(&self) -> String {
        let stem = self
            .source
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.title.clone());
        format!("{stem}.html")
    }
}
