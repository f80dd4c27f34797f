//! Artifact materialization on the filesystem.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, ViewError};
use crate::pages::Page;

/// Whether an artifact outlives the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permanence {
    /// Written to the current directory, never deleted by us.
    Keep,
    /// Written to a per-run temp directory, swept after the cleanup delay.
    Transient,
}

/// The materialized HTML file(s) for one page.
#[derive(Debug)]
pub struct Artifact {
    paths: Vec<PathBuf>,
    primary: usize,
    permanence: Permanence,
}

impl Artifact {
    /// Written paths, in write order.
    pub fn paths(&self) -> &[PathBuf] {
        &self.paths
    }

    /// The path the display surface should open.
    pub fn primary(&self) -> &Path {
        &self.paths[self.primary]
    }

    pub fn permanence(&self) -> Permanence {
        self.permanence
    }

    pub fn is_transient(&self) -> bool {
        self.permanence == Permanence::Transient
    }
}

/// Writes a page's files to disk and returns the resulting artifact.
///
/// With `keep`, files land in the current working directory under their
/// deterministic derived names; later files with the same derived name
/// overwrite earlier ones, which is expected behavior, not a defect.
/// Without `keep`, a fresh uniquely named directory is created under the
/// system temp dir (tempfile's random suffix is the uniqueness token), so
/// concurrent runs can never write the same path.
///
/// # Errors
///
/// Returns [`ViewError::Write`] if the target cannot be created or written.
/// Filesystem faults are treated as non-transient; nothing is retried.
pub fn write(page: &Page, keep: bool) -> Result<Artifact> {
    if keep {
        let dir = std::env::current_dir().map_err(|source| ViewError::Write {
            path: PathBuf::from("."),
            source,
        })?;
        write_into(page, &dir, Permanence::Keep)
    } else {
        let dir = tempfile::Builder::new()
            .prefix("mdview-")
            .tempdir()
            .map_err(|source| ViewError::Write {
                path: std::env::temp_dir(),
                source,
            })?;
        // Deletion is the cleanup scheduler's job from here on.
        write_into(page, &dir.keep(), Permanence::Transient)
    }
}

fn write_into(page: &Page, dir: &Path, permanence: Permanence) -> Result<Artifact> {
    let mut paths = Vec::with_capacity(page.files().len());

    for file in page.files() {
        let path = dir.join(&file.name);
        fs::write(&path, &file.html).map_err(|source| ViewError::Write {
            path: path.clone(),
            source,
        })?;
        paths.push(path);
    }

    Ok(Artifact {
        paths,
        primary: page.primary_index(),
        permanence,
    })
}
