//! Error taxonomy for the viewer pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Errors produced before an artifact is displayed.
///
/// Everything here is fatal and aborts the run: bad input and filesystem
/// faults are not expected to resolve on retry. Display degradation (native
/// window unavailable) and cleanup failures are deliberately not part of
/// this enum, since neither aborts a run.
#[derive(Debug, Error)]
pub enum ViewError {
    /// Input path missing, unreadable, or not valid UTF-8 text.
    #[error("cannot read input file '{}': {}", .path.display(), .source)]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Markdown conversion or code highlighting failed.
    #[error("markdown rendering failed: {0}")]
    Render(String),

    /// Target directory unwritable, disk full, or permission denied.
    #[error("cannot write '{}': {}", .path.display(), .source)]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The default-browser handoff could not be started.
    #[error("cannot open the default browser: {0}")]
    Browser(#[source] std::io::Error),
}

/// Result type for viewer operations.
pub type Result<T> = std::result::Result<T, ViewError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_error_names_offending_path() {
        let err = ViewError::Input {
            path: PathBuf::from("notes/missing.md"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let message = err.to_string();
        assert!(
            message.contains("notes/missing.md"),
            "Message should name the path: {}",
            message
        );
    }

    #[test]
    fn test_write_error_names_attempted_path() {
        let err = ViewError::Write {
            path: PathBuf::from("/readonly/report.html"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(err.to_string().contains("/readonly/report.html"));
    }

    #[test]
    fn test_render_error_is_surfaced_verbatim() {
        let err = ViewError::Render("highlighting failed on line 3".to_string());
        assert!(err.to_string().contains("highlighting failed on line 3"));
    }
}
