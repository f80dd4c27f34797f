//! Display surface selection and dispatch.

use std::io;
use std::path::Path;

use crate::error::{Result, ViewError};
use crate::gui;
use crate::store::Artifact;

/// The surface that actually presented an artifact.
///
/// The requested surface and the delivered one can differ: a window request
/// degrades to the browser when the windowing capability is unavailable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Gui,
    Browser,
}

type Opener = Box<dyn Fn(&Path) -> io::Result<()>>;

/// Opens artifacts on the requested surface.
pub struct Dispatcher {
    opener: Opener,
}

impl Dispatcher {
    /// Dispatcher backed by the operating system's default-browser handoff.
    pub fn new() -> Self {
        Self {
            opener: Box::new(|path| open::that_detached(path)),
        }
    }

    /// Dispatcher with a custom browser-open action.
    ///
    /// Seam for tests that need to observe the handoff without launching
    /// anything.
    pub fn with_opener(opener: impl Fn(&Path) -> io::Result<()> + 'static) -> Self {
        Self {
            opener: Box::new(opener),
        }
    }

    /// Presents the artifact's primary file and reports the surface used.
    ///
    /// With `want_gui`, the native window is tried first and blocks until
    /// the user closes it. An unavailable or failing window is a designed
    /// degradation, not an error: a one-line notice goes to stderr and the
    /// browser path runs instead. The browser handoff itself is
    /// fire-and-forget and returns immediately.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Browser`] if the browser handoff cannot be
    /// started.
    pub fn open(&self, artifact: &Artifact, want_gui: bool) -> Result<Surface> {
        if want_gui {
            match gui::present(artifact.primary()) {
                Ok(()) => return Ok(Surface::Gui),
                Err(reason) => {
                    eprintln!("Native window unavailable ({reason:#}); falling back to browser");
                }
            }
        }

        (self.opener)(artifact.primary()).map_err(ViewError::Browser)?;
        Ok(Surface::Browser)
    }
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;
    use crate::markdown::Renderer;
    use crate::pages::{self, PageMode};
    use crate::store;
    use std::cell::RefCell;
    use std::path::PathBuf;
    use std::rc::Rc;

    fn sample_artifact() -> Artifact {
        let renderer = Renderer::new();
        let document = Document::from_markdown("sample.md", "# Sample\n", &renderer)
            .expect("Should render");
        let page = pages::build(std::slice::from_ref(&document), PageMode::Single);
        store::write(&page, false).expect("Should write")
    }

    fn recording_dispatcher() -> (Dispatcher, Rc<RefCell<Vec<PathBuf>>>) {
        let opened = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&opened);
        let dispatcher = Dispatcher::with_opener(move |path| {
            sink.borrow_mut().push(path.to_path_buf());
            Ok(())
        });
        (dispatcher, opened)
    }

    #[test]
    fn test_browser_path_opens_primary() {
        // Arrange
        let artifact = sample_artifact();
        let (dispatcher, opened) = recording_dispatcher();

        // Act
        let surface = dispatcher.open(&artifact, false).expect("Should open");

        // Assert
        assert_eq!(surface, Surface::Browser);
        assert_eq!(
            opened.borrow().as_slice(),
            &[artifact.primary().to_path_buf()],
            "The primary file is handed to the browser"
        );

        crate::cleanup::sweep_now(artifact.paths());
    }

    // With the gui feature compiled in, a window could actually appear on a
    // machine with a display; the degradation contract is only deterministic
    // without it.
    #[cfg(not(feature = "gui"))]
    #[test]
    fn test_window_request_degrades_to_browser() {
        // Arrange
        let artifact = sample_artifact();
        let (dispatcher, opened) = recording_dispatcher();

        // Act
        let surface = dispatcher.open(&artifact, true).expect("Should fall back");

        // Assert: requested gui, delivered browser, artifact still opened
        assert_eq!(surface, Surface::Browser);
        assert_eq!(opened.borrow().len(), 1, "Fallback still opens the file");

        crate::cleanup::sweep_now(artifact.paths());
    }

    #[test]
    fn test_opener_failure_is_fatal() {
        // Arrange
        let artifact = sample_artifact();
        let dispatcher = Dispatcher::with_opener(|_| {
            Err(io::Error::new(io::ErrorKind::NotFound, "no handler"))
        });

        // Act
        let result = dispatcher.open(&artifact, false);

        // Assert
        assert!(matches!(result, Err(ViewError::Browser(_))));

        crate::cleanup::sweep_now(artifact.paths());
    }
}
