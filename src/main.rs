use anyhow::{Context, Result};
use mdview::{BUNDLED_README, Config, Dispatcher, Document, PageMode, Renderer, Surface};
use mdview::{cleanup, pages, store};

fn main() -> Result<()> {
    let config = Config::parse();

    // Sweeper entry point: the cleanup scheduler re-invokes this binary
    // detached, with the artifact paths as positional arguments.
    if let Some(delay) = config.sweep_delay {
        cleanup::sweep(&config.files, delay);
        return Ok(());
    }

    config.validate().context("Invalid arguments")?;

    let delay = mdview::cleanup_delay();
    let renderer = Renderer::new();

    let documents = if config.readme {
        vec![Document::from_markdown("README.md", BUNDLED_README, &renderer)?]
    } else {
        config
            .files
            .iter()
            .map(|path| Document::load(path, &renderer))
            .collect::<mdview::Result<Vec<_>>>()?
    };

    let mode = PageMode::select(documents.len(), config.window);
    let page = pages::build(&documents, mode);

    let artifact = store::write(&page, config.keep).context("Failed to write HTML output")?;

    if config.keep {
        for path in artifact.paths() {
            println!("Saved: {}", path.display());
        }
    }

    // Window mode blocks here until the user closes the window; browser
    // mode is fire-and-forget. Cleanup is scheduled only after the artifact
    // has been handed to its surface.
    let dispatcher = Dispatcher::new();
    let surface = dispatcher
        .open(&artifact, config.window)
        .context("Failed to display HTML output")?;

    if artifact.is_transient() {
        cleanup::schedule(artifact.paths(), delay);
    }

    match surface {
        Surface::Browser if artifact.is_transient() => {
            println!(
                "Opened {} in your browser (temporary files will be deleted after {delay}s)",
                artifact.primary().display()
            );
        }
        Surface::Browser => {
            println!("Opened {} in your browser", artifact.primary().display());
        }
        Surface::Gui => {}
    }

    Ok(())
}
