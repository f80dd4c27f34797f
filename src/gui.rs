//! Native window surface.
//!
//! Only compiled in with the `gui` cargo feature, since wry links the
//! platform webview libraries. The stub variant reports unavailability so
//! the dispatcher can degrade to the browser surface.

#[cfg(feature = "gui")]
pub(crate) use window::present;

#[cfg(not(feature = "gui"))]
pub(crate) fn present(_path: &std::path::Path) -> anyhow::Result<()> {
    anyhow::bail!("this build does not include the gui feature")
}

#[cfg(feature = "gui")]
mod window {
    use anyhow::{Context, Result, bail};
    use std::path::Path;
    use tao::dpi::LogicalSize;
    use tao::event::{Event, WindowEvent};
    use tao::event_loop::{ControlFlow, EventLoopBuilder};
    use tao::platform::run_return::EventLoopExtRunReturn;
    use tao::window::WindowBuilder;
    use wry::WebViewBuilder;

    const WIDTH: f64 = 960.0;
    const HEIGHT: f64 = 800.0;

    /// Shows `path` in a webview window, blocking until the window closes.
    ///
    /// # Errors
    ///
    /// Returns error if no display server is reachable or window/webview
    /// creation fails. Callers treat any error as "window unavailable" and
    /// fall back to the browser.
    pub(crate) fn present(path: &Path) -> Result<()> {
        if !display_available() {
            bail!("no display server");
        }

        let absolute = path
            .canonicalize()
            .with_context(|| format!("cannot resolve {}", path.display()))?;
        let url = format!("file://{}", absolute.display());
        let name = path.file_name().and_then(|n| n.to_str()).unwrap_or("mdview");

        let mut event_loop = EventLoopBuilder::new().build();
        let window = WindowBuilder::new()
            .with_title(format!("{name} - mdview"))
            .with_inner_size(LogicalSize::new(WIDTH, HEIGHT))
            .build(&event_loop)
            .context("cannot create window")?;

        let _webview = WebViewBuilder::new()
            .with_url(url)
            .build(&window)
            .context("cannot create webview")?;

        event_loop.run_return(|event, _, control_flow| {
            *control_flow = ControlFlow::Wait;
            if let Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } = event
            {
                *control_flow = ControlFlow::Exit;
            }
        });

        Ok(())
    }

    /// Linux needs a running display server; tao aborts without one.
    fn display_available() -> bool {
        if cfg!(target_os = "linux") {
            std::env::var_os("DISPLAY").is_some()
                || std::env::var_os("WAYLAND_DISPLAY").is_some()
        } else {
            true
        }
    }
}
