//! Standalone page for one document.

use maud::{Markup, PreEscaped, html};

use crate::assets::BASE_CSS;
use crate::document::Document;
use crate::pages::page_shell;

/// Wraps one rendered document in the standalone HTML shell.
///
/// The page title is the source file name; styling follows GitHub's
/// conventions (constrained content width, shaded code blocks, bordered
/// tables, left-bordered blockquotes) from the bundled stylesheet.
pub fn page(document: &Document) -> Markup {
    page_shell(
        document.title(),
        &[BASE_CSS],
        None,
        html! {
            article class="markdown-body" {
                (PreEscaped(document.html()))
            }
        },
    )
}
