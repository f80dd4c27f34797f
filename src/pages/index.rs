//! Navigation page for multi-file browser mode.

use maud::{Markup, html};

use crate::assets::{BASE_CSS, INDEX_CSS};
use crate::document::Document;
use crate::pages::page_shell;

/// Builds the index page listing each document as a link.
///
/// Links target sibling files by bare name, so the index works wherever
/// the artifact set was written (current directory or temp dir).
pub fn page(documents: &[Document]) -> Markup {
    page_shell(
        "Markdown Files Index",
        &[BASE_CSS, INDEX_CSS],
        None,
        html! {
            h1 { "Markdown Files" }
            ul class="document-list" {
                @for document in documents {
                    li {
                        a href=(document.output_name()) { (document.title()) }
                    }
                }
            }
        },
    )
}
