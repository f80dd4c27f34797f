//! Tabbed page for multi-file window mode.

use maud::{Markup, PreEscaped, html};

use crate::assets::{BASE_CSS, TABS_CSS, TABS_JS};
use crate::document::Document;
use crate::pages::page_shell;

/// Builds a single page with one tab per document.
///
/// Control `i` references panel `i` through `data-panel`, and the panel
/// points back via `aria-labelledby`; the bundled script toggles the
/// `active` class on click. The first document starts active.
pub fn page(documents: &[Document]) -> Markup {
    let title = format!("Markdown Viewer - {} files", documents.len());

    page_shell(
        &title,
        &[BASE_CSS, TABS_CSS],
        Some(TABS_JS),
        html! {
            div class="tab-bar" role="tablist" {
                @for (i, document) in documents.iter().enumerate() {
                    button
                        id=(format!("tab-{i}"))
                        class=(if i == 0 { "tab-button active" } else { "tab-button" })
                        data-panel=(format!("panel-{i}")) {
                        (document.title())
                    }
                }
            }
            @for (i, document) in documents.iter().enumerate() {
                div
                    id=(format!("panel-{i}"))
                    class=(if i == 0 { "tab-panel active" } else { "tab-panel" })
                    role="tabpanel"
                    aria-labelledby=(format!("tab-{i}")) {
                    (PreEscaped(document.html()))
                }
            }
        },
    )
}
