//! HTML page composition.
//!
//! A [`Page`] is the logical HTML document (or set of documents) built from
//! one or more rendered [`Document`]s, before anything touches disk. Each
//! variant lives in its own module; this module holds the shared shell and
//! the `build` entry point.

pub mod index;
pub mod single;
pub mod tabbed;

use maud::{DOCTYPE, Markup, PreEscaped, html};

use crate::document::Document;

/// How documents are composed into a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMode {
    /// One document, rendered standalone.
    Single,
    /// Navigation page linking to one sibling file per document.
    Index,
    /// One page with client-side tab switching between documents.
    Tabbed,
}

impl PageMode {
    /// Selects the mode for a document count and display preference.
    ///
    /// A single document always renders standalone; multiple documents get
    /// tabs in window mode and an index page in browser mode.
    pub fn select(count: usize, window: bool) -> Self {
        match (count, window) {
            (1, _) => PageMode::Single,
            (_, true) => PageMode::Tabbed,
            (_, false) => PageMode::Index,
        }
    }
}

/// One named HTML file belonging to a page.
#[derive(Debug, Clone)]
pub struct PageFile {
    pub name: String,
    pub html: String,
}

/// A built page: named HTML files in write order, one of them primary.
///
/// The primary file is the one handed to the display surface. For index
/// pages that is the index file (written last, after the files it links
/// to); single and tabbed pages have exactly one file.
#[derive(Debug)]
pub struct Page {
    files: Vec<PageFile>,
    primary: usize,
}

impl Page {
    /// Page files in write order.
    pub fn files(&self) -> &[PageFile] {
        &self.files
    }

    /// The file the display surface should open.
    pub fn primary(&self) -> &PageFile {
        &self.files[self.primary]
    }

    /// Index of the primary file within [`Self::files`].
    pub fn primary_index(&self) -> usize {
        self.primary
    }
}

/// Composes rendered documents into a page.
///
/// Document order is preserved: it determines tab order and index listing
/// order. Mode/count mismatches are programmer errors (the CLI derives the
/// mode from the count) and panic.
pub fn build(documents: &[Document], mode: PageMode) -> Page {
    assert!(!documents.is_empty(), "a page requires at least one document");

    match mode {
        PageMode::Single => {
            assert_eq!(documents.len(), 1, "single mode takes exactly one document");
            let document = &documents[0];
            Page {
                files: vec![PageFile {
                    name: document.output_name(),
                    html: single::page(document).into_string(),
                }],
                primary: 0,
            }
        }
        PageMode::Tabbed => Page {
            files: vec![PageFile {
                name: documents[0].output_name(),
                html: tabbed::page(documents).into_string(),
            }],
            primary: 0,
        },
        PageMode::Index => {
            let mut files: Vec<PageFile> = documents
                .iter()
                .map(|document| PageFile {
                    name: document.output_name(),
                    html: single::page(document).into_string(),
                })
                .collect();
            files.push(PageFile {
                name: "index.html".to_string(),
                html: index::page(documents).into_string(),
            });
            Page {
                primary: files.len() - 1,
                files,
            }
        }
    }
}

/// Wraps page content in the standard HTML shell.
///
/// Stylesheets and scripts are inlined so every artifact is self-contained
/// and works from any directory, including the temp dir.
pub(crate) fn page_shell(
    title: &str,
    styles: &[&str],
    script: Option<&str>,
    body: Markup,
) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (title) }
                @for css in styles {
                    style { (PreEscaped(*css)) }
                }
                @if let Some(js) = script {
                    script { (PreEscaped(js)) }
                }
            }
            body {
                (body)
            }
        }
    }
}
