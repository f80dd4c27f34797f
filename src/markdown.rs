//! Markdown rendering with GitHub Flavored Markdown support.

use comrak::Options;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{Result, ViewError};

/// Renders Markdown text to an HTML fragment.
///
/// Enables the GFM extension set (tables, strikethrough, autolinks, task
/// lists, footnotes) plus heading anchors for in-page navigation. Fenced
/// code blocks with a language tag are post-processed with syntect into
/// CSS-classed spans (`hljs-` prefix) that the bundled stylesheet colors.
pub struct Renderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer with the fixed extension set.
    ///
    /// Raw HTML passes through unsanitized: input is the user's own local
    /// files, the same trust model a browser applies to file:// content.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.header_ids = Some(String::new());

        options.parse.smart = true;
        options.render.unsafe_ = true;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
        }
    }

    /// Renders Markdown content to an HTML fragment.
    ///
    /// # Errors
    ///
    /// Returns [`ViewError::Render`] if code highlighting fails. Plain
    /// conversion cannot fail.
    pub fn render(&self, content: &str) -> Result<String> {
        let html = comrak::markdown_to_html(content, &self.options);
        self.highlight_code_blocks(&html)
    }

    /// Replaces the plain text inside `<code class="language-X">` blocks
    /// with syntect-highlighted spans, leaving everything else untouched.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        const OPEN: &str = "<code class=\"language-";
        const CLOSE: &str = "</code>";

        let mut result = String::with_capacity(html.len());
        let mut last_end = 0;
        let mut search_pos = 0;

        while let Some(offset) = html[search_pos..].find(OPEN) {
            let code_start = search_pos + offset;

            let lang_start = code_start + OPEN.len();
            let Some(lang_len) = html[lang_start..].find('"') else {
                search_pos = code_start + 1;
                continue;
            };
            let language = &html[lang_start..lang_start + lang_len];

            let Some(tag_len) = html[lang_start + lang_len..].find('>') else {
                search_pos = code_start + 1;
                continue;
            };
            let content_start = lang_start + lang_len + tag_len + 1;

            let Some(content_len) = html[content_start..].find(CLOSE) else {
                search_pos = code_start + 1;
                continue;
            };
            let content_end = content_start + content_len;

            // comrak escaped the block content; undo that before parsing
            let code = html_decode(&html[content_start..content_end]);

            result.push_str(&html[last_end..code_start]);
            result.push_str(OPEN);
            result.push_str(language);
            result.push_str("\">");
            result.push_str(&self.highlight_code(&code, language)?);
            result.push_str(CLOSE);

            last_end = content_end + CLOSE.len();
            search_pos = last_end;
        }

        result.push_str(&html[last_end..]);

        Ok(result)
    }

    /// Highlights one code block, falling back to escaped plain text when
    /// the language is unknown.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let syntax = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language));

        let Some(syntax) = syntax else {
            return Ok(html_escape(code));
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        for line in LinesWithEndings::from(code) {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .map_err(|e| ViewError::Render(format!("cannot highlight {language}: {e}")))?;
        }

        Ok(generator.finalize())
    }
}

impl<'a> Default for Renderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

fn html_decode(html: &str) -> String {
    html.replace("&amp;", "&")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#39;", "'")
}

fn html_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
