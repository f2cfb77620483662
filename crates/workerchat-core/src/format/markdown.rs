use comrak::{markdown_to_html, Options};

use crate::error::Result;

/// Markdown-to-HTML capability the formatter renders prose through.
pub trait TextRenderer: Send + Sync {
    fn to_html(&self, markdown: &str) -> Result<String>;
}

/// Production renderer: comrak with GitHub-flavored tables and autolinks,
/// and single-newline-as-`<br>` semantics.
#[derive(Debug, Default)]
pub struct MarkdownRenderer;

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TextRenderer for MarkdownRenderer {
    fn to_html(&self, markdown: &str) -> Result<String> {
        let mut options = Options::default();
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.strikethrough = true;
        options.render.hardbreaks = true;
        // Raw HTML in prose passes through unescaped. The converter output is
        // the trust boundary here; sanitizing would change observable
        // behavior. Known injection surface, kept deliberately.
        options.render.unsafe_ = true;
        Ok(markdown_to_html(markdown, &options))
    }
}
