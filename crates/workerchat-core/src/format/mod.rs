//! Response formatting: raw answer text in, sanitized highlighted HTML out.

pub mod highlight;
pub mod markdown;
pub mod segment;

use tracing::warn;

pub use highlight::{CodeHighlighter, HighlightedCode, SyntectHighlighter};
pub use markdown::{MarkdownRenderer, TextRenderer};
pub use segment::{split_segments, Segment};

use crate::config::Settings;

/// Escape the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Turns a raw AI answer into one HTML fragment for the display surface.
///
/// Total: any segment whose renderer or highlighter faults degrades to
/// escaped plain text, and the rest of the answer still renders.
pub struct ResponseFormatter {
    renderer: Box<dyn TextRenderer>,
    highlighter: Box<dyn CodeHighlighter>,
}

impl ResponseFormatter {
    pub fn new() -> Self {
        Self {
            renderer: Box::new(MarkdownRenderer::new()),
            highlighter: Box::new(SyntectHighlighter::new()),
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            renderer: Box::new(MarkdownRenderer::new()),
            highlighter: Box::new(SyntectHighlighter::with_theme(
                &settings.render.highlight_theme,
            )),
        }
    }

    /// Substitute the production renderer/highlighter, e.g. with test doubles.
    pub fn with_capabilities(
        renderer: Box<dyn TextRenderer>,
        highlighter: Box<dyn CodeHighlighter>,
    ) -> Self {
        Self {
            renderer,
            highlighter,
        }
    }

    pub fn format(&self, raw: &str) -> String {
        let mut html = String::with_capacity(raw.len() + raw.len() / 2);
        for segment in split_segments(raw) {
            match segment {
                Segment::Prose { text } => html.push_str(&self.render_prose(&text)),
                Segment::Code { language, body, .. } => {
                    html.push_str(&self.render_code(language.as_deref(), &body))
                }
            }
        }
        html
    }

    fn render_prose(&self, text: &str) -> String {
        match self.renderer.to_html(text) {
            Ok(html) => html,
            Err(err) => {
                warn!(error = %err, "markdown conversion failed, degrading to plain text");
                format!("<p>{}</p>\n", escape_html(text))
            }
        }
    }

    fn render_code(&self, language_hint: Option<&str>, body: &str) -> String {
        match self.highlighter.highlight(body, language_hint) {
            Ok(highlighted) => {
                let class_tag = language_hint
                    .map(str::to_owned)
                    .unwrap_or_else(|| language_class(&highlighted.language));
                wrap_code_block(&highlighted.language, &class_tag, &highlighted.html)
            }
            Err(err) => {
                warn!(error = %err, "highlighting failed, degrading to escaped code");
                let label = language_hint.unwrap_or("unknown");
                wrap_code_block(label, label, &escape_html(body))
            }
        }
    }
}

impl Default for ResponseFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Container exposing the resolved language and the copy-code affordance.
/// The copy button reads the code back out of the DOM, so the original text
/// is never embedded a second time.
fn wrap_code_block(language_label: &str, class_tag: &str, inner_html: &str) -> String {
    format!(
        concat!(
            "<div class=\"code-block\">",
            "<div class=\"code-block-header\">",
            "<span class=\"code-block-lang\">{label}</span>",
            "<button class=\"copy-button\" type=\"button\">Copy</button>",
            "</div>",
            "<pre><code class=\"language-{class}\">{inner}</code></pre>",
            "</div>\n",
        ),
        label = escape_html(language_label),
        class = escape_html(class_tag),
        inner = inner_html,
    )
}

/// CSS-class token for a resolved language name ("Plain Text" -> "plain-text").
fn language_class(language: &str) -> String {
    let mut class: String = language
        .to_lowercase()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '+' | '-') {
                c
            } else {
                '-'
            }
        })
        .collect();
    if class.is_empty() {
        class.push_str("unknown");
    }
    class
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html_covers_all_five() {
        assert_eq!(
            escape_html(r#"<a href="x">&'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;&amp;&#39;&lt;/a&gt;"
        );
    }

    #[test]
    fn test_escape_html_identity_on_safe_text() {
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_language_class_slugs_spaces() {
        assert_eq!(language_class("Plain Text"), "plain-text");
        assert_eq!(language_class("C++"), "c++");
    }
}
