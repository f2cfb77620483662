use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::{styled_line_to_highlighted_html, IncludeBackground};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use crate::error::{ChatError, Result};

/// One highlighted code body: span markup plus the language the highlighter
/// settled on (fence tag, first-line detection, or "Plain Text").
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightedCode {
    pub language: String,
    pub html: String,
}

/// Syntax-highlighting capability the formatter renders code blocks through.
/// Implementations must escape the code text exactly once while emitting
/// markup.
pub trait CodeHighlighter: Send + Sync {
    fn highlight(&self, code: &str, language_hint: Option<&str>) -> Result<HighlightedCode>;
}

/// Production highlighter: syntect with the default syntax set and an
/// inline-styled theme, so the sandboxed surface needs no stylesheet.
pub struct SyntectHighlighter {
    syntaxes: SyntaxSet,
    theme: Theme,
}

impl SyntectHighlighter {
    pub fn new() -> Self {
        Self::with_theme("base16-ocean.dark")
    }

    pub fn with_theme(theme_name: &str) -> Self {
        let mut themes = ThemeSet::load_defaults().themes;
        let theme = themes
            .remove(theme_name)
            .or_else(|| themes.into_values().next())
            .unwrap_or_default();
        Self {
            syntaxes: SyntaxSet::load_defaults_newlines(),
            theme,
        }
    }
}

impl Default for SyntectHighlighter {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeHighlighter for SyntectHighlighter {
    fn highlight(&self, code: &str, language_hint: Option<&str>) -> Result<HighlightedCode> {
        let syntax = language_hint
            .and_then(|token| self.syntaxes.find_syntax_by_token(token))
            .or_else(|| self.syntaxes.find_syntax_by_first_line(code))
            .unwrap_or_else(|| self.syntaxes.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut html = String::with_capacity(code.len() * 2);
        for line in LinesWithEndings::from(code) {
            let regions = highlighter
                .highlight_line(line, &self.syntaxes)
                .map_err(|e| ChatError::Render(e.to_string()))?;
            let rendered = styled_line_to_highlighted_html(&regions, IncludeBackground::No)
                .map_err(|e| ChatError::Render(e.to_string()))?;
            html.push_str(&rendered);
        }

        Ok(HighlightedCode {
            language: syntax.name.clone(),
            html,
        })
    }
}
