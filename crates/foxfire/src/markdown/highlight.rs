use syntect::highlighting::{Theme, ThemeSet};
use syntect::html::highlighted_html_for_string;
use syntect::parsing::SyntaxSet;

use crate::html::escape_html;

/// Highlights fenced code blocks with syntect.
#[derive(Debug)]
pub struct SyntaxHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl SyntaxHighlighter {
    /// Returns a new [`SyntaxHighlighter`] using one of syntect's bundled
    /// themes, or `None` if no theme has that name.
    pub fn new(theme: &str) -> Option<Self> {
        let mut theme_set = ThemeSet::load_defaults();
        let theme = theme_set.themes.remove(theme)?;

        Some(Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme,
        })
    }

    /// Highlights `code` as the given language.
    ///
    /// Unknown languages are highlighted as plain text.
    pub fn highlight(&self, code: &str, lang: Option<&str>) -> String {
        let syntax = lang
            .and_then(|lang| self.syntax_set.find_syntax_by_token(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        match highlighted_html_for_string(code, &self.syntax_set, syntax, &self.theme) {
            Ok(html) => html,
            Err(err) => {
                log::warn!("failed to highlight code block: {err}");

                let lang_class = lang
                    .map(|lang| format!(r#" class="language-{}""#, escape_html(lang)))
                    .unwrap_or_default();

                format!("<pre><code{lang_class}>{}</code></pre>\n", escape_html(code))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_theme() {
        assert!(SyntaxHighlighter::new("not-a-theme").is_none());
    }

    #[test]
    fn test_highlight_rust() {
        let highlighter = SyntaxHighlighter::new("InspiredGitHub").unwrap();
        let html = highlighter.highlight("fn main() {}\n", Some("rust"));

        assert!(html.starts_with("<pre"));
        assert!(html.contains("main"));
    }

    #[test]
    fn test_highlight_escapes_unknown_language() {
        let highlighter = SyntaxHighlighter::new("InspiredGitHub").unwrap();
        let html = highlighter.highlight("<not> & html\n", Some("no-such-language"));

        assert!(html.contains("&lt;not&gt; &amp; html"));
    }
}
