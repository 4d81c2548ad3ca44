mod custom_blocks;
mod highlight;

use std::collections::HashMap;

use pulldown_cmark::{self as md, CodeBlockKind, Event, Tag};
use thiserror::Error;

pub use custom_blocks::*;
pub use highlight::*;

#[derive(Error, Debug)]
pub enum MarkdownError {
    #[error("unknown syntax highlighting theme: {0}")]
    UnknownTheme(String),

    #[error("failed to parse custom blocks: {0}")]
    CustomBlockSyntax(String),

    #[error("unknown custom block: {0}")]
    UnknownCustomBlock(String),

    #[error("custom block '{0}' requires a title")]
    MissingCustomBlockTitle(String),
}

/// The output of rendering a Markdown document.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct RenderedMarkdown {
    pub html: String,

    /// The text content of the document, one block per line.
    pub plain_text: String,
}

/// Renders Markdown to HTML, highlighting fenced code and expanding custom
/// blocks.
#[derive(Debug)]
pub struct MarkdownRenderer {
    options: md::Options,
    highlighter: SyntaxHighlighter,
    custom_blocks: HashMap<String, CustomBlock>,
}

impl MarkdownRenderer {
    /// Returns a new [`MarkdownRenderer`] with the `info` custom block
    /// registered.
    pub fn new(theme: &str) -> Result<Self, MarkdownError> {
        let mut options = md::Options::empty();
        options.insert(md::Options::ENABLE_TABLES);
        options.insert(md::Options::ENABLE_FOOTNOTES);
        options.insert(md::Options::ENABLE_STRIKETHROUGH);
        options.insert(md::Options::ENABLE_TASKLISTS);
        options.insert(md::Options::ENABLE_HEADING_ATTRIBUTES);

        let highlighter = SyntaxHighlighter::new(theme)
            .ok_or_else(|| MarkdownError::UnknownTheme(theme.to_string()))?;

        Ok(Self {
            options,
            highlighter,
            custom_blocks: HashMap::new(),
        }
        .with_custom_block("info", CustomBlock::new("info")))
    }

    pub fn with_custom_block(mut self, name: impl Into<String>, block: CustomBlock) -> Self {
        self.custom_blocks.insert(name.into(), block);
        self
    }

    pub fn render(&self, text: &str) -> Result<RenderedMarkdown, MarkdownError> {
        let (document, calls) = parse_document(text)
            .map_err(|err| MarkdownError::CustomBlockSyntax(err.to_string()))?;

        let RenderedMarkdown {
            mut html,
            mut plain_text,
        } = self.render_commonmark(&document);

        for (index, call) in calls.into_iter().enumerate() {
            let block = self
                .custom_blocks
                .get(&call.name)
                .ok_or_else(|| MarkdownError::UnknownCustomBlock(call.name.clone()))?;

            if block.title == BlockTitle::Required && call.title.is_none() {
                return Err(MarkdownError::MissingCustomBlockTitle(call.name));
            }

            let body = self.render(&call.body)?;
            let placeholder = placeholder(index);

            html = html.replace(
                &format!("<p>{placeholder}</p>"),
                &block.render(call.title.as_deref(), &body.html),
            );

            let block_text = match call.title {
                Some(title) => format!("{title}\n{}", body.plain_text),
                None => body.plain_text,
            };
            plain_text = plain_text.replace(&placeholder, block_text.trim_end());
        }

        Ok(RenderedMarkdown { html, plain_text })
    }

    fn render_commonmark(&self, text: &str) -> RenderedMarkdown {
        let parser = md::Parser::new_ext(text, self.options);

        let mut events = Vec::new();
        let mut plain_text = String::new();
        let mut code_block: Option<(Option<String>, String)> = None;

        for event in parser {
            match event {
                Event::Start(Tag::CodeBlock(kind)) => {
                    let lang = match kind {
                        CodeBlockKind::Fenced(info) => {
                            info.split_whitespace().next().map(str::to_string)
                        }
                        CodeBlockKind::Indented => None,
                    };

                    code_block = Some((lang, String::new()));
                }
                Event::End(Tag::CodeBlock(_)) => {
                    if let Some((lang, code)) = code_block.take() {
                        push_block_text(&mut plain_text, &code);
                        events.push(Event::Html(
                            self.highlighter.highlight(&code, lang.as_deref()).into(),
                        ));
                    }
                }
                Event::Text(text) => match code_block.as_mut() {
                    Some((_, code)) => code.push_str(&text),
                    None => {
                        plain_text.push_str(&text);
                        events.push(Event::Text(text));
                    }
                },
                Event::Code(code) => {
                    plain_text.push_str(&code);
                    events.push(Event::Code(code));
                }
                Event::SoftBreak | Event::HardBreak => {
                    plain_text.push(' ');
                    events.push(event);
                }
                Event::End(tag) => {
                    if is_block(&tag) {
                        end_block(&mut plain_text);
                    } else if matches!(tag, Tag::TableCell) {
                        plain_text.push(' ');
                    }

                    events.push(Event::End(tag));
                }
                event => events.push(event),
            }
        }

        let mut html = String::with_capacity(text.len() * 3 / 2);
        md::html::push_html(&mut html, events.into_iter());

        RenderedMarkdown {
            html,
            plain_text: plain_text.trim_end().to_string(),
        }
    }
}

fn is_block(tag: &Tag) -> bool {
    matches!(
        tag,
        Tag::Paragraph
            | Tag::Heading(..)
            | Tag::BlockQuote
            | Tag::Item
            | Tag::TableRow
            | Tag::TableHead
            | Tag::FootnoteDefinition(_)
    )
}

fn end_block(plain_text: &mut String) {
    plain_text.truncate(plain_text.trim_end_matches(' ').len());

    if !plain_text.is_empty() && !plain_text.ends_with('\n') {
        plain_text.push('\n');
    }
}

fn push_block_text(plain_text: &mut String, text: &str) {
    end_block(plain_text);
    plain_text.push_str(text.trim_end());
    plain_text.push('\n');
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn renderer() -> MarkdownRenderer {
        MarkdownRenderer::new("InspiredGitHub").unwrap()
    }

    #[test]
    fn test_markdown() {
        let text = indoc! {"
            # Hello, world!

            Here are some items:
            - Apple
            - Banana
        "};

        let rendered = renderer().render(text).unwrap();

        assert_eq!(
            rendered.html,
            indoc! {"
                <h1>Hello, world!</h1>
                <p>Here are some items:</p>
                <ul>
                <li>Apple</li>
                <li>Banana</li>
                </ul>
            "}
        );
        assert_eq!(
            rendered.plain_text,
            "Hello, world!\nHere are some items:\nApple\nBanana"
        );
    }

    #[test]
    fn test_table_cells_are_separate_words() {
        let text = indoc! {"
            | Rule | Checks |
            | --- | --- |
            | alpha | beta |
        "};

        let rendered = renderer().render(text).unwrap();

        assert_eq!(rendered.plain_text, "Rule Checks\nalpha beta");
    }

    #[test]
    fn test_unknown_theme() {
        assert!(matches!(
            MarkdownRenderer::new("nope"),
            Err(MarkdownError::UnknownTheme(_))
        ));
    }

    #[test]
    fn test_fenced_code_is_highlighted() {
        let text = indoc! {"
            ```rust
            let answer = 42;
            ```
        "};

        let rendered = renderer().render(text).unwrap();

        assert!(rendered.html.starts_with("<pre style="));
        assert!(!rendered.html.contains("<code"));
        assert_eq!(rendered.plain_text, "let answer = 42;");
    }

    #[test]
    fn test_info_block() {
        let text = indoc! {"
            Intro.

            [[info | Note]]
            | This is **important**.
        "};

        let rendered = renderer().render(text).unwrap();

        assert_eq!(
            rendered.html,
            concat!(
                "<p>Intro.</p>\n",
                r#"<div class="custom-block info"><div class="custom-block-heading">Note</div>"#,
                r#"<div class="custom-block-body"><p>This is <strong>important</strong>.</p>"#,
                "\n</div></div>\n"
            )
        );
        assert_eq!(rendered.plain_text, "Intro.\nNote\nThis is important.");
    }

    #[test]
    fn test_info_block_without_title() {
        let rendered = renderer().render("[[info]]\n| Plain.\n").unwrap();

        assert_eq!(
            rendered.html,
            "<div class=\"custom-block info\"><div class=\"custom-block-body\"><p>Plain.</p>\n</div></div>\n"
        );
    }

    #[test]
    fn test_unknown_custom_block() {
        let result = renderer().render("[[warning | Careful]]\n| Hot.\n");

        assert!(matches!(
            result,
            Err(MarkdownError::UnknownCustomBlock(name)) if name == "warning"
        ));
    }

    #[test]
    fn test_required_title() {
        let renderer = renderer().with_custom_block(
            "warning",
            CustomBlock::new("warning").title(BlockTitle::Required),
        );

        assert!(matches!(
            renderer.render("[[warning]]\n| Hot.\n"),
            Err(MarkdownError::MissingCustomBlockTitle(_))
        ));
        assert!(renderer.render("[[warning | Careful]]\n| Hot.\n").is_ok());
    }
}
