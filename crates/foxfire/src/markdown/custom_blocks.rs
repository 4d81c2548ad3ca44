mod parser;

use crate::html::escape_html;

pub(crate) use parser::parse_document;

const PLACEHOLDER_PREFIX: &str = "@@foxfire-custom-block-";

pub(crate) fn placeholder(index: usize) -> String {
    format!("{PLACEHOLDER_PREFIX}{index}@@")
}

/// Whether a custom block accepts a title.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Default)]
pub enum BlockTitle {
    #[default]
    Optional,
    Required,
}

/// A callout block written as `[[name | title]]` followed by `|`-prefixed
/// lines of Markdown.
#[derive(Debug, Clone)]
pub struct CustomBlock {
    /// The CSS classes added after `custom-block` on the wrapper.
    pub classes: String,
    pub title: BlockTitle,
}

impl CustomBlock {
    pub fn new(classes: impl Into<String>) -> Self {
        Self {
            classes: classes.into(),
            title: BlockTitle::default(),
        }
    }

    pub fn title(mut self, title: BlockTitle) -> Self {
        self.title = title;
        self
    }

    pub(crate) fn render(&self, title: Option<&str>, body_html: &str) -> String {
        let heading = title
            .map(|title| {
                format!(
                    r#"<div class="custom-block-heading">{}</div>"#,
                    escape_html(title)
                )
            })
            .unwrap_or_default();

        format!(
            r#"<div class="custom-block {}">{heading}<div class="custom-block-body">{body_html}</div></div>"#,
            escape_html(&self.classes)
        )
    }
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) struct CustomBlockCall {
    pub name: String,
    pub title: Option<String>,
    pub body: String,
}
