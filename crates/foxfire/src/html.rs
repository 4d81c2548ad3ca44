//! A small builder for HTML documents.
//!
//! Text and attribute values are escaped when rendered. Trusted markup (such
//! as the output of the Markdown pipeline) goes through [`raw`] and is
//! written out verbatim.

use std::fmt::{self, Write};

use indexmap::IndexMap;

/// A node in an HTML tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Html(HtmlElement),
    Text(String),
    Raw(String),
}

impl From<HtmlElement> for Element {
    fn from(value: HtmlElement) -> Self {
        Self::Html(value)
    }
}

impl From<String> for Element {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for Element {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<&String> for Element {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

/// Returns an [`Element`] that is rendered without escaping.
pub fn raw(html: impl Into<String>) -> Element {
    Element::Raw(html.into())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlElement {
    pub tag_name: String,
    pub attrs: IndexMap<String, String>,
    pub children: Vec<Element>,
}

impl HtmlElement {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag_name: tag.into(),
            attrs: IndexMap::new(),
            children: Vec::new(),
        }
    }

    /// Sets the attribute with the given name.
    ///
    /// Passing `None` removes the attribute. An empty value renders as a
    /// boolean attribute (e.g., `async`).
    pub fn attr<V>(mut self, name: impl Into<String>, value: impl Into<Option<V>>) -> Self
    where
        V: Into<String>,
    {
        let name = name.into();
        match value.into() {
            Some(value) => {
                *self.attrs.entry(name).or_default() = value.into();
            }
            None => {
                self.attrs.shift_remove(&name);
            }
        }

        self
    }

    pub fn child(mut self, child: impl Into<Element>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<T>(mut self, children: impl IntoIterator<Item = T>) -> Self
    where
        T: Into<Element>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn render_to_string(&self) -> Result<String, fmt::Error> {
        HtmlRenderer::new().render_to_string(self)
    }

    pub fn is_void(&self) -> bool {
        matches!(
            self.tag_name.as_str(),
            "area"
                | "base"
                | "br"
                | "col"
                | "embed"
                | "hr"
                | "img"
                | "input"
                | "link"
                | "meta"
                | "param"
                | "source"
                | "track"
                | "wbr"
        )
    }
}

macro_rules! attr_methods {
    ($($method_name:ident : $attr_name:expr),*) => {
        impl HtmlElement {
            $(
                pub fn $method_name<V>(self, value: impl Into<Option<V>>) -> Self
                where
                    V: Into<String>,
                {
                    self.attr($attr_name, value)
                }
            )*
        }
    }
}

attr_methods! {
    id: "id",
    class: "class",
    title: "title",
    lang: "lang",
    href: "href",
    src: "src",
    rel: "rel",
    name: "name",
    content: "content",
    property: "property",
    charset: "charset",
    http_equiv: "http-equiv"
}

macro_rules! elements {
    ($($tag_name:ident),*) => {
        $(
            pub fn $tag_name() -> HtmlElement {
                HtmlElement::new(stringify!($tag_name))
            }
        )*
    }
}

elements!(
    html, head, body, title, meta, link, style, script, noscript, header, nav, article,
    div, span, p, a, h1, h2, h3, hr, br
);

/// Walks an HTML tree.
pub trait Visitor {
    type Error;

    fn visit(&mut self, element: &HtmlElement) -> Result<(), Self::Error>;

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error>;

    fn visit_raw(&mut self, html: &str) -> Result<(), Self::Error>;

    fn visit_attr(&mut self, name: &str, value: &str) -> Result<(), Self::Error>;

    fn visit_children(&mut self, children: &[Element]) -> Result<(), Self::Error> {
        for child in children {
            match child {
                Element::Html(element) => self.visit(element)?,
                Element::Text(text) => self.visit_text(text)?,
                Element::Raw(html) => self.visit_raw(html)?,
            }
        }

        Ok(())
    }
}

/// A renderer for [`HtmlElement`]s to a string of HTML.
#[derive(Default)]
pub struct HtmlRenderer {
    html: String,
}

impl HtmlRenderer {
    /// Returns a new [`HtmlRenderer`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Renders the given [`HtmlElement`] to a string of HTML.
    pub fn render_to_string(mut self, element: &HtmlElement) -> Result<String, fmt::Error> {
        self.visit(element)?;

        Ok(self.html)
    }
}

impl Visitor for HtmlRenderer {
    type Error = fmt::Error;

    fn visit(&mut self, element: &HtmlElement) -> Result<(), Self::Error> {
        if element.tag_name == "html" {
            write!(&mut self.html, "<!DOCTYPE html>")?;
        }

        write!(&mut self.html, "<{}", element.tag_name)?;

        for (name, value) in &element.attrs {
            self.visit_attr(name, value)?;
        }

        write!(&mut self.html, ">")?;

        if element.is_void() {
            return Ok(());
        }

        self.visit_children(&element.children)?;

        write!(&mut self.html, "</{}>", element.tag_name)?;

        Ok(())
    }

    fn visit_text(&mut self, text: &str) -> Result<(), Self::Error> {
        write!(&mut self.html, "{}", escape_html(text))
    }

    fn visit_raw(&mut self, html: &str) -> Result<(), Self::Error> {
        self.html.push_str(html);

        Ok(())
    }

    fn visit_attr(&mut self, name: &str, value: &str) -> Result<(), Self::Error> {
        write!(&mut self.html, " {name}")?;

        if !value.is_empty() {
            write!(&mut self.html, r#"="{}""#, escape_html(value))?;
        }

        Ok(())
    }
}

/// Escapes the characters that are significant in HTML text and
/// double-quoted attribute values.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let element = div()
            .class("outer")
            .child(div().class("inner").child(h1().class("heading").child("Hi")));

        assert_snapshot!(
            element.render_to_string().unwrap(),
            @r#"<div class="outer"><div class="inner"><h1 class="heading">Hi</h1></div></div>"#
        );
    }

    #[test]
    fn test_render_document() {
        let element = html()
            .lang("en")
            .child(head().child(meta().charset("utf-8")))
            .child(body().child(hr()));

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<!DOCTYPE html><html lang="en"><head><meta charset="utf-8"></head><body><hr></body></html>"#
        );
    }

    #[test]
    fn test_text_and_attributes_are_escaped() {
        let element = a()
            .href("/search?a=1&b=2")
            .title(r#"say "hi""#)
            .child("<b>bold</b> & friends");

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<a href="/search?a=1&amp;b=2" title="say &quot;hi&quot;">&lt;b&gt;bold&lt;/b&gt; &amp; friends</a>"#
        );
    }

    #[test]
    fn test_raw_is_not_escaped() {
        let element = div().child(raw("<p>hello</p>"));

        assert_eq!(
            element.render_to_string().unwrap(),
            "<div><p>hello</p></div>"
        );
    }

    #[test]
    fn test_boolean_and_removed_attributes() {
        let element = script()
            .src("https://example.com/client.js")
            .attr("async", "")
            .class("gone")
            .class::<String>(None);

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<script src="https://example.com/client.js" async></script>"#
        );
    }

    #[test]
    fn test_children_from_option() {
        let description: Option<&str> = None;
        let element = head()
            .children(description.map(|description| meta().content(description)))
            .children(Some(meta().content("kept")));

        assert_eq!(
            element.render_to_string().unwrap(),
            r#"<head><meta content="kept"></head>"#
        );
    }
}
