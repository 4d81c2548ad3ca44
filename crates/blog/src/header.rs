use foxfire::html::{a, div, span, HtmlElement};

use crate::config::Link;

pub struct HeaderProps<'a> {
    pub site_title: &'a str,
    pub links: &'a [Link],
}

/// The site title linking home, followed by the external links.
pub fn header(HeaderProps { site_title, links }: HeaderProps) -> HtmlElement {
    let last = links.len().saturating_sub(1);

    div()
        .class("header")
        .child(a().class("title").href("/").child(site_title))
        .child(
            div()
                .class("links")
                .children(links.iter().enumerate().map(|(index, link)| {
                    span()
                        .child(a().href(&link.url).child(&link.label))
                        .children((index != last).then_some(" | "))
                })),
        )
}
