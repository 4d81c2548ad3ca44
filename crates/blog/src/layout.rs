use foxfire::html::{body, div, head, html, link, meta, title, Element, HtmlElement};
use foxfire::render::BaseRenderContext;

use crate::config::BlogConfig;
use crate::header::{header, HeaderProps};

/// Optional metadata for the head of a page.
#[derive(Debug, Default, Clone, Copy)]
pub struct PageMeta<'a> {
    pub author: Option<&'a str>,
    pub description: Option<&'a str>,

    /// Written out verbatim.
    pub published_time: Option<&'a str>,
}

pub struct LayoutProps<'a> {
    pub title: &'a str,

    /// The route of the page being rendered.
    pub path: &'a str,

    pub meta: PageMeta<'a>,
    pub children: Vec<Element>,
}

/// The shell shared by every page: the document head, the header, and the
/// content container.
pub fn layout(ctx: &BaseRenderContext, config: &BlogConfig, props: LayoutProps) -> HtmlElement {
    let LayoutProps {
        title: page_title,
        path,
        meta: page_meta,
        children,
    } = props;

    let site_title = ctx.config().title();
    let full_title = format!("{page_title} - {site_title}");

    html()
        .lang("en")
        .child(
            head()
                .child(title().child(&full_title))
                .child(meta().charset("utf-8"))
                .child(meta().http_equiv("x-ua-compatible").content("ie=edge"))
                .child(
                    meta()
                        .name("viewport")
                        .content("width=device-width, initial-scale=1, shrink-to-fit=no"),
                )
                .child(meta().property("og:title").content(&full_title))
                .child(meta().property("og:type").content("article"))
                .child(meta().property("og:url").content(ctx.url_for(path)))
                .child(meta().property("og:image").content(ctx.url_for("/emblem.png")))
                .children(
                    page_meta
                        .description
                        .map(|description| meta().property("og:description").content(description)),
                )
                .children(page_meta.published_time.map(|published_time| {
                    meta()
                        .property("og:article:published_time")
                        .content(published_time)
                }))
                .child(
                    meta()
                        .property("og:article:author")
                        .content(page_meta.author.unwrap_or(&config.author)),
                )
                .child(meta().name("twitter:card").content("summary"))
                .child(meta().name("twitter:title").content(&full_title))
                .child(link().rel("stylesheet").href("/style.css")),
        )
        .child(
            body().child(
                div()
                    .class("main")
                    .child(header(HeaderProps {
                        site_title,
                        links: &config.links,
                    }))
                    .child(div().class("content").children(children)),
            ),
        )
}

#[cfg(test)]
mod tests {
    use foxfire::content::Repository;
    use foxfire::html::p;
    use foxfire::SiteConfig;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    use super::*;

    fn site_config() -> SiteConfig {
        SiteConfig {
            base_url: "https://blog.example.com".to_string(),
            title: Some("Example".to_string()),
            ..Default::default()
        }
    }

    fn render(path: &str, meta: PageMeta) -> String {
        let site_config = site_config();
        let repository = Repository::new();
        let ctx = BaseRenderContext::new(&site_config, &repository);
        let config = BlogConfig {
            links: Vec::new(),
            ..Default::default()
        };

        layout(
            &ctx,
            &config,
            LayoutProps {
                title: "Hello",
                path,
                meta,
                children: vec![p().child("hi").into()],
            },
        )
        .render_to_string()
        .unwrap()
    }

    #[test]
    fn test_layout() {
        assert_snapshot!(render("/articles/foo", PageMeta::default()), @r###"<!DOCTYPE html><html lang="en"><head><title>Hello - Example</title><meta charset="utf-8"><meta http-equiv="x-ua-compatible" content="ie=edge"><meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no"><meta property="og:title" content="Hello - Example"><meta property="og:type" content="article"><meta property="og:url" content="https://blog.example.com/articles/foo"><meta property="og:image" content="https://blog.example.com/emblem.png"><meta property="og:article:author" content="boyned"><meta name="twitter:card" content="summary"><meta name="twitter:title" content="Hello - Example"><link rel="stylesheet" href="/style.css"></head><body><div class="main"><div class="header"><a class="title" href="/">Example</a><div class="links"></div></div><div class="content"><p>hi</p></div></div></body></html>"###);
    }

    #[test]
    fn test_optional_meta() {
        let rendered = render(
            "/",
            PageMeta {
                author: Some("someone"),
                description: Some("A description."),
                published_time: Some("2021-05-01"),
            },
        );

        assert!(rendered
            .contains(r#"<meta property="og:article:published_time" content="2021-05-01">"#));
        assert!(rendered.contains(r#"<meta property="og:description" content="A description.">"#));
        assert!(rendered.contains(r#"<meta property="og:article:author" content="someone">"#));
    }

    #[test]
    fn test_missing_meta_is_omitted() {
        let rendered = render("/", PageMeta::default());

        assert_eq!(rendered.matches("published_time").count(), 0);
        assert_eq!(rendered.matches("og:description").count(), 0);
    }
}
