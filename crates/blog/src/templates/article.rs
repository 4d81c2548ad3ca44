use foxfire::html::{a, div, h1, header, hr, p, raw, HtmlElement};
use foxfire::render::RenderArticleContext;

use crate::comments::Comments;
use crate::config::BlogConfig;
use crate::layout::{layout, LayoutProps, PageMeta};

pub fn article(ctx: &RenderArticleContext, config: &BlogConfig) -> HtmlElement {
    let article = ctx.article;
    let comments = Comments::new(&config.comments);

    layout(
        ctx,
        config,
        LayoutProps {
            title: article.title,
            path: article.path,
            meta: PageMeta {
                author: article.author,
                description: Some(article.description),
                published_time: Some(article.date),
            },
            children: vec![
                header()
                    .class("article-header")
                    .child(h1().child(article.title))
                    .child(p().child(format!("{} minute read", article.read_time.0)))
                    .into(),
                div().class("article-body").child(raw(article.content)).into(),
                hr().into(),
                a().href("/").child("Back to blog").into(),
                comments.render().into(),
            ],
        },
    )
}
