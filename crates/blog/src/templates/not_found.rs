use foxfire::html::{a, div, h1, HtmlElement};
use foxfire::render::RenderPageContext;

use crate::config::BlogConfig;
use crate::layout::{layout, LayoutProps, PageMeta};

pub fn not_found(ctx: &RenderPageContext, config: &BlogConfig) -> HtmlElement {
    layout(
        ctx,
        config,
        LayoutProps {
            title: "404",
            path: ctx.path,
            meta: PageMeta::default(),
            children: vec![
                h1().child("404 - Page Not Found").into(),
                div()
                    .class("not-found")
                    .child("Try the ")
                    .child(a().href("/").child("home page"))
                    .child(". That exists, I'd hope.")
                    .into(),
            ],
        },
    )
}
