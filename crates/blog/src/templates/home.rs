use foxfire::content::{SortBy, SortOrder};
use foxfire::html::{Element, HtmlElement};
use foxfire::render::RenderPageContext;

use crate::article_listing::article_listing;
use crate::config::BlogConfig;
use crate::layout::{layout, LayoutProps, PageMeta};

pub fn home(ctx: &RenderPageContext, config: &BlogConfig) -> HtmlElement {
    let listings: Vec<Element> = ctx
        .list_articles(SortBy::Date, SortOrder::Descending)
        .iter()
        .map(|article| article_listing(article).into())
        .collect();

    layout(
        ctx,
        config,
        LayoutProps {
            title: "home",
            path: ctx.path,
            meta: PageMeta::default(),
            children: listings,
        },
    )
}
