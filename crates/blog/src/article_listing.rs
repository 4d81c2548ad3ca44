use foxfire::html::{a, article, HtmlElement};
use foxfire::render::ArticleToRender;

/// A single row on the home page: `<title> - <date>`, linking to the article.
pub fn article_listing(listing: &ArticleToRender) -> HtmlElement {
    article().class("article-listing").child(
        a().class("article-title")
            .href(listing.path)
            .child(format!("{} - {}", listing.title, listing.date)),
    )
}
