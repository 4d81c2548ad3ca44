use std::cmp::Ordering;

use crate::content::Article;

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy)]
pub enum SortBy {
    Date,
    Title,
    Slug,
}

#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone, Copy, Default)]
pub enum SortOrder {
    Ascending,
    #[default]
    Descending,
}

/// Sorts the given articles in place.
///
/// Articles that compare equal on `sort_by` are ordered by slug, ascending,
/// regardless of `order`, so the result never depends on the input order.
pub fn sort_articles_by(sort_by: SortBy, order: SortOrder, articles: &mut [&Article]) {
    articles.sort_unstable_by(|a, b| {
        let ord = match sort_by {
            SortBy::Date => a.date.cmp(&b.date),
            SortBy::Title => a.meta.title.cmp(&b.meta.title),
            SortBy::Slug => a.slug.cmp(&b.slug),
        };

        let ord = match order {
            SortOrder::Ascending => ord,
            SortOrder::Descending => ord.reverse(),
        };

        match ord {
            Ordering::Equal => a.slug.cmp(&b.slug),
            ord => ord,
        }
    });
}
