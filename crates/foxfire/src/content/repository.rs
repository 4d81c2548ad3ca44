use std::path::PathBuf;

use thiserror::Error;

use crate::content::{sort_articles_by, Article, Articles, SortBy, SortOrder};

/// Read-only access to the articles of a site.
pub trait ArticleSource {
    /// Returns every article, sorted by the given key.
    fn list_articles(&self, sort_by: SortBy, order: SortOrder) -> Vec<&Article>;

    fn get_article_by_slug(&self, slug: &str) -> Option<&Article>;
}

#[derive(Error, Debug)]
#[error("duplicate slug '{slug}' used by '{existing}' and '{duplicate}'")]
pub struct DuplicateSlugError {
    pub slug: String,
    pub existing: PathBuf,
    pub duplicate: PathBuf,
}

/// A repository for the articles of a site.
#[derive(Debug, Default)]
pub struct Repository {
    articles: Articles,
}

impl Repository {
    /// Returns a new, empty [`Repository`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the given [`Article`] to the repository.
    ///
    /// Fails if another article already uses the same slug.
    pub fn add_article(&mut self, article: Article) -> Result<(), DuplicateSlugError> {
        if let Some(existing) = self.articles.get(&article.slug) {
            return Err(DuplicateSlugError {
                slug: article.slug,
                existing: existing.file.path.clone(),
                duplicate: article.file.path,
            });
        }

        self.articles.insert(article.slug.clone(), article);

        Ok(())
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }
}

impl ArticleSource for Repository {
    fn list_articles(&self, sort_by: SortBy, order: SortOrder) -> Vec<&Article> {
        let mut articles = self.articles.values().collect::<Vec<_>>();
        sort_articles_by(sort_by, order, &mut articles);
        articles
    }

    fn get_article_by_slug(&self, slug: &str) -> Option<&Article> {
        self.articles.get(slug)
    }
}
