use std::ops::Deref;

use serde::Deserialize;

use crate::content::{Article, ArticleSource, ReadTime, SortBy, SortOrder, WordCount};
use crate::permalink::Permalink;
use crate::SiteConfig;

/// The context shared by every template.
pub struct BaseRenderContext<'a> {
    pub(crate) config: &'a SiteConfig,
    pub(crate) articles: &'a dyn ArticleSource,
}

impl<'a> BaseRenderContext<'a> {
    pub fn new(config: &'a SiteConfig, articles: &'a dyn ArticleSource) -> Self {
        Self { config, articles }
    }

    pub fn config(&self) -> &'a SiteConfig {
        self.config
    }

    pub fn base_url(&self) -> &'a str {
        &self.config.base_url
    }

    /// Returns the absolute URL for the given path on this site.
    ///
    /// The base URL is validated when the site is loaded.
    pub fn url_for(&self, path: &str) -> String {
        Permalink::from_path(self.config, path)
            .map(|permalink| permalink.to_string())
            .unwrap_or_else(|_| {
                format!(
                    "{}/{}",
                    self.config.base_url.trim_end_matches('/'),
                    path.trim_start_matches('/')
                )
            })
    }

    pub fn list_articles(&self, sort_by: SortBy, order: SortOrder) -> Vec<ArticleToRender<'a>> {
        self.articles
            .list_articles(sort_by, order)
            .into_iter()
            .map(ArticleToRender::from_article)
            .collect()
    }

    pub fn get_article(&self, slug: &str) -> Option<ArticleToRender<'a>> {
        self.articles
            .get_article_by_slug(slug)
            .map(ArticleToRender::from_article)
    }

    pub fn extra<'de, T>(&self) -> Result<T, toml::de::Error>
    where
        T: Deserialize<'de>,
    {
        self.config.extra()
    }
}

/// The context for a standalone page, such as the home page or the 404 page.
pub struct RenderPageContext<'a> {
    pub(crate) base: BaseRenderContext<'a>,
    /// The route of the page (e.g., `/` or `/404`).
    pub path: &'a str,
    pub permalink: String,
}

impl<'a> Deref for RenderPageContext<'a> {
    type Target = BaseRenderContext<'a>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<'a> RenderPageContext<'a> {
    pub fn new(base: BaseRenderContext<'a>, path: &'a str) -> Self {
        let permalink = base.url_for(path);

        Self {
            base,
            path,
            permalink,
        }
    }
}

pub struct RenderArticleContext<'a> {
    pub(crate) base: BaseRenderContext<'a>,
    pub article: ArticleToRender<'a>,
}

impl<'a> Deref for RenderArticleContext<'a> {
    type Target = BaseRenderContext<'a>;

    fn deref(&self) -> &Self::Target {
        &self.base
    }
}

impl<'a> RenderArticleContext<'a> {
    pub fn new(base: BaseRenderContext<'a>, article: ArticleToRender<'a>) -> Self {
        Self { base, article }
    }
}

/// The fields of an [`Article`] that templates can render.
#[derive(Debug, Clone, Copy)]
pub struct ArticleToRender<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub path: &'a str,
    pub permalink: &'a str,
    /// The date as written in the front matter.
    pub date: &'a str,
    pub author: Option<&'a str>,
    pub description: &'a str,
    pub excerpt: &'a str,
    /// The rendered body. Trusted HTML.
    pub content: &'a str,
    pub word_count: WordCount,
    pub read_time: ReadTime,
}

impl<'a> ArticleToRender<'a> {
    pub fn from_article(article: &'a Article) -> Self {
        Self {
            title: &article.meta.title,
            slug: &article.slug,
            path: &article.path,
            permalink: article.permalink.as_str(),
            date: article.date.as_str(),
            author: article.meta.author.as_deref(),
            description: article.description(),
            excerpt: &article.excerpt,
            content: &article.content,
            word_count: article.word_count,
            read_time: article.read_time,
        }
    }
}
