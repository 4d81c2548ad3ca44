use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::content::{
    excerpt, from_toml_datetime, parse_front_matter, ArticleDate, FileInfo, FrontMatterError,
    InvalidDateError, ReadTime, ReadingMetrics, WordCount, AVERAGE_ADULT_WPM, EXCERPT_LENGTH,
};
use crate::markdown::{MarkdownError, MarkdownRenderer};
use crate::permalink::Permalink;
use crate::SiteConfig;

/// The route prefix every article is served under.
pub const ARTICLES_PATH: &str = "/articles";

#[derive(Debug)]
pub struct Article {
    pub meta: ArticleFrontMatter,
    pub file: FileInfo,
    pub slug: String,
    /// The route of the article (e.g., `/articles/hello-world`).
    pub path: String,
    pub permalink: Permalink,
    pub date: ArticleDate,
    pub raw_content: String,
    /// The rendered HTML of the body.
    pub content: String,
    pub excerpt: String,
    pub word_count: WordCount,
    pub read_time: ReadTime,
}

#[derive(Debug, Deserialize)]
pub struct ArticleFrontMatter {
    pub title: String,
    #[serde(deserialize_with = "from_toml_datetime")]
    pub date: String,
    pub slug: Option<String>,
    pub description: Option<String>,
    pub author: Option<String>,
}

#[derive(Error, Debug)]
pub enum ParseArticleError {
    #[error("failed to read '{filepath}': {err}")]
    Io {
        filepath: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("invalid front matter in '{filepath}': {err}")]
    InvalidFrontMatter {
        filepath: PathBuf,
        #[source]
        err: FrontMatterError,
    },

    #[error("invalid date in '{filepath}': {err}")]
    InvalidDate {
        filepath: PathBuf,
        #[source]
        err: InvalidDateError,
    },

    #[error("could not derive a slug for '{filepath}'")]
    EmptySlug { filepath: PathBuf },

    #[error("failed to render Markdown in '{filepath}': {err}")]
    Markdown {
        filepath: PathBuf,
        #[source]
        err: MarkdownError,
    },

    #[error("invalid permalink for '{filepath}': {err}")]
    Permalink {
        filepath: PathBuf,
        #[source]
        err: url::ParseError,
    },
}

impl Article {
    pub fn from_path(
        root_path: impl AsRef<Path>,
        path: impl AsRef<Path>,
        config: &SiteConfig,
        markdown: &MarkdownRenderer,
    ) -> Result<Self, ParseArticleError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| ParseArticleError::Io {
            filepath: path.to_owned(),
            err,
        })?;

        Self::parse(&contents, root_path, path, config, markdown)
    }

    pub fn parse(
        text: &str,
        root_path: impl AsRef<Path>,
        filepath: &Path,
        config: &SiteConfig,
        markdown: &MarkdownRenderer,
    ) -> Result<Self, ParseArticleError> {
        let (front_matter, content) =
            parse_front_matter::<ArticleFrontMatter>(text).map_err(|err| {
                ParseArticleError::InvalidFrontMatter {
                    filepath: filepath.to_owned(),
                    err,
                }
            })?;

        let date =
            ArticleDate::parse(&front_matter.date).map_err(|err| ParseArticleError::InvalidDate {
                filepath: filepath.to_owned(),
                err,
            })?;

        let file = FileInfo::new(root_path, filepath);

        let slug = derive_slug(&file, front_matter.slug.as_deref()).ok_or_else(|| {
            ParseArticleError::EmptySlug {
                filepath: filepath.to_owned(),
            }
        })?;

        let path = format!("{ARTICLES_PATH}/{slug}");
        let permalink =
            Permalink::from_path(config, &path).map_err(|err| ParseArticleError::Permalink {
                filepath: filepath.to_owned(),
                err,
            })?;

        let rendered = markdown
            .render(content)
            .map_err(|err| ParseArticleError::Markdown {
                filepath: filepath.to_owned(),
                err,
            })?;

        let ReadingMetrics {
            word_count,
            read_time,
        } = ReadingMetrics::for_content(&rendered.plain_text, AVERAGE_ADULT_WPM);

        Ok(Self {
            excerpt: excerpt(&rendered.plain_text, EXCERPT_LENGTH),
            meta: front_matter,
            file,
            slug,
            path,
            permalink,
            date,
            raw_content: content.to_string(),
            content: rendered.html,
            word_count,
            read_time,
        })
    }

    /// The summary used for the page description: the front matter's
    /// `description` when set, otherwise the excerpt.
    pub fn description(&self) -> &str {
        self.meta.description.as_deref().unwrap_or(&self.excerpt)
    }
}

/// Derives a slug from the file's location in the content directory.
///
/// `blog/hello-world.md` becomes `blog/hello-world`, and `hello-world/index.md`
/// becomes `hello-world`. A slug in the front matter replaces the last
/// segment.
fn derive_slug(file: &FileInfo, slug_override: Option<&str>) -> Option<String> {
    let mut segments = file.components.clone();

    if file.stem != "index" {
        segments.push(file.stem.clone());
    }

    if let Some(slug_override) = slug_override {
        segments.pop();
        segments.push(slug_override.to_string());
    }

    let segments = segments
        .iter()
        .map(|segment| slug::slugify(segment))
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>();

    if segments.is_empty() {
        return None;
    }

    Some(segments.join("/"))
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn config() -> SiteConfig {
        SiteConfig {
            base_url: "https://blog.example.com".to_string(),
            ..Default::default()
        }
    }

    fn parse(text: &str, filepath: &str) -> Result<Article, ParseArticleError> {
        let markdown = MarkdownRenderer::new("InspiredGitHub").unwrap();

        Article::parse(text, "content", Path::new(filepath), &config(), &markdown)
    }

    #[test]
    fn test_parse_article() {
        let text = indoc! {"
            ---
            title: Hello, world
            date: 2021-05-01
            ---

            Welcome to *the* blog.
        "};

        let article = parse(text, "content/hello-world.md").unwrap();

        assert_eq!(article.meta.title, "Hello, world");
        assert_eq!(article.date.as_str(), "2021-05-01");
        assert_eq!(article.slug, "hello-world");
        assert_eq!(article.path, "/articles/hello-world");
        assert_eq!(
            article.permalink.as_str(),
            "https://blog.example.com/articles/hello-world"
        );
        assert_eq!(article.content, "<p>Welcome to <em>the</em> blog.</p>\n");
        assert_eq!(article.excerpt, "Welcome to the blog.");
        assert_eq!(article.description(), "Welcome to the blog.");
        assert_eq!(article.word_count, WordCount(4));
        assert_eq!(article.read_time, ReadTime(1));
    }

    #[test]
    fn test_table_words_are_counted_separately() {
        let text = indoc! {"
            ---
            title: Linter
            date: 2021-02-01
            ---

            Linters walk trees.

            | Rule | Checks |
            | --- | --- |
            | `unused_variable` | unread locals |
        "};

        let article = parse(text, "content/linter.md").unwrap();

        assert_eq!(
            article.excerpt,
            "Linters walk trees. Rule Checks unused_variable unread locals"
        );
        assert_eq!(article.word_count, WordCount(8));
    }

    #[test]
    fn test_front_matter_description_wins() {
        let text = indoc! {r#"
            +++
            title = "Described"
            date = 2021-05-01
            description = "A short summary."
            +++

            Some body text.
        "#};

        let article = parse(text, "content/described.md").unwrap();

        assert_eq!(article.description(), "A short summary.");
        assert_eq!(article.excerpt, "Some body text.");
    }

    #[test]
    fn test_missing_front_matter_is_an_error() {
        let result = parse("Just text.\n", "content/nope.md");

        assert!(matches!(
            result,
            Err(ParseArticleError::InvalidFrontMatter { .. })
        ));
    }

    #[test]
    fn test_missing_title_is_an_error() {
        let result = parse("---\ndate: 2021-05-01\n---\nBody\n", "content/nope.md");

        assert!(matches!(
            result,
            Err(ParseArticleError::InvalidFrontMatter { .. })
        ));
    }

    #[test]
    fn test_invalid_date_is_an_error() {
        let result = parse("---\ntitle: Nope\ndate: someday\n---\nBody\n", "content/nope.md");

        assert!(matches!(result, Err(ParseArticleError::InvalidDate { .. })));
    }

    #[test]
    fn test_derive_slug() {
        let slug = |path: &str, slug_override: Option<&str>| {
            derive_slug(&FileInfo::new("content", path), slug_override)
        };

        assert_eq!(slug("content/hello-world.md", None), Some("hello-world".into()));
        assert_eq!(slug("content/Hello World.md", None), Some("hello-world".into()));
        assert_eq!(slug("content/trip/index.md", None), Some("trip".into()));
        assert_eq!(
            slug("content/2021/recap.md", None),
            Some("2021/recap".into())
        );
        assert_eq!(
            slug("content/2021/recap.md", Some("year-in-review")),
            Some("2021/year-in-review".into())
        );
        assert_eq!(slug("content/index.md", None), None);
        assert_eq!(slug("content/index.md", Some("home")), Some("home".into()));
    }

    #[test]
    fn test_empty_slug_is_an_error() {
        let result = parse("---\ntitle: Root\ndate: 2021-05-01\n---\n", "content/index.md");

        assert!(matches!(result, Err(ParseArticleError::EmptySlug { .. })));
    }
}
