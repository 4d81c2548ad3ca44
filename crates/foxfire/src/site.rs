use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use rayon::prelude::*;
use thiserror::Error;
use walkdir::WalkDir;

use crate::content::{
    Article, ArticleSource, DuplicateSlugError, ParseArticleError, Repository, SortBy, SortOrder,
};
use crate::html::HtmlElement;
use crate::markdown::{MarkdownError, MarkdownRenderer};
use crate::render::{ArticleToRender, BaseRenderContext, RenderArticleContext, RenderPageContext};
use crate::storage::{DiskStorage, Store};
use crate::{LoadConfigError, SiteConfig};

/// The route of the home page.
pub const HOME_PATH: &str = "/";

/// The route of the not-found page.
pub const NOT_FOUND_PATH: &str = "/404";

pub type RenderPage = Arc<dyn Fn(&RenderPageContext) -> HtmlElement + Send + Sync>;

pub type RenderArticle = Arc<dyn Fn(&RenderArticleContext) -> HtmlElement + Send + Sync>;

struct Templates {
    pub home: RenderPage,
    pub article: RenderArticle,
    pub not_found: RenderPage,
}

#[derive(Error, Debug)]
pub enum LoadSiteError {
    #[error("failed to load config: {0}")]
    Config(#[from] LoadConfigError),

    #[error("failed to set up Markdown rendering: {0}")]
    Markdown(#[from] MarkdownError),

    #[error("failed to walk content directory: {0}")]
    Io(#[from] walkdir::Error),

    #[error("failed to parse article: {0}")]
    ParseArticle(#[from] ParseArticleError),

    #[error(transparent)]
    DuplicateSlug(#[from] DuplicateSlugError),
}

#[derive(Error, Debug)]
pub enum RenderSiteError {
    #[error("the site must be loaded before it is rendered")]
    NotLoaded,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to walk directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("render error: {0}")]
    Render(#[from] std::fmt::Error),

    #[error("no article with slug '{0}'")]
    ArticleNotFound(String),

    #[error("failed to compile Sass '{filepath}': {message}")]
    Sass { filepath: PathBuf, message: String },

    #[error("storage error: {0}")]
    Storage(Box<dyn std::error::Error + Send + Sync>),
}

impl RenderSiteError {
    fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Box::new(err))
    }
}

struct BuildSiteParams {
    root_path: PathBuf,
    config: Option<SiteConfig>,
    sass_path: Option<PathBuf>,
    templates: Templates,
}

pub struct Site {
    root_path: PathBuf,
    content_path: PathBuf,
    static_path: PathBuf,
    sass_path: Option<PathBuf>,
    output_path: PathBuf,
    config: Option<SiteConfig>,
    templates: Templates,
    repository: Repository,
}

impl Site {
    pub fn builder() -> SiteBuilder<()> {
        SiteBuilder::new()
    }

    fn from_params(params: BuildSiteParams) -> Self {
        let root_path = params.root_path;

        Site {
            root_path: root_path.clone(),
            content_path: root_path.join("content"),
            static_path: root_path.join("static"),
            sass_path: params.sass_path.map(|sass_path| root_path.join(sass_path)),
            output_path: root_path.join("public"),
            config: params.config,
            templates: params.templates,
            repository: Repository::new(),
        }
    }

    pub fn root_path(&self) -> &Path {
        &self.root_path
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn config(&self) -> Option<&SiteConfig> {
        self.config.as_ref()
    }

    pub fn articles(&self) -> &impl ArticleSource {
        &self.repository
    }

    /// Loads the config (unless one was provided) and every article in the
    /// content directory, replacing anything loaded before.
    ///
    /// Any malformed article fails the whole load.
    pub fn load(&mut self) -> Result<(), LoadSiteError> {
        let config = match self.config.take() {
            Some(config) => config,
            None => SiteConfig::from_path(self.root_path.join("config.toml"))?,
        };
        let validated = config.validate();
        let config = &*self.config.insert(config);
        validated?;

        let markdown = MarkdownRenderer::new(config.highlight_theme())?;

        let mut paths = Vec::new();
        let walker = WalkDir::new(&self.content_path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_hidden(entry));

        for entry in walker {
            let entry = entry?;

            if entry.file_type().is_file() && is_markdown(entry.path()) {
                paths.push(entry.into_path());
            }
        }

        log::debug!(
            "found {} Markdown files in {}",
            paths.len(),
            self.content_path.display()
        );

        let content_path = &self.content_path;
        let articles = paths
            .par_iter()
            .map(|path| {
                log::debug!("parsing {}", path.display());
                Article::from_path(content_path, path, config, &markdown)
            })
            .collect::<Result<Vec<_>, _>>()?;

        let mut repository = Repository::new();
        for article in articles {
            repository.add_article(article)?;
        }

        log::info!("loaded {} articles", repository.len());

        self.repository = repository;

        Ok(())
    }

    /// Renders the site to the output directory.
    ///
    /// Returns the number of pages rendered.
    pub fn render(&self) -> Result<usize, RenderSiteError> {
        self.render_to(&DiskStorage::new(self.output_path.clone()))
    }

    pub fn render_to(&self, storage: &impl Store) -> Result<usize, RenderSiteError> {
        let home = self.render_page(&self.templates.home, HOME_PATH)?;
        storage
            .store_rendered_page(HOME_PATH, home)
            .map_err(RenderSiteError::storage)?;

        let not_found = self.render_page(&self.templates.not_found, NOT_FOUND_PATH)?;
        storage
            .store_static_file(Path::new("404.html"), not_found.clone().into_bytes())
            .map_err(RenderSiteError::storage)?;
        storage
            .store_rendered_page(NOT_FOUND_PATH, not_found)
            .map_err(RenderSiteError::storage)?;

        let articles = self
            .repository
            .list_articles(SortBy::Date, SortOrder::Descending);

        for article in &articles {
            let rendered = self.render_article(&article.slug)?;

            storage
                .store_rendered_page(&article.path, rendered)
                .map_err(RenderSiteError::storage)?;
        }

        let stylesheets = self.render_sass(storage)?;
        let static_files = self.copy_static_files(storage)?;

        let pages = articles.len() + 2;

        log::info!(
            "rendered {pages} pages, {stylesheets} stylesheets, and {static_files} static files"
        );

        Ok(pages)
    }

    /// Renders the article with the given slug to a string of HTML.
    pub fn render_article(&self, slug: &str) -> Result<String, RenderSiteError> {
        let base = self.base_render_context()?;
        let article = self
            .repository
            .get_article_by_slug(slug)
            .ok_or_else(|| RenderSiteError::ArticleNotFound(slug.to_string()))?;

        let ctx = RenderArticleContext::new(base, ArticleToRender::from_article(article));

        Ok((self.templates.article)(&ctx).render_to_string()?)
    }

    fn render_page(&self, template: &RenderPage, path: &str) -> Result<String, RenderSiteError> {
        let ctx = RenderPageContext::new(self.base_render_context()?, path);

        Ok(template(&ctx).render_to_string()?)
    }

    fn base_render_context(&self) -> Result<BaseRenderContext<'_>, RenderSiteError> {
        let config = self.config.as_ref().ok_or(RenderSiteError::NotLoaded)?;

        Ok(BaseRenderContext::new(config, &self.repository))
    }

    fn render_sass(&self, storage: &impl Store) -> Result<usize, RenderSiteError> {
        let Some(sass_path) = self.sass_path.as_ref() else {
            return Ok(0);
        };

        fn is_sass(entry: &walkdir::DirEntry) -> bool {
            entry
                .path()
                .extension()
                .and_then(|extension| extension.to_str())
                .map(|extension| extension == "sass" || extension == "scss")
                .unwrap_or(false)
        }

        fn is_partial(entry: &walkdir::DirEntry) -> bool {
            entry
                .file_name()
                .to_str()
                .map(|filename| filename.starts_with('_'))
                .unwrap_or(false)
        }

        if !sass_path.is_dir() {
            return Ok(0);
        }

        let mut sass_files = Vec::new();
        for entry in WalkDir::new(sass_path)
            .follow_links(true)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| !is_partial(entry))
        {
            let entry = entry?;
            if entry.file_type().is_file() && is_sass(&entry) {
                sass_files.push(entry.into_path());
            }
        }

        let options = grass::Options::default().style(grass::OutputStyle::Compressed);

        for file in &sass_files {
            let css = grass::from_path(file, &options).map_err(|err| RenderSiteError::Sass {
                filepath: file.clone(),
                message: err.to_string(),
            })?;
            let path = file.strip_prefix(sass_path).unwrap_or(file);

            storage
                .store_static_file(&path.with_extension("css"), css.into_bytes())
                .map_err(RenderSiteError::storage)?;
        }

        Ok(sass_files.len())
    }

    fn copy_static_files(&self, storage: &impl Store) -> Result<usize, RenderSiteError> {
        if !self.static_path.is_dir() {
            return Ok(0);
        }

        let mut count = 0;

        for entry in WalkDir::new(&self.static_path).sort_by_file_name() {
            let entry = entry?;
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry
                .path()
                .strip_prefix(&self.static_path)
                .unwrap_or(entry.path());

            storage
                .store_static_file(path, fs::read(entry.path())?)
                .map_err(RenderSiteError::storage)?;
            count += 1;
        }

        Ok(count)
    }
}

fn is_hidden(entry: &walkdir::DirEntry) -> bool {
    entry.depth() > 0
        && entry
            .file_name()
            .to_str()
            .map(|filename| filename.starts_with('.') || filename.starts_with('_'))
            .unwrap_or(false)
}

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension == "md")
        .unwrap_or(false)
}

pub struct SiteBuilder<T> {
    state: T,
}

impl SiteBuilder<()> {
    pub fn new() -> Self {
        Self { state: () }
    }

    pub fn root(self, root_path: impl AsRef<Path>) -> SiteBuilder<WithRootPath> {
        SiteBuilder {
            state: WithRootPath {
                root_path: root_path.as_ref().to_owned(),
            },
        }
    }
}

impl Default for SiteBuilder<()> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct WithRootPath {
    root_path: PathBuf,
}

impl SiteBuilder<WithRootPath> {
    pub fn templates(
        self,
        home: impl Fn(&RenderPageContext) -> HtmlElement + Send + Sync + 'static,
        article: impl Fn(&RenderArticleContext) -> HtmlElement + Send + Sync + 'static,
        not_found: impl Fn(&RenderPageContext) -> HtmlElement + Send + Sync + 'static,
    ) -> SiteBuilder<WithTemplates> {
        SiteBuilder {
            state: WithTemplates {
                with_root_path: self.state,
                config: None,
                templates: Templates {
                    home: Arc::new(home),
                    article: Arc::new(article),
                    not_found: Arc::new(not_found),
                },
            },
        }
    }
}

pub struct WithTemplates {
    with_root_path: WithRootPath,
    config: Option<SiteConfig>,
    templates: Templates,
}

impl SiteBuilder<WithTemplates> {
    /// Uses the given config instead of reading `config.toml` on load.
    pub fn config(mut self, config: SiteConfig) -> Self {
        self.state.config = Some(config);
        self
    }

    pub fn with_sass(self, sass_path: impl AsRef<Path>) -> SiteBuilder<WithSass> {
        SiteBuilder {
            state: WithSass {
                with_templates: self.state,
                sass_path: sass_path.as_ref().to_owned(),
            },
        }
    }

    pub fn build(self) -> Site {
        Site::from_params(BuildSiteParams {
            root_path: self.state.with_root_path.root_path,
            config: self.state.config,
            sass_path: None,
            templates: self.state.templates,
        })
    }
}

pub struct WithSass {
    with_templates: WithTemplates,
    sass_path: PathBuf,
}

impl SiteBuilder<WithSass> {
    pub fn build(self) -> Site {
        Site::from_params(BuildSiteParams {
            root_path: self.state.with_templates.with_root_path.root_path,
            config: self.state.with_templates.config,
            sass_path: Some(self.state.sass_path),
            templates: self.state.with_templates.templates,
        })
    }
}
