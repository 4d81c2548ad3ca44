use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// The syntax highlighting theme used when the config doesn't name one.
pub const DEFAULT_HIGHLIGHT_THEME: &str = "InspiredGitHub";

/// The configuration for a site, read from `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SiteConfig {
    /// The canonical URL of the site (e.g., `https://blog.example.com`).
    pub base_url: String,

    pub title: Option<String>,

    /// The syntect theme used for fenced code blocks.
    pub highlight_theme: Option<String>,

    /// Site-specific settings, deserialized on demand with [`SiteConfig::extra`].
    #[serde(default)]
    pub extra: toml::Table,
}

#[derive(Error, Debug)]
pub enum LoadConfigError {
    #[error("failed to read config '{filepath}': {err}")]
    Io {
        filepath: PathBuf,
        #[source]
        err: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid base_url '{base_url}': {err}")]
    InvalidBaseUrl {
        base_url: String,
        #[source]
        err: url::ParseError,
    },
}

impl SiteConfig {
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, LoadConfigError> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| LoadConfigError::Io {
            filepath: path.to_owned(),
            err,
        })?;

        Self::parse(&contents)
    }

    pub fn parse(text: &str) -> Result<Self, LoadConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;

        Ok(config)
    }

    /// Checks that `base_url` is an absolute URL that paths can be joined to.
    pub fn validate(&self) -> Result<(), LoadConfigError> {
        let invalid = |err| LoadConfigError::InvalidBaseUrl {
            base_url: self.base_url.clone(),
            err,
        };

        let url = Url::parse(&self.base_url).map_err(invalid)?;
        if url.cannot_be_a_base() {
            return Err(invalid(url::ParseError::RelativeUrlWithCannotBeABaseBase));
        }

        Ok(())
    }

    pub fn title(&self) -> &str {
        self.title.as_deref().unwrap_or_default()
    }

    pub fn highlight_theme(&self) -> &str {
        self.highlight_theme
            .as_deref()
            .unwrap_or(DEFAULT_HIGHLIGHT_THEME)
    }

    /// Deserializes the `[extra]` table into `T`.
    pub fn extra<'de, T>(&self) -> Result<T, toml::de::Error>
    where
        T: Deserialize<'de>,
    {
        T::deserialize(self.extra.clone())
    }
}
