use serde::Deserialize;

/// The blog's own settings, read from the `[extra]` table of `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct BlogConfig {
    /// The author used for pages that don't name one.
    pub author: String,

    /// The external links shown in the header.
    pub links: Vec<Link>,

    pub comments: CommentsConfig,
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            author: "boyned".to_string(),
            links: vec![
                Link::new("https://twitter.com/Kampfkarren", "Twitter"),
                Link::new("https://github.com/Kampfkarren", "GitHub"),
                Link::new("https://ko-fi.com/boyned", "Ko-fi"),
            ],
            comments: CommentsConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Link {
    pub url: String,
    pub label: String,
}

impl Link {
    pub fn new(url: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            label: label.into(),
        }
    }
}

/// The settings for the utterances comment widget.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CommentsConfig {
    pub script_url: String,

    /// The GitHub repository that stores the comment threads.
    pub repo: String,

    /// How a page is mapped to an issue.
    pub issue_term: String,

    pub label: String,
    pub theme: String,
}

impl Default for CommentsConfig {
    fn default() -> Self {
        Self {
            script_url: "https://utteranc.es/client.js".to_string(),
            repo: "Kampfkarren/blog".to_string(),
            issue_term: "pathname".to_string(),
            label: "comments section".to_string(),
            theme: "github-light".to_string(),
        }
    }
}
