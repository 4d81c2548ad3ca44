use std::fmt;

use url::Url;

use crate::SiteConfig;

/// An absolute URL to a page on the site.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Clone)]
pub struct Permalink(Url);

impl Permalink {
    /// Joins the site's base URL with the given path.
    ///
    /// The path is used as-is, so `/articles/foo` stays without a trailing
    /// slash.
    pub fn from_path(config: &SiteConfig, path: &str) -> Result<Self, url::ParseError> {
        let base_url = config.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');

        Ok(Self(Url::parse(&format!("{base_url}/{path}"))?))
    }

    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    pub fn path(&self) -> &str {
        self.0.path()
    }
}

impl fmt::Display for Permalink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn make_config(base_url: &str) -> SiteConfig {
        SiteConfig {
            base_url: base_url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_permalink() {
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com/"), "/")
                .unwrap()
                .as_str(),
            "https://example.com/"
        );
        assert_eq!(
            Permalink::from_path(&make_config("https://example.com"), "")
                .unwrap()
                .as_str(),
            "https://example.com/"
        );
        assert_eq!(
            Permalink::from_path(&make_config("https://blog.example.com"), "/articles/foo")
                .unwrap()
                .as_str(),
            "https://blog.example.com/articles/foo"
        );
    }

    #[test]
    fn test_permalink_path() {
        let permalink =
            Permalink::from_path(&make_config("https://example.com"), "/this/is/a/cool/site/")
                .unwrap();
        assert_eq!(permalink.path(), "/this/is/a/cool/site/");
    }

    #[test]
    fn test_invalid_base_url() {
        assert!(Permalink::from_path(&make_config("not a url"), "/").is_err());
    }
}
