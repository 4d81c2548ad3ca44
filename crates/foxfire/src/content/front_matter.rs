use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Deserializer};
use thiserror::Error;

static TOML_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = r"^[[:space:]]*\+\+\+(\r?\n(?s).*?(?-s))\+\+\+[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
    Regex::new(pattern).expect("failed to compile regex for TOML front matter")
});

static YAML_REGEX: Lazy<Regex> = Lazy::new(|| {
    let pattern = r"^[[:space:]]*---(\r?\n(?s).*?(?-s))---[[:space:]]*(?:$|(?:\r?\n((?s).*(?-s))$))";
    Regex::new(pattern).expect("failed to compile regex for YAML front matter")
});

#[derive(Error, Debug)]
pub enum FrontMatterError {
    #[error("no front matter found")]
    Missing,

    #[error("invalid TOML front matter: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("invalid YAML front matter: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

/// Splits `content` into its front matter and the remaining body.
///
/// TOML front matter is delimited by `+++` and YAML front matter by `---`.
pub fn parse_front_matter<T>(content: &str) -> Result<(T, &str), FrontMatterError>
where
    T: serde::de::DeserializeOwned,
{
    if let Some(captures) = TOML_REGEX.captures(content) {
        let front_matter = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());

        return Ok((toml::from_str(front_matter)?, body));
    }

    if let Some(captures) = YAML_REGEX.captures(content) {
        let front_matter = captures.get(1).map_or("", |m| m.as_str());
        let body = captures.get(2).map_or("", |m| m.as_str());

        return Ok((serde_yaml_ng::from_str(front_matter)?, body));
    }

    Err(FrontMatterError::Missing)
}

/// Deserializes a date written either as a TOML datetime or as a string.
pub fn from_toml_datetime<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum DatetimeOrString {
        Datetime(toml::value::Datetime),
        String(String),
    }

    match DatetimeOrString::deserialize(deserializer)? {
        DatetimeOrString::Datetime(datetime) => Ok(datetime.to_string()),
        DatetimeOrString::String(string) => Ok(string),
    }
}
