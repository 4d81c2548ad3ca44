use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
#[error("invalid date '{0}', expected YYYY-MM-DD or an RFC 3339 datetime")]
pub struct InvalidDateError(pub String);

/// The publication date of an article.
///
/// Keeps the date exactly as written for display, alongside the parsed value
/// used for ordering.
#[derive(Debug, Clone)]
pub struct ArticleDate {
    raw: String,
    datetime: NaiveDateTime,
}

impl ArticleDate {
    pub fn parse(date: &str) -> Result<Self, InvalidDateError> {
        let trimmed = date.trim();

        let datetime = if trimmed.contains('T') || trimmed.contains(' ') {
            DateTime::parse_from_rfc3339(trimmed)
                .map(|datetime| datetime.naive_utc())
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S"))
                .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S"))
                .ok()
        } else {
            NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
                .ok()
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        };

        let datetime = datetime.ok_or_else(|| InvalidDateError(date.to_string()))?;

        Ok(Self {
            raw: trimmed.to_string(),
            datetime,
        })
    }

    /// The date as it was written in the front matter.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn datetime(&self) -> NaiveDateTime {
        self.datetime
    }
}

impl fmt::Display for ArticleDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.raw)
    }
}

impl PartialEq for ArticleDate {
    fn eq(&self, other: &Self) -> bool {
        self.datetime == other.datetime
    }
}

impl Eq for ArticleDate {}

impl PartialOrd for ArticleDate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ArticleDate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.datetime.cmp(&other.datetime)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_parse_date() {
        let date = ArticleDate::parse("2021-05-01").unwrap();

        assert_eq!(date.as_str(), "2021-05-01");
        assert_eq!(
            date.datetime(),
            NaiveDate::from_ymd_opt(2021, 5, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_parse_datetimes() {
        assert!(ArticleDate::parse("2021-05-01T10:30:00Z").is_ok());
        assert!(ArticleDate::parse("2021-05-01T10:30:00+02:00").is_ok());
        assert!(ArticleDate::parse("2021-05-01T10:30:00").is_ok());
        assert!(ArticleDate::parse("2021-05-01 10:30:00").is_ok());
    }

    #[test]
    fn test_invalid_date() {
        assert_eq!(
            ArticleDate::parse("May 1st").unwrap_err(),
            InvalidDateError("May 1st".into())
        );
        assert!(ArticleDate::parse("2021-13-01").is_err());
    }

    #[test]
    fn test_ordering_uses_parsed_value() {
        let earlier = ArticleDate::parse("2021-05-01").unwrap();
        let later = ArticleDate::parse("2021-05-01T00:00:01Z").unwrap();

        assert!(earlier < later);
    }
}
