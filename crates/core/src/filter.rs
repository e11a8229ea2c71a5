// crates/core/src/filter.rs
//! Validated filter values.
//!
//! Every user-selected filter (genre, category, release year, year range)
//! is checked against the corresponding dimension domain before it gets
//! anywhere near a query. A constructed value holds the dimension's own
//! spelling, so downstream binds compare exactly against indexed columns.

use thiserror::Error;

/// Rejected filter values.
#[derive(Debug, Error, PartialEq)]
pub enum FilterError {
    #[error("unknown genre: {0}")]
    UnknownGenre(String),

    #[error("unknown category: {0}")]
    UnknownCategory(String),

    #[error("unknown release year: {0}")]
    UnknownYear(i64),

    #[error("inverted year range: {start} > {end}")]
    InvertedRange { start: i64, end: i64 },
}

/// Case-insensitive, whitespace-tolerant lookup into a name domain.
/// Returns the domain's canonical spelling on a hit.
fn lookup<'a>(name: &str, domain: &'a [String]) -> Option<&'a str> {
    let wanted = name.trim();
    domain
        .iter()
        .find(|candidate| candidate.trim().eq_ignore_ascii_case(wanted))
        .map(|candidate| candidate.as_str())
}

/// A genre name validated against the genre dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genre(String);

impl Genre {
    pub fn validate(name: &str, domain: &[String]) -> Result<Self, FilterError> {
        lookup(name, domain)
            .map(|canonical| Self(canonical.to_string()))
            .ok_or_else(|| FilterError::UnknownGenre(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A category name validated against the category dimension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category(String);

impl Category {
    pub fn validate(name: &str, domain: &[String]) -> Result<Self, FilterError> {
        lookup(name, domain)
            .map(|canonical| Self(canonical.to_string()))
            .ok_or_else(|| FilterError::UnknownCategory(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A release year validated against the year dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Year(i64);

impl Year {
    pub fn validate(year: i64, domain: &[i64]) -> Result<Self, FilterError> {
        if domain.contains(&year) {
            Ok(Self(year))
        } else {
            Err(FilterError::UnknownYear(year))
        }
    }

    pub fn value(self) -> i64 {
        self.0
    }
}

/// An inclusive year range with both endpoints validated and start <= end.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    start: Year,
    end: Year,
}

impl YearRange {
    pub fn validate(start: i64, end: i64, domain: &[i64]) -> Result<Self, FilterError> {
        if start > end {
            return Err(FilterError::InvertedRange { start, end });
        }
        Ok(Self {
            start: Year::validate(start, domain)?,
            end: Year::validate(end, domain)?,
        })
    }

    pub fn start(self) -> i64 {
        self.start.value()
    }

    pub fn end(self) -> i64 {
        self.end.value()
    }

    /// A range is degenerate when it covers a single year.
    pub fn is_degenerate(self) -> bool {
        self.start == self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn genre_domain() -> Vec<String> {
        vec![
            "Action".to_string(),
            "Adventure".to_string(),
            "Indie".to_string(),
        ]
    }

    #[test]
    fn test_genre_validate_exact() {
        let genre = Genre::validate("Action", &genre_domain()).unwrap();
        assert_eq!(genre.as_str(), "Action");
    }

    #[test]
    fn test_genre_validate_ignores_case_and_whitespace() {
        // The canonical dimension spelling wins, not the caller's.
        let genre = Genre::validate("  aCtIoN ", &genre_domain()).unwrap();
        assert_eq!(genre.as_str(), "Action");
    }

    #[test]
    fn test_genre_validate_unknown() {
        let err = Genre::validate("Sports", &genre_domain()).unwrap_err();
        assert_eq!(err, FilterError::UnknownGenre("Sports".to_string()));
    }

    #[test]
    fn test_genre_validate_empty_domain() {
        let err = Genre::validate("Action", &[]).unwrap_err();
        assert!(matches!(err, FilterError::UnknownGenre(_)));
    }

    #[test]
    fn test_category_validate() {
        let domain = vec!["Single-player".to_string(), "Multi-player".to_string()];
        let category = Category::validate("single-player", &domain).unwrap();
        assert_eq!(category.as_str(), "Single-player");

        let err = Category::validate("Co-op", &domain).unwrap_err();
        assert_eq!(err, FilterError::UnknownCategory("Co-op".to_string()));
    }

    #[test]
    fn test_year_validate() {
        let domain = vec![2014, 2015, 2016];
        assert_eq!(Year::validate(2015, &domain).unwrap().value(), 2015);
        assert_eq!(
            Year::validate(1997, &domain).unwrap_err(),
            FilterError::UnknownYear(1997)
        );
    }

    #[test]
    fn test_year_range_validate() {
        let domain = vec![2014, 2015, 2016];
        let range = YearRange::validate(2014, 2016, &domain).unwrap();
        assert_eq!(range.start(), 2014);
        assert_eq!(range.end(), 2016);
        assert!(!range.is_degenerate());
    }

    #[test]
    fn test_year_range_degenerate() {
        let domain = vec![2014, 2015, 2016];
        let range = YearRange::validate(2015, 2015, &domain).unwrap();
        assert!(range.is_degenerate());
    }

    #[test]
    fn test_year_range_inverted() {
        let domain = vec![2014, 2015, 2016];
        let err = YearRange::validate(2016, 2014, &domain).unwrap_err();
        assert_eq!(
            err,
            FilterError::InvertedRange {
                start: 2016,
                end: 2014
            }
        );
    }

    #[test]
    fn test_year_range_unknown_endpoint() {
        let domain = vec![2014, 2015, 2016];
        let err = YearRange::validate(2014, 2020, &domain).unwrap_err();
        assert_eq!(err, FilterError::UnknownYear(2020));
    }
}
