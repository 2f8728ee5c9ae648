//! Café Query
//!
//! Parsing and validation of the raw `/cafe` query parameters into a typed
//! [`CafeQuery`], plus the selection and rendering of the matching cafés.

use std::borrow::Borrow;

use super::catalog::Catalog;

/// Validation failures for a café query
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum QueryError {
    /// `city` is missing or not present in the catalog
    #[error("unknown city")]
    UnknownCity,

    /// `count` is present but not a non-negative integer
    #[error("incorrect count")]
    BadCount,
}

/// Validated café query, borrowing the resolved city list from the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CafeQuery<'a> {
    pub city: &'a str,
    pub cafes: &'a [String],
    /// `None` means no limit
    pub count: Option<usize>,
    /// `None` means no filter; never holds an empty string
    pub search: Option<String>,
}

impl<'a> CafeQuery<'a> {
    /// Validate raw query pairs against the catalog.
    ///
    /// The first value wins when a key repeats. City is checked before count.
    pub fn from_params(
        params: &[(String, String)],
        catalog: &'a Catalog,
    ) -> Result<Self, QueryError> {
        let (city, cafes) = param(params, "city")
            .and_then(|city| catalog.entry(city))
            .ok_or(QueryError::UnknownCity)?;

        let count = param(params, "count")
            .map(parse_count)
            .transpose()?;

        let search = param(params, "search")
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        Ok(Self {
            city,
            cafes,
            count,
            search,
        })
    }

    /// Apply the filter and the limit to the city's cafés
    pub fn select(&self) -> Vec<&'a str> {
        select(self.cafes, self.count, self.search.as_deref())
    }
}

fn param<'p>(params: &'p [(String, String)], key: &str) -> Option<&'p str> {
    params
        .iter()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.as_str())
}

fn parse_count(raw: &str) -> Result<usize, QueryError> {
    raw.parse::<usize>().map_err(|_| QueryError::BadCount)
}

/// Keep the cafés whose name contains `search` (case-insensitive), then take
/// at most `count` of them. Catalog order is preserved.
pub fn select<'a>(cafes: &'a [String], count: Option<usize>, search: Option<&str>) -> Vec<&'a str> {
    let needle = search.filter(|s| !s.is_empty()).map(str::to_lowercase);

    cafes
        .iter()
        .map(String::as_str)
        .filter(|name| match &needle {
            Some(needle) => name.to_lowercase().contains(needle.as_str()),
            None => true,
        })
        .take(count.unwrap_or(usize::MAX))
        .collect()
}

/// Comma-joined response body; zero cafés render as an empty string
pub fn render<S: Borrow<str>>(cafes: &[S]) -> String {
    cafes.join(",")
}
