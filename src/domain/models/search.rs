use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::account::AccountRecord;

/// Result size requested from `users/search`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchType {
    /// Short list for the header dropdown
    #[default]
    Less,
    /// Full list for the search page
    More,
}

impl SearchType {
    pub fn as_str(&self) -> &'static str {
        match self {
            SearchType::Less => "less",
            SearchType::More => "more",
        }
    }
}

impl fmt::Display for SearchType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "less" => Ok(SearchType::Less),
            "more" => Ok(SearchType::More),
            other => Err(format!("Unknown search type: {}", other)),
        }
    }
}

/// Query-string parameters of `users/search`
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: String,
    #[serde(default, rename = "type")]
    pub search_type: SearchType,
}

impl SearchParams {
    pub fn new(q: impl Into<String>, search_type: SearchType) -> Self {
        Self { q: q.into(), search_type }
    }

    /// Pairs ready for URL encoding, in wire order
    pub fn to_pairs(&self) -> [(&'static str, String); 2] {
        [("q", self.q.clone()), ("type", self.search_type.as_str().to_string())]
    }
}

/// Body of a `users/search` response.
///
/// The API wraps the list in `data`; some deployments wrap it twice.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum SearchResponse {
    Flat { data: Vec<AccountRecord> },
    Nested { data: SearchPage },
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SearchPage {
    pub data: Vec<AccountRecord>,
}

impl SearchResponse {
    pub fn into_accounts(self) -> Vec<AccountRecord> {
        match self {
            SearchResponse::Flat { data } => data,
            SearchResponse::Nested { data } => data.data,
        }
    }
}
