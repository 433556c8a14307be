#[cfg(test)]
#[path = "filters_test.rs"]
mod filters_test;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use serde::{Deserialize, Serialize};

use super::TaskFilters;

/// Characters left as-is in a query value (RFC 3986 unreserved).
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    #[default]
    All,
    Completed,
    Pending,
}

impl StatusFilter {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Completed => "completed",
            StatusFilter::Pending => "pending",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatusFilter::All => "All Tasks",
            StatusFilter::Completed => "Completed",
            StatusFilter::Pending => "Pending",
        }
    }

    pub fn all() -> [StatusFilter; 3] {
        [StatusFilter::All, StatusFilter::Completed, StatusFilter::Pending]
    }

    /// Unknown or missing values mean no filtering.
    pub fn parse(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "completed" => StatusFilter::Completed,
            "pending" => StatusFilter::Pending,
            _ => StatusFilter::All,
        }
    }
}

/// Search, status filter and page, as carried in the tasks URL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskQuery {
    pub search: String,
    pub filter: StatusFilter,
    pub page: Option<u32>,
}

impl TaskQuery {
    /// Build from raw query parameters; `get` looks a parameter up by name.
    pub fn from_params(get: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            search: get("search").unwrap_or_default(),
            filter: get("filter").map(|f| StatusFilter::parse(&f)).unwrap_or_default(),
            page: get("page").and_then(|p| p.trim().parse().ok()).filter(|p| *p > 0),
        }
    }

    pub fn from_filters(filters: &TaskFilters) -> Self {
        Self {
            search: filters.search.clone().unwrap_or_default(),
            filter: filters.filter.as_deref().map(StatusFilter::parse).unwrap_or_default(),
            page: None,
        }
    }

    /// A new filter starts again from the first page.
    pub fn with_filter(&self, filter: StatusFilter) -> Self {
        Self {
            search: self.search.clone(),
            filter,
            page: None,
        }
    }

    /// A new search starts again from the first page.
    pub fn with_search(&self, search: impl Into<String>) -> Self {
        Self {
            search: search.into(),
            filter: self.filter,
            page: None,
        }
    }

    /// Same search and filter, back on the first page.
    pub fn without_page(&self) -> Self {
        Self {
            page: None,
            ..self.clone()
        }
    }

    pub fn with_page(&self, page: u32) -> Self {
        Self {
            search: self.search.clone(),
            filter: self.filter,
            page: Some(page),
        }
    }

    pub fn pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("search", self.search.clone()),
            ("filter", self.filter.as_str().to_string()),
        ];
        if let Some(page) = self.page {
            pairs.push(("page", page.to_string()));
        }
        pairs
    }

    /// `search=..&filter=..[&page=..]`, always in that order.
    pub fn to_query_string(&self) -> String {
        self.pairs()
            .into_iter()
            .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(&value, QUERY_VALUE)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn href(&self, path: &str) -> String {
        format!("{}?{}", path, self.to_query_string())
    }
}
