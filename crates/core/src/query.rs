//! Wire query translation for list endpoints.
//!
//! Turns raw `?page=&per_page=&sort=&order=&filter[field]=value` pairs into a
//! [`ListQuery`]. Parsing never fails: malformed scalars fall back to their
//! defaults and unrelated keys are ignored.

use std::collections::BTreeMap;
use std::fmt;

/// Default page when `page` is absent or unusable.
pub const DEFAULT_PAGE: u64 = 1;

/// Default page size when `per_page` is absent or unusable.
pub const DEFAULT_PER_PAGE: u64 = 20;

/// Default sort field.
pub const DEFAULT_SORT: &str = "createdAt";

/// Exact-match filter: field name to expected textual value.
pub type Filter = BTreeMap<String, String>;

/// Requested sort direction.
///
/// Unknown literals are kept verbatim so links can echo them back; the store
/// sorts them like [`SortOrder::Desc`].
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
    Other(String),
}

impl SortOrder {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "asc" => SortOrder::Asc,
            "desc" => SortOrder::Desc,
            other => SortOrder::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
            SortOrder::Other(value) => value,
        }
    }

    pub fn is_ascending(&self) -> bool {
        matches!(self, SortOrder::Asc)
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured list query. `page` and `per_page` are always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    pub page: u64,
    pub per_page: u64,
    pub filter: Filter,
    pub sort: String,
    pub order: SortOrder,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            per_page: DEFAULT_PER_PAGE,
            filter: Filter::new(),
            sort: DEFAULT_SORT.to_string(),
            order: SortOrder::Desc,
        }
    }
}

impl ListQuery {
    /// Build a query from decoded query-string pairs.
    ///
    /// Scalar parameters take their first occurrence; repeated
    /// `filter[field]` keys take the last.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut page = None;
        let mut per_page = None;
        let mut sort = None;
        let mut order = None;
        let mut filter = Filter::new();

        for (key, value) in pairs {
            let (key, value) = (key.as_ref(), value.as_ref());
            match key {
                "page" => {
                    page.get_or_insert_with(|| parse_positive(value, DEFAULT_PAGE));
                }
                "per_page" => {
                    per_page.get_or_insert_with(|| parse_positive(value, DEFAULT_PER_PAGE));
                }
                "sort" => {
                    sort.get_or_insert_with(|| non_empty(value).unwrap_or(DEFAULT_SORT).to_string());
                }
                "order" => {
                    order.get_or_insert_with(|| {
                        non_empty(value).map(SortOrder::from_wire).unwrap_or_default()
                    });
                }
                _ => {
                    if let Some(field) = filter_field(key) {
                        filter.insert(field.to_string(), value.to_string());
                    }
                }
            }
        }

        Self {
            page: page.unwrap_or(DEFAULT_PAGE),
            per_page: per_page.unwrap_or(DEFAULT_PER_PAGE),
            filter,
            sort: sort.unwrap_or_else(|| DEFAULT_SORT.to_string()),
            order: order.unwrap_or_default(),
        }
    }

    /// Add (or override) a filter pair, e.g. a path-scoped parent id.
    pub fn with_filter(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.filter.insert(field.into(), value.into());
        self
    }

    /// Zero-based index of the first record on the requested page.
    pub fn offset(&self) -> usize {
        usize::try_from((self.page - 1).saturating_mul(self.per_page)).unwrap_or(usize::MAX)
    }
}

fn parse_positive(value: &str, default: u64) -> u64 {
    match value.trim().parse::<u64>() {
        Ok(n) if n >= 1 => n,
        _ => default,
    }
}

fn non_empty(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

/// Extract `field` from a `filter[field]` key.
fn filter_field(key: &str) -> Option<&str> {
    key.strip_prefix("filter[")
        .and_then(|rest| rest.strip_suffix(']'))
        .filter(|field| !field.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
