//! Paginated envelope assembly.
//!
//! Builds `{ data, meta: { pagination }, links }` from a store [`Page`] and the
//! [`ListQuery`] that produced it. Links echo the request's `per_page`, `sort`
//! and `order` so clients can navigate without rebuilding query strings.

use serde::Serialize;

use crate::query::ListQuery;

/// One page of records plus the pre-slice match count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page<T> {
    pub data: Vec<T>,
    pub total: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaginationMeta {
    pub total: u64,
    pub per_page: u64,
    pub current_page: u64,
    pub last_page: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EnvelopeMeta {
    pub pagination: PaginationMeta,
}

/// Navigation links. `next` and `prev` serialize as explicit `null` when absent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinks {
    #[serde(rename = "self")]
    pub self_link: String,
    pub first: String,
    pub last: String,
    pub next: Option<String>,
    pub prev: Option<String>,
}

/// Paginated list response envelope.
#[derive(Debug, Clone, Serialize)]
pub struct Paginated<T: Serialize> {
    pub data: Vec<T>,
    pub meta: EnvelopeMeta,
    pub links: PageLinks,
}

/// `ceil(total / per_page)`; zero when there is nothing to show.
pub fn last_page(total: u64, per_page: u64) -> u64 {
    total.div_ceil(per_page.max(1))
}

/// Build the link set for `query` against `base_path` (the request path).
pub fn build_links(base_path: &str, query: &ListQuery, last_page: u64) -> PageLinks {
    let link = |page: u64| {
        format!(
            "{base_path}?page={page}&per_page={}&sort={}&order={}",
            query.per_page,
            encode_component(&query.sort),
            encode_component(query.order.as_str()),
        )
    };

    let current = query.page;
    PageLinks {
        self_link: link(current),
        first: link(1),
        last: link(last_page),
        next: (current < last_page).then(|| link(current + 1)),
        prev: (current > 1).then(|| link(current - 1)),
    }
}

/// Wrap a store page into the list envelope.
pub fn paginate<T: Serialize>(base_path: &str, query: &ListQuery, page: Page<T>) -> Paginated<T> {
    let last = last_page(page.total, query.per_page);
    Paginated {
        links: build_links(base_path, query, last),
        meta: EnvelopeMeta {
            pagination: PaginationMeta {
                total: page.total,
                per_page: query.per_page,
                current_page: query.page,
                last_page: last,
            },
        },
        data: page.data,
    }
}

/// Encode a query value the way `application/x-www-form-urlencoded` parsers
/// read it back.
fn encode_component(value: &str) -> String {
    form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
