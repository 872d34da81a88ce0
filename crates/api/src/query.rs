//! Query-string extractor for paginated list endpoints.

use std::convert::Infallible;

use axum::extract::{FromRequestParts, Query};
use axum::http::request::Parts;
use hmis_core::query::ListQuery;

/// List parameters (`?page=&per_page=&sort=&order=&filter[field]=value`).
///
/// Never rejects: an undecodable query string yields the default query.
#[derive(Debug, Clone)]
pub struct ListParams(pub ListQuery);

impl<S> FromRequestParts<S> for ListParams
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let pairs = Query::<Vec<(String, String)>>::try_from_uri(&parts.uri)
            .map(|Query(pairs)| pairs)
            .unwrap_or_else(|rejection| {
                tracing::debug!(error = %rejection, "Ignoring undecodable query string");
                Vec::new()
            });

        Ok(ListParams(ListQuery::from_pairs(pairs)))
    }
}
