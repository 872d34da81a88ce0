//! Tenant header extractor for tenant-scoped endpoints.

use std::fmt;

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use hmis_core::error::CoreError;

use crate::error::AppError;

/// Canonical spelling of the tenant header, as reported to clients.
pub const TENANT_HEADER: &str = "X-Tenant-ID";

/// Tenant identifier taken from the `X-Tenant-ID` header.
///
/// Place it first in a handler's argument list so a missing header is
/// rejected before the path, query or body are looked at:
///
/// ```ignore
/// async fn list(tenant: TenantId, State(state): State<AppState>) -> AppResult<Json<()>> {
///     tracing::info!(%tenant, "handling request");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TenantId(pub String);

impl fmt::Display for TenantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl<S> FromRequestParts<S> for TenantId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .headers
            .get(TENANT_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .map(|v| TenantId(v.to_string()))
            .ok_or(AppError::Core(CoreError::MissingHeader {
                header: TENANT_HEADER,
            }))
    }
}
