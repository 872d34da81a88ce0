//! Request handlers for the mocked resources.
//!
//! Each submodule provides async handlers (list, create, get_by_id, update,
//! delete) for one resource. Handlers delegate to the matching
//! [`ResourceStore`](hmis_store::ResourceStore) and map failures via [`AppError`].

pub mod comments;
pub mod locations;
pub mod organisations;
pub mod spaces;

use axum::extract::OriginalUri;
use axum::http::Method;
use hmis_core::error::CoreError;
use hmis_store::{DeleteOutcome, Record};

use crate::error::AppError;

/// Not-found error for a record of type `T`.
pub(crate) fn not_found<T: Record>(id: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        resource: T::RESOURCE,
        id: id.to_string(),
    })
}

/// Error for a record that passed the existence check but could not be updated.
pub(crate) fn update_failed<T: Record>(id: &str) -> AppError {
    AppError::Core(CoreError::UpdateFailed {
        resource: T::RESOURCE,
        id: id.to_string(),
    })
}

/// Turn an unsuccessful [`DeleteOutcome`] into an error.
pub(crate) fn ensure_deleted<T: Record>(outcome: DeleteOutcome, id: &str) -> Result<(), AppError> {
    if outcome.success {
        Ok(())
    } else {
        Err(AppError::Core(CoreError::DeleteFailed {
            resource: T::RESOURCE,
            ids: vec![id.to_string()],
        }))
    }
}

/// Fallback for unmatched routes.
pub async fn route_not_found(OriginalUri(uri): OriginalUri) -> AppError {
    AppError::Core(CoreError::NotFound {
        resource: "route",
        id: uri.path().to_string(),
    })
}

/// Fallback for a matched path whose route has no handler for the method.
pub async fn method_not_allowed(method: Method, OriginalUri(uri): OriginalUri) -> AppError {
    AppError::MethodNotAllowed {
        method: method.to_string(),
        path: uri.path().to_string(),
    }
}
