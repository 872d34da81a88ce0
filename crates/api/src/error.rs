use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use hmis_core::error::CoreError;
use hmis_core::error_codes::ErrorCode;
use hmis_store::StoreError;
use serde_json::{Map, Value};

/// Value of the `runtime` field in every error payload.
pub const RUNTIME: &str = concat!(env!("CARGO_PKG_NAME"), "@", env!("CARGO_PKG_VERSION"));

/// Message returned in place of internal failure details.
const INTERNAL_MESSAGE: &str = "An internal error occurred";

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for store
/// failures, and adds HTTP-specific variants. Implements [`IntoResponse`] to
/// produce the structured error payload.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `hmis_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A failure reported by the resource store.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// The path matched a route that has no handler for this method.
    #[error("Method {method} not allowed on {path}")]
    MethodNotAllowed { method: String, path: String },

    /// The request ran past `REQUEST_TIMEOUT_SECS`.
    #[error("Request timed out after {secs}s")]
    Timeout { secs: u64 },
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (code, message, context) = match &self {
            // --- CoreError variants ---
            AppError::Core(CoreError::Internal(msg)) => {
                tracing::error!(error = %msg, "Internal core error");
                (ErrorCode::E30001, INTERNAL_MESSAGE.to_string(), Map::new())
            }
            AppError::Core(core) => {
                if core.code().status() >= 500 {
                    tracing::error!(error = %core, "Store operation failed");
                }
                (core.code(), core.to_string(), core.context())
            }

            // --- Store errors ---
            AppError::Store(err @ StoreError::Duplicate { .. }) => {
                (ErrorCode::E30003, err.to_string(), error_context(err.to_string()))
            }
            AppError::Store(err) => {
                tracing::error!(error = %err, "Store error");
                (ErrorCode::E30001, INTERNAL_MESSAGE.to_string(), Map::new())
            }

            // --- HTTP-specific errors ---
            AppError::MethodNotAllowed { method, path } => {
                let mut context = Map::new();
                context.insert("method".into(), Value::from(method.as_str()));
                context.insert("path".into(), Value::from(path.as_str()));
                (ErrorCode::E30007, self.to_string(), context)
            }
            AppError::Timeout { secs } => {
                tracing::warn!(timeout_secs = secs, "Request timed out");
                let mut context = Map::new();
                context.insert("timeoutSecs".into(), Value::from(*secs));
                (ErrorCode::E30008, self.to_string(), context)
            }
        };

        let payload = code.payload(RUNTIME, message, context);
        let status =
            StatusCode::from_u16(payload.meta.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (status, axum::Json(payload)).into_response()
    }
}

fn error_context(error: String) -> Map<String, Value> {
    let mut context = Map::new();
    context.insert("error".into(), Value::from(error));
    context
}
