//! Structured responses for failures raised by the outer middleware layers.
//!
//! Panics and timeouts never reach a handler, so they are converted to
//! [`AppError`] here and rendered like every other error.

use std::any::Any;

use axum::response::{IntoResponse, Response};
use axum::BoxError;
use hmis_core::error::CoreError;

use crate::error::AppError;

/// Panic hook for `CatchPanicLayer::custom`. Answers with E30001.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(msg) = panic.downcast_ref::<String>() {
        msg.clone()
    } else if let Some(msg) = panic.downcast_ref::<&str>() {
        (*msg).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    AppError::Core(CoreError::Internal(format!("handler panicked: {detail}"))).into_response()
}

/// Error handler for the `tower` timeout stack.
///
/// An elapsed deadline becomes E30008; anything else the stack reports is an
/// internal error.
pub fn layer_error(err: BoxError, timeout_secs: u64) -> AppError {
    if err.is::<tower::timeout::error::Elapsed>() {
        AppError::Timeout { secs: timeout_secs }
    } else {
        AppError::Core(CoreError::Internal(err.to_string()))
    }
}
