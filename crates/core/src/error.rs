use serde_json::{Map, Value};

use crate::error_codes::ErrorCode;

/// Domain-level failures shared by the store and the HTTP layer.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Missing required header: {header}")]
    MissingHeader { header: &'static str },

    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("{resource} with id {id} not found")]
    NotFound { resource: &'static str, id: String },

    #[error("{resource} with id {id} could not be updated")]
    UpdateFailed { resource: &'static str, id: String },

    #[error("{resource} with ids {ids:?} could not be deleted")]
    DeleteFailed {
        resource: &'static str,
        ids: Vec<String>,
    },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Wire error code for this failure.
    pub fn code(&self) -> ErrorCode {
        match self {
            CoreError::MissingHeader { .. } => ErrorCode::E30002,
            CoreError::InvalidBody(_) | CoreError::Validation(_) => ErrorCode::E30003,
            CoreError::NotFound { .. } => ErrorCode::E30004,
            CoreError::UpdateFailed { .. } => ErrorCode::E30005,
            CoreError::DeleteFailed { .. } => ErrorCode::E30006,
            CoreError::Internal(_) => ErrorCode::E30001,
        }
    }

    /// Structured `context` for the error payload.
    ///
    /// Internal details are never copied into the context.
    pub fn context(&self) -> Map<String, Value> {
        let mut context = Map::new();
        match self {
            CoreError::MissingHeader { header } => {
                context.insert("header".into(), Value::from(*header));
            }
            CoreError::InvalidBody(msg) | CoreError::Validation(msg) => {
                context.insert("error".into(), Value::from(msg.as_str()));
            }
            CoreError::NotFound { resource, id } | CoreError::UpdateFailed { resource, id } => {
                context.insert("resource".into(), Value::from(*resource));
                context.insert("id".into(), Value::from(id.as_str()));
            }
            CoreError::DeleteFailed { resource, ids } => {
                context.insert("resource".into(), Value::from(*resource));
                context.insert("ids".into(), Value::from(ids.clone()));
            }
            CoreError::Internal(_) => {}
        }
        context
    }
}
