//! Stable error catalogue and the structured error payload.
//!
//! Every failure that reaches a client is described by an [`ErrorCode`]. The
//! code fixes the HTTP status, category and human-facing texts; the caller
//! only supplies the specific `message` and a free-form `context` map.

use serde::Serialize;
use serde_json::{Map, Value};

/// Error codes exposed on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorCode {
    /// Unclassified internal failure.
    E30001,
    /// Required tenant header missing.
    E30002,
    /// Create/update body malformed or failing validation.
    E30003,
    /// Record absent or outside the addressed parent scope.
    E30004,
    /// Record could not be updated after passing the existence check.
    E30005,
    /// Store reported an unsuccessful delete.
    E30006,
    /// Route exists but does not accept the request method.
    E30007,
    /// Request did not complete within the configured timeout.
    E30008,
}

/// Coarse error class, mirrored in `meta.category`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    Precondition,
    Validation,
    NotFound,
    Routing,
    Timeout,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
    Critical,
}

/// Static description attached to each [`ErrorCode`].
struct CodeInfo {
    status: u16,
    name: &'static str,
    title: &'static str,
    severity: Severity,
    category: ErrorCategory,
    description: &'static str,
    fix: &'static str,
}

impl ErrorCode {
    fn info(self) -> CodeInfo {
        match self {
            ErrorCode::E30001 => CodeInfo {
                status: 500,
                name: "InternalError",
                title: "Internal error",
                severity: Severity::Critical,
                category: ErrorCategory::Internal,
                description: "The server failed to process the request.",
                fix: "Retry the request later.",
            },
            ErrorCode::E30002 => CodeInfo {
                status: 400,
                name: "MissingTenantHeader",
                title: "Missing tenant header",
                severity: Severity::Warning,
                category: ErrorCategory::Precondition,
                description: "This endpoint is tenant-scoped and requires the X-Tenant-ID header.",
                fix: "Send the X-Tenant-ID header with a non-empty tenant identifier.",
            },
            ErrorCode::E30003 => CodeInfo {
                status: 400,
                name: "InvalidRequestBody",
                title: "Invalid request body",
                severity: Severity::Warning,
                category: ErrorCategory::Validation,
                description: "The request body could not be parsed or failed validation.",
                fix: "Correct the fields listed in context.error and resend.",
            },
            ErrorCode::E30004 => CodeInfo {
                status: 404,
                name: "ResourceNotFound",
                title: "Resource not found",
                severity: Severity::Warning,
                category: ErrorCategory::NotFound,
                description: "No record exists with this identifier in the addressed scope.",
                fix: "Check the identifier and its parent path segment.",
            },
            ErrorCode::E30005 => CodeInfo {
                status: 500,
                name: "UpdateFailed",
                title: "Update failed",
                severity: Severity::Error,
                category: ErrorCategory::Internal,
                description: "The record could not be updated.",
                fix: "Reload the record and retry the update.",
            },
            ErrorCode::E30006 => CodeInfo {
                status: 500,
                name: "DeleteFailed",
                title: "Delete failed",
                severity: Severity::Error,
                category: ErrorCategory::Internal,
                description: "The record could not be deleted.",
                fix: "Reload the collection and retry the delete.",
            },
            ErrorCode::E30007 => CodeInfo {
                status: 405,
                name: "MethodNotAllowed",
                title: "Method not allowed",
                severity: Severity::Warning,
                category: ErrorCategory::Routing,
                description: "The path exists but does not accept this HTTP method.",
                fix: "Use one of the methods documented for this path.",
            },
            ErrorCode::E30008 => CodeInfo {
                status: 408,
                name: "RequestTimeout",
                title: "Request timed out",
                severity: Severity::Error,
                category: ErrorCategory::Timeout,
                description: "The request was not handled within the configured timeout.",
                fix: "Retry the request, or raise REQUEST_TIMEOUT_SECS.",
            },
        }
    }

    /// HTTP status paired with this code.
    pub fn status(self) -> u16 {
        self.info().status
    }

    /// Build the full payload for this code.
    pub fn payload(
        self,
        runtime: &str,
        message: impl Into<String>,
        context: Map<String, Value>,
    ) -> ErrorPayload {
        let info = self.info();
        ErrorPayload {
            code: self,
            runtime: runtime.to_string(),
            meta: ErrorMeta {
                name: info.name,
                title: info.title,
                severity: info.severity,
                status: info.status,
                message: message.into(),
                description: info.description,
                fix: info.fix,
                category: info.category,
            },
            context,
        }
    }
}

/// `meta` block of an [`ErrorPayload`].
#[derive(Debug, Clone, Serialize)]
pub struct ErrorMeta {
    pub name: &'static str,
    pub title: &'static str,
    pub severity: Severity,
    pub status: u16,
    pub message: String,
    pub description: &'static str,
    pub fix: &'static str,
    pub category: ErrorCategory,
}

/// Structured error body returned for every failed request.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorPayload {
    pub code: ErrorCode,
    pub runtime: String,
    pub meta: ErrorMeta,
    pub context: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [ErrorCode; 8] = [
        ErrorCode::E30001,
        ErrorCode::E30002,
        ErrorCode::E30003,
        ErrorCode::E30004,
        ErrorCode::E30005,
        ErrorCode::E30006,
        ErrorCode::E30007,
        ErrorCode::E30008,
    ];

    #[test]
    fn status_codes_match_taxonomy() {
        assert_eq!(ErrorCode::E30002.status(), 400);
        assert_eq!(ErrorCode::E30003.status(), 400);
        assert_eq!(ErrorCode::E30004.status(), 404);
        assert_eq!(ErrorCode::E30005.status(), 500);
        assert_eq!(ErrorCode::E30006.status(), 500);
        assert_eq!(ErrorCode::E30007.status(), 405);
        assert_eq!(ErrorCode::E30008.status(), 408);
    }

    #[test]
    fn payload_meta_status_matches_code_status() {
        for code in ALL {
            let payload = code.payload("test", "boom", Map::new());
            assert_eq!(payload.meta.status, code.status());
            assert!(!payload.meta.name.is_empty());
        }
    }

    #[test]
    fn payload_serializes_code_as_string() {
        let mut context = Map::new();
        context.insert("header".into(), Value::from("X-Tenant-ID"));
        let payload = ErrorCode::E30002.payload("hmis-api@0.1.0", "missing", context);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["code"], "E30002");
        assert_eq!(json["runtime"], "hmis-api@0.1.0");
        assert_eq!(json["meta"]["name"], "MissingTenantHeader");
        assert_eq!(json["meta"]["severity"], "warning");
        assert_eq!(json["meta"]["category"], "precondition");
        assert_eq!(json["context"]["header"], "X-Tenant-ID");
    }

    #[test]
    fn not_found_category_uses_snake_case() {
        let json = serde_json::to_value(ErrorCategory::NotFound).unwrap();
        assert_eq!(json, "not_found");
    }
}
