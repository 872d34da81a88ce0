//! Dashboard comment model and DTOs.

use hmis_core::types::RecordId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{Record, Timestamps};

// ---------------------------------------------------------------------------
// Entity
// ---------------------------------------------------------------------------

/// A comment attached to a dashboard (optionally to one visualization on it).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub uuid: RecordId,
    pub dashboard_uuid: String,
    pub visualization_uuid: Option<String>,
    pub content: String,
    pub author: String,
    pub resolved: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Comment {
    /// Build an unsaved comment for `dashboard_uuid` from a create request.
    pub fn new(dashboard_uuid: &str, input: CreateComment) -> Self {
        Self {
            uuid: input.uuid.unwrap_or_default(),
            dashboard_uuid: dashboard_uuid.to_string(),
            visualization_uuid: input.visualization_uuid,
            content: input.content,
            author: input.author,
            resolved: false,
            timestamps: Timestamps::now(),
        }
    }
}

impl Record for Comment {
    const RESOURCE: &'static str = "comments";
    const ID_FIELD: &'static str = "uuid";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["dashboardUuid"];

    fn id(&self) -> &str {
        &self.uuid
    }

    fn set_id(&mut self, id: RecordId) {
        self.uuid = id;
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Body of `POST /comments/dashboards/{dashboard_uuid}`.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateComment {
    #[validate(length(min = 1, max = 2000))]
    pub content: String,
    #[validate(length(min = 1, max = 120))]
    pub author: String,
    pub visualization_uuid: Option<String>,
    /// Client-chosen identifier; generated when absent.
    pub uuid: Option<String>,
}

/// Body of `PATCH /comments/dashboards/{dashboard_uuid}/{uuid}`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateComment {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 2000))]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved: Option<bool>,
}
