//! Workspace "space" model and DTOs.

use hmis_core::types::RecordId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{Record, Timestamps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpaceVisibility {
    Public,
    #[default]
    Private,
}

/// A named space grouping dashboards and reports for a tenant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub uuid: RecordId,
    pub name: String,
    pub description: Option<String>,
    pub visibility: SpaceVisibility,
    pub owner_id: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl Space {
    pub fn new(input: CreateSpace) -> Self {
        Self {
            uuid: input.uuid.unwrap_or_default(),
            name: input.name,
            description: input.description,
            visibility: input.visibility,
            owner_id: input.owner_id,
            timestamps: Timestamps::now(),
        }
    }
}

impl Record for Space {
    const RESOURCE: &'static str = "spaces";
    const ID_FIELD: &'static str = "uuid";

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

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpace {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(default)]
    pub visibility: SpaceVisibility,
    pub owner_id: Option<String>,
    pub uuid: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpace {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visibility: Option<SpaceVisibility>,
}
