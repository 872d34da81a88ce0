//! Organisation profile and location models and DTOs.
//!
//! Locations are scoped to their organisation through `organisationId`, which
//! plays the same role for locations that `dashboardUuid` plays for comments.

use hmis_core::types::RecordId;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::record::{Record, Timestamps};

// ---------------------------------------------------------------------------
// Organisation profile
// ---------------------------------------------------------------------------

/// Level of an organisation in the reporting hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganisationType {
    National,
    Region,
    District,
    Facility,
    Partner,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationProfile {
    pub id: RecordId,
    pub name: String,
    pub short_name: Option<String>,
    pub code: String,
    pub organisation_type: OrganisationType,
    /// ISO 3166-1 alpha-2 country code.
    pub country: Option<String>,
    pub contact_email: Option<String>,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl OrganisationProfile {
    pub fn new(input: CreateOrganisationProfile) -> Self {
        Self {
            id: input.id.unwrap_or_default(),
            name: input.name,
            short_name: input.short_name,
            code: input.code,
            organisation_type: input.organisation_type,
            country: input.country,
            contact_email: input.contact_email,
            timestamps: Timestamps::now(),
        }
    }
}

impl Record for OrganisationProfile {
    const RESOURCE: &'static str = "organisation_profiles";
    const ID_FIELD: &'static str = "id";

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganisationProfile {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(length(max = 50))]
    pub short_name: Option<String>,
    #[validate(length(min = 1, max = 32))]
    pub code: String,
    pub organisation_type: OrganisationType,
    #[validate(length(equal = 2))]
    pub country: Option<String>,
    #[validate(email)]
    pub contact_email: Option<String>,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganisationProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 50))]
    pub short_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 32))]
    pub code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organisation_type: Option<OrganisationType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(equal = 2))]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(email)]
    pub contact_email: Option<String>,
}

// ---------------------------------------------------------------------------
// Organisation location
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganisationLocation {
    pub id: RecordId,
    pub organisation_id: String,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub address: Option<String>,
    pub is_primary: bool,
    #[serde(flatten)]
    pub timestamps: Timestamps,
}

impl OrganisationLocation {
    pub fn new(organisation_id: &str, input: CreateOrganisationLocation) -> Self {
        Self {
            id: input.id.unwrap_or_default(),
            organisation_id: organisation_id.to_string(),
            name: input.name,
            latitude: input.latitude,
            longitude: input.longitude,
            address: input.address,
            is_primary: input.is_primary,
            timestamps: Timestamps::now(),
        }
    }
}

impl Record for OrganisationLocation {
    const RESOURCE: &'static str = "organisation_locations";
    const ID_FIELD: &'static str = "id";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["organisationId"];

    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn timestamps_mut(&mut self) -> &mut Timestamps {
        &mut self.timestamps
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrganisationLocation {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
    pub id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrganisationLocation {
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(min = 1, max = 200))]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[validate(length(max = 500))]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_primary: Option<bool>,
}

/// Body of `POST /organisations/{organisation_id}/boundary-check`.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct BoundaryCheckRequest {
    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,
}
