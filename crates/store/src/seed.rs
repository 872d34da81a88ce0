//! Deterministic demo fixtures loaded at startup.
//!
//! Timestamps are spaced one hour apart, counting back from `now`, so the
//! default `createdAt desc` listing shows records in a fixed order.

use chrono::Duration;
use hmis_core::types::Timestamp;

use crate::models::comment::Comment;
use crate::models::organisation::{OrganisationLocation, OrganisationProfile, OrganisationType};
use crate::models::space::{Space, SpaceVisibility};
use crate::record::Timestamps;
use crate::resource::ResourceStore;
use crate::Store;

pub const DEMO_DASHBOARD_UUID: &str = "5f0e7c9a-1d2b-4c3e-9f10-aa0000000001";
pub const DEMO_ORGANISATION_ID: &str = "7b1c2d3e-4f50-4a61-8b72-bb0000000001";
pub const SECOND_ORGANISATION_ID: &str = "7b1c2d3e-4f50-4a61-8b72-bb0000000002";

fn stamp(now: Timestamp, hours_ago: i64) -> Timestamps {
    Timestamps::at(now - Duration::hours(hours_ago))
}

/// Build a store pre-populated with demo records.
pub fn demo_store(now: Timestamp) -> Store {
    let organisation_profiles = vec![
        OrganisationProfile {
            id: DEMO_ORGANISATION_ID.into(),
            name: "Ministry of Health".into(),
            short_name: Some("MoH".into()),
            code: "MOH".into(),
            organisation_type: OrganisationType::National,
            country: Some("KE".into()),
            contact_email: Some("info@health.example.org".into()),
            timestamps: stamp(now, 48),
        },
        OrganisationProfile {
            id: SECOND_ORGANISATION_ID.into(),
            name: "Kisumu County Referral Hospital".into(),
            short_name: Some("KCRH".into()),
            code: "KCRH-042".into(),
            organisation_type: OrganisationType::Facility,
            country: Some("KE".into()),
            contact_email: None,
            timestamps: stamp(now, 47),
        },
    ];

    let organisation_locations = vec![
        OrganisationLocation {
            id: "c3d4e5f6-0000-4000-8000-cc0000000001".into(),
            organisation_id: DEMO_ORGANISATION_ID.into(),
            name: "Headquarters".into(),
            latitude: -1.2921,
            longitude: 36.8219,
            address: Some("Afya House, Cathedral Road, Nairobi".into()),
            is_primary: true,
            timestamps: stamp(now, 46),
        },
        OrganisationLocation {
            id: "c3d4e5f6-0000-4000-8000-cc0000000002".into(),
            organisation_id: SECOND_ORGANISATION_ID.into(),
            name: "Main campus".into(),
            latitude: -0.0917,
            longitude: 34.768,
            address: None,
            is_primary: true,
            timestamps: stamp(now, 45),
        },
        OrganisationLocation {
            id: "c3d4e5f6-0000-4000-8000-cc0000000003".into(),
            organisation_id: SECOND_ORGANISATION_ID.into(),
            name: "Outreach clinic".into(),
            latitude: -0.1022,
            longitude: 34.7617,
            address: None,
            is_primary: false,
            timestamps: stamp(now, 44),
        },
    ];

    let spaces = [
        ("Maternal health", SpaceVisibility::Public),
        ("Immunisation coverage", SpaceVisibility::Public),
        ("Facility reporting rates", SpaceVisibility::Private),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (name, visibility))| Space {
        uuid: format!("9a8b7c6d-0000-4000-8000-dd000000000{}", i + 1),
        name: name.into(),
        description: None,
        visibility,
        owner_id: None,
        timestamps: stamp(now, 30 - i as i64),
    })
    .collect();

    let comments = [
        ("Amina Otieno", "ANC4 coverage dropped in Q3, can we check the district breakdown?"),
        ("Brian Mwangi", "Reporting rate for Kisumu is still below 80%."),
        ("Amina Otieno", "Resolved after the data import on Monday."),
    ]
    .into_iter()
    .enumerate()
    .map(|(i, (author, content))| Comment {
        uuid: format!("1e2f3a4b-0000-4000-8000-ee000000000{}", i + 1),
        dashboard_uuid: DEMO_DASHBOARD_UUID.into(),
        visualization_uuid: None,
        content: content.into(),
        author: author.into(),
        resolved: i == 2,
        timestamps: stamp(now, 10 - i as i64),
    })
    .collect();

    Store {
        comments: ResourceStore::with_records(comments),
        spaces: ResourceStore::with_records(spaces),
        organisation_profiles: ResourceStore::with_records(organisation_profiles),
        organisation_locations: ResourceStore::with_records(organisation_locations),
    }
}
