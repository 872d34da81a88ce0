//! In-memory resource store for the HMIS mock API.
//!
//! [`Store`] owns one [`ResourceStore`] per resource name. It is built once at
//! startup and shared with handlers through application state.

use std::collections::BTreeMap;

pub mod error;
pub mod models;
pub mod record;
pub mod resource;
pub mod seed;

pub use error::StoreError;
pub use record::Record;
pub use resource::{DeleteOutcome, ResourceStore};

use models::comment::Comment;
use models::organisation::{OrganisationLocation, OrganisationProfile};
use models::space::Space;

/// Every mocked resource collection.
#[derive(Default)]
pub struct Store {
    pub comments: ResourceStore<Comment>,
    pub spaces: ResourceStore<Space>,
    pub organisation_profiles: ResourceStore<OrganisationProfile>,
    pub organisation_locations: ResourceStore<OrganisationLocation>,
}

impl Store {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records held per resource name.
    pub async fn resource_counts(&self) -> BTreeMap<&'static str, usize> {
        BTreeMap::from([
            (self.comments.name(), self.comments.count().await),
            (self.spaces.name(), self.spaces.count().await),
            (
                self.organisation_profiles.name(),
                self.organisation_profiles.count().await,
            ),
            (
                self.organisation_locations.name(),
                self.organisation_locations.count().await,
            ),
        ])
    }
}
