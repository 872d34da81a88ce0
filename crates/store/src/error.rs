use hmis_core::types::RecordId;

/// Failures raised by a [`ResourceStore`](crate::resource::ResourceStore).
///
/// An absent record is not an error; lookups return `Option` instead.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// A client-supplied identifier is already taken.
    #[error("{resource} with id {id} already exists")]
    Duplicate {
        resource: &'static str,
        id: RecordId,
    },

    /// A merged record no longer deserializes into its typed shape.
    #[error("{resource} record does not match its schema: {source}")]
    Shape {
        resource: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// A record serialized to something other than a JSON object.
    #[error("{resource} record is not a JSON object")]
    NotAnObject { resource: &'static str },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
