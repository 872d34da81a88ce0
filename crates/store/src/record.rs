//! The [`Record`] trait and the JSON projection used for filtering and sorting.
//!
//! Records are typed per resource, but queries address fields by their wire
//! name (`dashboardUuid`, `createdAt`, ...). The store therefore works on each
//! record's serialized JSON object when matching filters and comparing sort
//! keys, and deserializes back into the typed record after a merge.

use std::borrow::Cow;
use std::cmp::Ordering;

use chrono::DateTime;
use hmis_core::query::Filter;
use hmis_core::types::{RecordId, Timestamp};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::StoreError;

/// Wire name of the creation timestamp.
pub const CREATED_AT_FIELD: &str = "createdAt";

/// Wire name of the last-update timestamp.
pub const UPDATED_AT_FIELD: &str = "updatedAt";

/// Creation and last-update timestamps, flattened into every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timestamps {
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Timestamps {
    pub fn at(instant: Timestamp) -> Self {
        Self {
            created_at: instant,
            updated_at: instant,
        }
    }

    pub fn now() -> Self {
        Self::at(chrono::Utc::now())
    }
}

/// A typed record stored in a [`ResourceStore`](crate::resource::ResourceStore).
pub trait Record: Clone + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Resource name, used in logs and error context.
    const RESOURCE: &'static str;

    /// Wire name of the identifier field (`id` or `uuid`).
    const ID_FIELD: &'static str;

    /// Parent-scope fields that a patch must never change.
    const IMMUTABLE_FIELDS: &'static [&'static str] = &[];

    fn id(&self) -> &str;

    fn set_id(&mut self, id: RecordId);

    fn timestamps_mut(&mut self) -> &mut Timestamps;

    /// Whether a patch is allowed to write `field`.
    fn is_patchable(field: &str) -> bool {
        field != Self::ID_FIELD
            && field != CREATED_AT_FIELD
            && field != UPDATED_AT_FIELD
            && !Self::IMMUTABLE_FIELDS.contains(&field)
    }
}

/// Serialize a record into its JSON object form.
pub(crate) fn project<T: Record>(record: &T) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(record)? {
        Value::Object(object) => Ok(object),
        _ => Err(StoreError::NotAnObject {
            resource: T::RESOURCE,
        }),
    }
}

/// Serialize a partial-update DTO into a patch object.
///
/// DTO fields left as `None` must be skipped during serialization so they do
/// not overwrite stored values.
pub fn to_patch<P: Serialize>(partial: &P) -> Result<Map<String, Value>, StoreError> {
    match serde_json::to_value(partial)? {
        Value::Object(object) => Ok(object),
        _ => Err(StoreError::NotAnObject { resource: "patch" }),
    }
}

/// True when every filter pair matches the projected record exactly.
pub(crate) fn matches_filter(object: &Map<String, Value>, filter: &Filter) -> bool {
    filter.iter().all(|(field, expected)| {
        object
            .get(field)
            .and_then(scalar_text)
            .is_some_and(|actual| actual == expected.as_str())
    })
}

/// Textual form of a scalar value; `None` for null, arrays and objects.
fn scalar_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s)),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Ascending comparison of two sort keys.
///
/// Same-typed scalars compare naturally, RFC 3339 strings chronologically.
/// Missing and null keys sort first; other type mismatches fall back to a
/// fixed type rank.
pub(crate) fn compare_values(a: Option<&Value>, b: Option<&Value>) -> Ordering {
    match (a, b) {
        (Some(Value::Bool(x)), Some(Value::Bool(y))) => x.cmp(y),
        (Some(Value::Number(x)), Some(Value::Number(y))) => x
            .as_f64()
            .partial_cmp(&y.as_f64())
            .unwrap_or(Ordering::Equal),
        (Some(Value::String(x)), Some(Value::String(y))) => {
            match (
                DateTime::parse_from_rfc3339(x),
                DateTime::parse_from_rfc3339(y),
            ) {
                (Ok(dx), Ok(dy)) => dx.cmp(&dy),
                _ => x.cmp(y),
            }
        }
        _ => type_rank(a).cmp(&type_rank(b)),
    }
}

fn type_rank(value: Option<&Value>) -> u8 {
    match value {
        None | Some(Value::Null) => 0,
        Some(Value::Bool(_)) => 1,
        Some(Value::Number(_)) => 2,
        Some(Value::String(_)) => 3,
        Some(Value::Array(_)) => 4,
        Some(Value::Object(_)) => 5,
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn object(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn filter_matches_strings_numbers_and_bools() {
        let record = object(json!({"name": "Kisumu", "beds": 40, "active": true}));
        let mut filter = Filter::new();
        filter.insert("name".into(), "Kisumu".into());
        filter.insert("beds".into(), "40".into());
        filter.insert("active".into(), "true".into());
        assert!(matches_filter(&record, &filter));
    }

    #[test]
    fn filter_rejects_missing_null_and_mismatch() {
        let record = object(json!({"name": "Kisumu", "address": null}));
        for (field, value) in [("name", "kisumu"), ("address", "null"), ("missing", "x")] {
            let mut filter = Filter::new();
            filter.insert(field.into(), value.into());
            assert!(!matches_filter(&record, &filter), "{field}={value}");
        }
    }

    #[test]
    fn empty_filter_matches_everything() {
        assert!(matches_filter(&object(json!({})), &Filter::new()));
    }

    #[test]
    fn timestamps_compare_chronologically() {
        // Lexicographically "…00Z" > "…00.5Z", chronologically it is earlier.
        let a = json!("2024-05-01T10:00:00Z");
        let b = json!("2024-05-01T10:00:00.500Z");
        assert_eq!(compare_values(Some(&a), Some(&b)), Ordering::Less);
    }

    #[test]
    fn numbers_compare_numerically() {
        assert_eq!(
            compare_values(Some(&json!(9)), Some(&json!(10))),
            Ordering::Less
        );
    }

    #[test]
    fn missing_values_sort_first() {
        assert_eq!(compare_values(None, Some(&json!("a"))), Ordering::Less);
        assert_eq!(
            compare_values(Some(&Value::Null), Some(&json!(1))),
            Ordering::Less
        );
        assert_eq!(compare_values(None, None), Ordering::Equal);
    }

    #[test]
    fn to_patch_requires_object() {
        assert!(to_patch(&json!({"a": 1})).is_ok());
        assert!(to_patch(&json!([1, 2])).is_err());
    }
}
