//! In-memory collection for a single resource.

use std::collections::BTreeSet;

use hmis_core::pagination::Page;
use hmis_core::query::{Filter, ListQuery};
use hmis_core::types::RecordId;
use serde_json::{Map, Value};
use tokio::sync::RwLock;

use crate::error::StoreError;
use crate::record::{compare_values, matches_filter, project, Record};

/// Result of a bulk delete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteOutcome {
    /// True only when every requested id was found and removed.
    pub success: bool,
    /// Number of records actually removed.
    pub removed: usize,
}

/// Ordered, mutable collection of one resource's records.
///
/// Records keep insertion order. Every operation takes the collection lock
/// for its full duration, so operations on one resource are linearizable even
/// when handlers run on several runtime threads.
pub struct ResourceStore<T: Record> {
    records: RwLock<Vec<T>>,
}

impl<T: Record> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> ResourceStore<T> {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Create a collection pre-populated with `records`, kept verbatim
    /// (no id generation, no timestamp stamping).
    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: RwLock::new(records),
        }
    }

    pub fn name(&self) -> &'static str {
        T::RESOURCE
    }

    /// Number of records currently held.
    pub async fn count(&self) -> usize {
        self.records.read().await.len()
    }

    /// All records matching every pair in `filter`, in insertion order.
    pub async fn find_all(&self, filter: &Filter) -> Result<Vec<T>, StoreError> {
        let records = self.records.read().await;
        let mut matched = Vec::new();
        for record in records.iter() {
            if matches_filter(&project(record)?, filter) {
                matched.push(record.clone());
            }
        }
        Ok(matched)
    }

    /// Filter, stable-sort and slice according to `query`.
    ///
    /// Records with equal sort keys keep insertion order in both directions.
    /// `total` counts every match before slicing.
    pub async fn find_paginated(&self, query: &ListQuery) -> Result<Page<T>, StoreError> {
        let records = self.records.read().await;

        let mut matched: Vec<(Map<String, Value>, &T)> = Vec::new();
        for record in records.iter() {
            let object = project(record)?;
            if matches_filter(&object, &query.filter) {
                matched.push((object, record));
            }
        }

        let ascending = query.order.is_ascending();
        matched.sort_by(|(a, _), (b, _)| {
            let ordering = compare_values(a.get(&query.sort), b.get(&query.sort));
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });

        let total = matched.len() as u64;
        let per_page = usize::try_from(query.per_page).unwrap_or(usize::MAX);
        let data = matched
            .into_iter()
            .skip(query.offset())
            .take(per_page)
            .map(|(_, record)| record.clone())
            .collect();

        Ok(Page { data, total })
    }

    /// Look up a record by identifier.
    pub async fn find(&self, id: &str) -> Option<T> {
        self.records
            .read()
            .await
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    /// Append a record, generating its identifier when empty and stamping
    /// both timestamps.
    pub async fn create(&self, mut record: T) -> Result<T, StoreError> {
        let mut records = self.records.write().await;

        if record.id().is_empty() {
            record.set_id(uuid::Uuid::new_v4().to_string());
        } else if records.iter().any(|existing| existing.id() == record.id()) {
            return Err(StoreError::Duplicate {
                resource: T::RESOURCE,
                id: record.id().to_string(),
            });
        }

        let now = chrono::Utc::now();
        let timestamps = record.timestamps_mut();
        timestamps.created_at = now;
        timestamps.updated_at = now;

        records.push(record.clone());
        tracing::debug!(resource = T::RESOURCE, id = record.id(), "Record created");
        Ok(record)
    }

    /// Merge `patch` into the record with `id`.
    ///
    /// Identifier, timestamps and [`Record::IMMUTABLE_FIELDS`] are never
    /// overwritten. Returns `Ok(None)` when no record has that id.
    pub async fn update(
        &self,
        id: &str,
        patch: Map<String, Value>,
    ) -> Result<Option<T>, StoreError> {
        let mut records = self.records.write().await;
        let Some(slot) = records.iter_mut().find(|record| record.id() == id) else {
            return Ok(None);
        };

        let mut object = project(&*slot)?;
        for (field, value) in patch {
            if T::is_patchable(&field) {
                object.insert(field, value);
            }
        }

        let mut updated: T =
            serde_json::from_value(Value::Object(object)).map_err(|source| StoreError::Shape {
                resource: T::RESOURCE,
                source,
            })?;
        updated.timestamps_mut().updated_at = chrono::Utc::now();

        *slot = updated.clone();
        tracing::debug!(resource = T::RESOURCE, id, "Record updated");
        Ok(Some(updated))
    }

    /// Remove every record whose id is in `ids`.
    pub async fn delete(&self, ids: &[RecordId]) -> DeleteOutcome {
        let requested: BTreeSet<&str> = ids.iter().map(String::as_str).collect();
        let mut found: BTreeSet<String> = BTreeSet::new();

        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|record| {
            if requested.contains(record.id()) {
                found.insert(record.id().to_string());
                false
            } else {
                true
            }
        });
        let removed = before - records.len();

        tracing::debug!(resource = T::RESOURCE, removed, "Records deleted");
        DeleteOutcome {
            success: found.len() == requested.len(),
            removed,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
