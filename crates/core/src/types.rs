/// Record identifiers are opaque strings (UUIDs for generated ids).
pub type RecordId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;
