//! Typed records and request DTOs, one module per resource family.

pub mod comment;
pub mod organisation;
pub mod space;
