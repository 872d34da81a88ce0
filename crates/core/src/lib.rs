//! Domain building blocks for the HMIS mock API.
//!
//! Everything here is free of HTTP and storage concerns: wire query parsing,
//! paginated envelope assembly, the error catalogue and the randomized
//! boundary sampler.

pub mod boundary;
pub mod error;
pub mod error_codes;
pub mod pagination;
pub mod query;
pub mod types;
