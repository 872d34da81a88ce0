//! Request extractors and middleware shared by the API routes.
//!
//! - [`tenant::TenantId`] -- Requires the `X-Tenant-ID` header.
//! - [`json::ValidJson`] -- Parses and validates a JSON body.
//! - [`latency::simulate_latency`] -- Adds configurable artificial latency.
//! - [`recovery`] -- Error payloads for panics and timeouts.

pub mod json;
pub mod latency;
pub mod recovery;
pub mod tenant;
