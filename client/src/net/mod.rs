//! Networking for the single `/dayboard` round trip.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the request, `types` defines the wire schema, and `error`
//! carries the one failure kind surfaced to the page.

pub mod api;
pub mod error;
pub mod types;
