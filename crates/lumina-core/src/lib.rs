//! Shared service plumbing for the Lumina portal.
//!
//! Tracing setup, request-id middleware, health handlers, and serde helpers.

pub mod health;
pub mod middleware;
pub mod serde;
pub mod tracing;
