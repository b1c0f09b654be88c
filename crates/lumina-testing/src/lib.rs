//! Test utilities for the Lumina portal.
//!
//! Provides `MockAuth` header helpers and `StubBackend`, an in-process
//! envelope-speaking HTTP server. Import in `#[cfg(test)]` blocks and
//! dev-dependencies only — never in production code.

pub mod auth;
pub mod backend;
