//! Auth types shared across Lumina crates.
//!
//! Provides the opaque `BearerToken`, the `MaybeToken` extractor, and
//! session-cookie clearing for logout.

pub mod cookie;
pub mod token;
