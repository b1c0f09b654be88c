//! Domain enumerations shared across Lumina crates.
//!
//! This crate contains only pure types with no framework dependencies, so
//! every layer can depend on it without dragging the web stack along.

pub mod course;
pub mod enrollment;
pub mod user;
