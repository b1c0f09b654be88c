//! sea-orm entities owned by the portal.

pub mod enrollments;
pub mod users;
