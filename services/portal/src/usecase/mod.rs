pub mod analytics;
pub mod catalog;
pub mod enrollment;
pub mod gate;
pub mod lesson;
pub mod live;
pub mod moderation;
pub mod roster;
pub mod session;
