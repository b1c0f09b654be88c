pub mod admin;
pub mod catalog;
pub mod lesson;
pub mod session;
