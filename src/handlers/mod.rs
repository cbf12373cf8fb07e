pub mod actions;
pub mod projects;
