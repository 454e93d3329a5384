pub mod about;
pub mod project;
