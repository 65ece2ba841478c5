pub mod project;
pub mod regenerate;
