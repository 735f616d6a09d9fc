pub mod dashboard;
pub mod settings;
pub mod workspace;
