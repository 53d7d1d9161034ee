pub mod auth;
pub mod options;
pub mod planning;
pub mod progress;
pub mod projects;
