pub mod activity;
pub mod line_item;
pub mod progress;
pub mod project;
pub mod resource;
pub mod session;
pub mod user;
