pub mod api;
pub mod cache;
pub mod comment;
pub mod config;
pub mod model;
