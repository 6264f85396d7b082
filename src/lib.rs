pub mod app;
pub mod config;
pub mod handlers;
pub mod headers;
pub mod layers;
pub mod models;
pub mod sinks;
pub mod utils;
