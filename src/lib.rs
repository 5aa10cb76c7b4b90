pub mod api;
pub mod chunker;
pub mod config;
pub mod errors;
pub mod pdf;
pub mod qa;
