//! Library surface for the streamgate binary and its integration tests.

pub mod cli;
pub mod config;
pub mod models;
pub mod scrape;
pub mod server;
