//! HTTP server for the poker league backend.

pub mod api;
pub mod config;
