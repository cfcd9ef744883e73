// Library root: re-exports all modules so integration tests and the binary
// can access the crate's public API.

pub mod api;
pub mod app;
pub mod config;
pub mod dashboard;
pub mod model;
pub mod protocol;
pub mod tui;
