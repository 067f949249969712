//! CLI module - Command-line interface for the application.
//!
//! Provides commands for:
//! - `serve` - Start the HTTP server
//! - `hash` - Hash a password with the configured cost parameters

pub mod args;

pub use args::{Cli, Commands};
