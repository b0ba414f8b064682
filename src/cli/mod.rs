//! CLI layer for libcat
//!
//! This module contains the command-line interface:
//!
//! - [`app`] - CLI definitions and entry point
//! - [`commands`] - Command implementations
//! - [`menu`] - The interactive menu loop

pub mod app;
pub mod commands;
pub mod menu;

// Re-export main entry point
pub use app::run;
