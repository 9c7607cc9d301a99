//! Folio - terminal portfolio site with a command palette
//!
//! This library crate exposes internal modules for integration testing.

pub mod config;
pub mod palette;
pub mod site;
pub mod tui;
