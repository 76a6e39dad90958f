//! relocate - move the active file into another project folder
//!
//! This library exposes modules for use in integration tests.

pub mod adapters;
pub mod cli;
pub mod cli_output;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod models;
pub mod mover;
pub mod state;
pub mod terminal;
pub mod traits;
pub mod ui;
pub mod workspace;
