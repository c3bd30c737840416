//! Presentation layer for relationship-resolver
//!
//! This crate contains CLI definitions, output formatters,
//! and the progress reporter shown while a summary is pending.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use cli::commands::{Cli, Command};
pub use config::OutputConfig;
pub use output::console::ConsoleFormatter;
pub use output::presenter::EventPresenter;
pub use progress::reporter::ProgressReporter;
