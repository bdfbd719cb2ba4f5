//! Input/output, configuration and error handling

/// Command-line parsing and command execution
pub mod cli;
/// Constants and defaults
pub mod configuration;
/// Crate error type
pub mod error;
/// Font file loading
pub mod font;
/// Image loading and PNG export
pub mod image;
/// Render progress display
pub mod progress;
/// Style parameters and TOML loading
pub mod style;
