//! Error types for the navkit crate.
//!
//! This module defines the centralized error type [`NavError`] and a type alias
//! [`Result`] for convenient error handling throughout the crate. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Signal handling itself has no recoverable error conditions; errors arise only
//! at the edges (configuration files, replay scripts, trace I/O).

use thiserror::Error;

/// The main error type for navkit operations.
///
/// This enum consolidates the error conditions that can occur at the crate's
/// edges: loading configuration, reading replay scripts, and trace file I/O.
/// Variants wrapping underlying errors use `#[from]` for automatic conversion.
#[derive(Debug, Error)]
pub enum NavError {
    /// Configuration is invalid or missing.
    ///
    /// Occurs when a configuration file cannot be parsed or contains
    /// malformed values. The string describes the specific problem.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Filesystem or I/O operation failed.
    ///
    /// Wraps errors from standard library I/O operations. Automatically converts
    /// from `std::io::Error` using the `#[from]` attribute.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A replay script line could not be parsed.
    ///
    /// Produced by the replay harness when a signal script contains a line
    /// that is not a recognized signal step.
    #[error("Script error: {0}")]
    Script(String),
}

/// A specialized `Result` type for navkit operations.
///
/// This is a type alias for `std::result::Result<T, NavError>` that simplifies
/// function signatures throughout the codebase.
pub type Result<T> = std::result::Result<T, NavError>;
