//! Error types for the reelbox plugin.
//!
//! This module defines the centralized error type [`ReelboxError`] and a type alias
//! [`Result`]. Only the edges of the plugin are fallible (catalog I/O, theme
//! loading, worker IPC); the filter and selection state machines never return
//! errors.

use thiserror::Error;

/// The main error type for reelbox operations.
///
/// # Examples
///
/// ```
/// use reelbox::domain::ReelboxError;
///
/// fn read_catalog() -> Result<(), ReelboxError> {
///     Err(ReelboxError::Catalog("catalog file is empty".to_string()))
/// }
///
/// assert!(read_catalog().is_err());
/// ```
#[derive(Debug, Error)]
pub enum ReelboxError {
    /// The catalog could not be found, read, or parsed.
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Communication with the background worker failed.
    #[error("Worker communication error: {0}")]
    Worker(String),

    /// Configuration is invalid or missing.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for reelbox operations.
pub type Result<T> = std::result::Result<T, ReelboxError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ReelboxError::Catalog("duplicate id 3".to_string());
        assert_eq!(err.to_string(), "Catalog error: duplicate id 3");
    }

    #[test]
    fn test_io_error_converts() {
        fn fails() -> Result<()> {
            Err(std::io::Error::new(std::io::ErrorKind::NotFound, "gone"))?;
            Ok(())
        }

        assert!(matches!(fails(), Err(ReelboxError::Io(_))));
    }
}
