//! Error types for paneless
//!
//! This module defines custom error types used throughout the application.
//! We use thiserror for convenient error type definitions and anyhow for
//! application-level error handling.

use thiserror::Error;

/// Main error type for paneless
#[derive(Error, Debug)]
pub enum PanelessError {
    /// Window-related errors
    #[error("Window error: {0}")]
    Window(String),

    /// Renderer errors
    #[error("Renderer error: {0}")]
    Renderer(String),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for Results in paneless
pub type Result<T> = std::result::Result<T, PanelessError>;

/// Extension trait for converting other errors to PanelessError
pub trait IntoShellError<T> {
    /// Convert this error into a PanelessError with the given context
    fn window_err(self, context: &str) -> Result<T>;
    fn renderer_err(self, context: &str) -> Result<T>;
}

impl<T, E: std::fmt::Display> IntoShellError<T> for std::result::Result<T, E> {
    fn window_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PanelessError::Window(format!("{}: {}", context, e)))
    }

    fn renderer_err(self, context: &str) -> Result<T> {
        self.map_err(|e| PanelessError::Renderer(format!("{}: {}", context, e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PanelessError::Window("Failed to create window".to_string());
        assert_eq!(err.to_string(), "Window error: Failed to create window");

        let err = PanelessError::Config("bad dimensions".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad dimensions");
    }

    #[test]
    fn test_into_shell_error_trait() {
        let result: std::result::Result<(), &str> = Err("Something went wrong");
        let converted = result.renderer_err("Creating surface");

        match converted {
            Err(PanelessError::Renderer(msg)) => {
                assert_eq!(msg, "Creating surface: Something went wrong");
            }
            _ => panic!("Expected Renderer error"),
        }
    }
}
