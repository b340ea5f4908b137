//! Utility module for paneless
//!
//! Common utilities used throughout the application:
//! - Error handling with custom error types
//! - Window configuration

pub mod config;
pub mod error;

// Re-export commonly used items
pub use config::WindowConfig;
