//! Configuration for paneless
//!
//! The shell deliberately has no config files, CLI flags, or environment
//! overrides: everything observable is fixed at construction. What remains
//! is a small validated struct describing the window.

use crate::utils::error::{PanelessError, Result};

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Initial window width in pixels
    pub width: u32,

    /// Initial window height in pixels
    pub height: u32,

    /// Window title
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 750,
            height: 500,
            title: "Demo Window".to_string(),
        }
    }
}

impl WindowConfig {
    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PanelessError::Config(
                "Window dimensions must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = WindowConfig::default();
        assert_eq!(config.width, 750);
        assert_eq!(config.height, 500);
        assert_eq!(config.title, "Demo Window");
    }

    #[test]
    fn test_config_validation() {
        let mut config = WindowConfig::default();
        assert!(config.validate().is_ok());

        config.width = 0;
        assert!(config.validate().is_err());

        config.width = 750;
        config.height = 0;
        assert!(config.validate().is_err());
    }
}
