//! Error types for Lumen

use thiserror::Error;

use crate::elements::ElementRole;

/// Main error type for page controller operations
#[derive(Error, Debug)]
pub enum PageError {
    /// A required page element was never located
    #[error("Required element missing: {0}")]
    MissingElement(ElementRole),

    /// Configuration failed validation
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// A theme carried a malformed color value
    #[error("Invalid theme: {0}")]
    InvalidTheme(String),

    /// Palette has no themes to cycle through
    #[error("Theme palette is empty")]
    EmptyPalette,

    /// Subscriber could not be installed
    #[error("Logging error: {0}")]
    Logging(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file could not be parsed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using PageError
pub type PageResult<T> = Result<T, PageError>;
