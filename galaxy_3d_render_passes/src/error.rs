//! Error types for the Galaxy3D render passes
//!
//! Render passes never propagate errors out of `render()`: graphics API
//! failures are detected through `GraphicsState::check_error()` and logged,
//! then rendering continues best-effort. These types carry the reports.

use std::fmt;

/// Result type for Galaxy3D render pass operations
pub type Result<T> = std::result::Result<T, Error>;

/// Galaxy3D render pass errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Error reported by the graphics API (e.g. a pending GL error code)
    GraphicsApiError(String),

    /// Backend-specific error raised by a collaborator or a pass callback
    BackendError(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::GraphicsApiError(msg) => write!(f, "Graphics API error: {}", msg),
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
