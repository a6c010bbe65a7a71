//! Custom error types for the application.
//!
//! - [`ContentError`] - bundled site content could not be loaded
//!
//! Animation parameter errors live in the core crate as
//! [`MotionError`](crewcommune_core::MotionError).

use thiserror::Error;

/// Bundled site content errors.
///
/// The content ships inside the binary, so these only surface when the
/// TOML is edited into an invalid shape. They are rendered by the root
/// error boundary.
#[derive(Debug, Error)]
pub enum ContentError {
    /// TOML syntax or schema error.
    #[error("failed to parse site content: {0}")]
    Parse(#[from] toml::de::Error),
    /// A list the layout relies on is empty.
    #[error("site content has no entries for `{0}`")]
    Empty(&'static str),
}
