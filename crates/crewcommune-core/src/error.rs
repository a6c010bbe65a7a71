//! Error types for the core crate.

use thiserror::Error;

/// Rejected animation parameters.
///
/// Raised when a [`TransitionConfig`](crate::motion::TransitionConfig) or
/// [`SpringConfig`](crate::motion::SpringConfig) is built from values the
/// interpolators cannot work with.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MotionError {
    /// Duration is negative, NaN or infinite.
    #[error("invalid duration: {0}ms")]
    InvalidDuration(f64),
    /// Delay is negative, NaN or infinite.
    #[error("invalid delay: {0}ms")]
    InvalidDelay(f64),
    /// Range endpoints are not finite.
    #[error("invalid property range: {from} -> {to}")]
    InvalidRange { from: f64, to: f64 },
    /// Bezier x control points must stay within [0, 1].
    #[error("cubic-bezier x control points out of [0, 1]: ({x1}, {x2})")]
    InvalidBezier { x1: f64, x2: f64 },
    /// Stiffness, damping or mass is not strictly positive.
    #[error("invalid spring parameter `{name}`: {value}")]
    InvalidSpring { name: &'static str, value: f64 },
}
