//! Motion primitives.
//!
//! - [`Easing`] - timing curves (named and cubic bezier)
//! - [`TransitionConfig`], [`Tween`] - validated timed transitions
//! - [`Spring`], [`Spring2`] - damped springs for pointer-following
//! - [`scroll`] - scroll progress and range mapping
//! - [`reveal`] - word/line reveal planning and the viewport trigger
//! - [`CursorVariant`] - custom cursor looks
//! - [`presets`] - the site's choreography

mod cursor;
mod easing;
pub mod presets;
pub mod reveal;
pub mod scroll;
mod spring;
mod transition;

pub use cursor::{CursorStyle, CursorVariant};
pub use easing::Easing;
pub use reveal::{RevealMode, RevealPlan, RevealUnit, ViewportTrigger};
pub use spring::{Spring, Spring2, SpringConfig};
pub use transition::{PropertyRange, TransitionConfig, Tween};
