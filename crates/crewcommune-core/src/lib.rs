//! DOM-free core of the Crew Commune site.
//!
//! Everything in here runs on the host as well as in the browser, so the
//! navigation model and the motion primitives can be tested with plain
//! `cargo test`:
//!
//! - [`PageId`], [`Navigator`], [`Viewport`] - page identity and the single
//!   navigation entry point
//! - [`LoadingGate`] - one-shot splash dismissal
//! - [`PagePresence`] - enter/exit choreography between pages
//! - [`ImageSource`] - placeholder fallback for broken images
//! - [`motion`] - easing, tweens, springs, scroll mapping and text reveal

mod error;
mod image;
mod loading;
pub mod motion;
mod page;
mod presence;

pub use error::MotionError;
pub use image::ImageSource;
pub use loading::LoadingGate;
pub use page::{Navigator, PageId, Viewport};
pub use presence::{ClipInset, PageChoreography, PagePresence, TransitionPhase};
