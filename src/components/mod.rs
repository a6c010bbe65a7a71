//! UI components built with Leptos.
//!
//! - [`router`] - page presenter (clip-region wipe between pages)
//! - [`splash`] - loading screen shown before first render
//! - [`layout`] - header, footer, custom cursor, marquee
//! - [`motion`] - text, block and image reveal building blocks
//! - [`pages`] - the five pages
//! - [`icons`] - Centralized icon definitions (change theme here)

pub mod icons;
pub mod layout;
pub mod motion;
pub mod pages;
pub mod router;
pub mod splash;
