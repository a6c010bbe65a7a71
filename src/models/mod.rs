//! Data models for the application.
//!
//! - [`SiteContent`] - copy, images and card data for the five pages
//! - [`IconKind`] - icon names content entries may reference

mod content;

pub use content::{Event, HeroImage, IconKind, Milestone, SiteContent};
