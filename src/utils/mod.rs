//! Browser helpers.
//!
//! - [`dom`] - window access, scroll reset, element geometry, cursor targets

pub mod dom;

pub use dom::BrowserViewport;
