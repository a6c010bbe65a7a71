//! Site chrome around the active page.
//!
//! - [`Header`] - fixed navigation bar with mobile drawer
//! - [`Footer`] - links, newsletter form and copyright
//! - [`CustomCursor`] - spring-following pointer disc
//! - [`Marquee`] - looping banner drifting with scroll

mod cursor;
mod footer;
mod header;
mod marquee;

pub use cursor::CustomCursor;
pub use footer::Footer;
pub use header::Header;
pub use marquee::Marquee;
