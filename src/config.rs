//! Application configuration.
//!
//! Centralizes all configuration constants used throughout the application.
//! Site copy is loaded at compile time using `include_str!` and parsed into
//! [`SiteContent`](crate::models::SiteContent) on startup.

// =============================================================================
// Text Assets (loaded at compile time)
// =============================================================================

/// Copy, image paths and card data for every page.
pub const SITE_CONTENT: &str = include_str!("../assets/content/site.toml");

// =============================================================================
// Application Metadata
// =============================================================================

/// Brand name shown in the header, footer and loading splash.
pub const APP_NAME: &str = "CREW COMMUNE";

/// Footer tagline.
pub const APP_TAGLINE: &str = "Innovating Success. Empowering Athletes.";

/// Legal name used in the copyright line.
pub const COMPANY_NAME: &str = "Crew Commune";

// =============================================================================
// Loading Splash
// =============================================================================

/// How long the splash covers the site after the first mount.
pub const LOADING_SPLASH_MS: u32 = 2000;

// =============================================================================
// Layout
// =============================================================================

/// Scroll offset after which the header gets its solid background.
pub const HEADER_SCROLL_THRESHOLD_PX: f64 = 20.0;

/// Media query for pointer-driven effects (cursor, hero followers).
pub const DESKTOP_MEDIA_QUERY: &str = "(min-width: 768px)";

/// Scroll-linked motion tuning.
pub mod scroll {
    /// Parallax images travel between -N% and +N% of their height.
    pub const PARALLAX_RANGE_PERCENT: f64 = 20.0;
    /// Window scroll distance over which the marquee drifts by
    /// [`MARQUEE_DRIFT_PERCENT`].
    pub const MARQUEE_DRIFT_SCROLL_PX: f64 = 1000.0;
    pub const MARQUEE_DRIFT_PERCENT: f64 = -10.0;
    /// Seconds for one marquee loop.
    pub const MARQUEE_SPEED_S: f64 = 40.0;
}

// =============================================================================
// Assets
// =============================================================================

/// Placeholder images swapped in when an asset fails to load.
pub mod placeholders {
    pub const IMAGE: &str = "https://placehold.co/600x400/333333/555555?text=Image";
    pub const FOLLOWER: &str = "https://placehold.co/300x400/333333/555555?text=Image";
    pub const SERVICE_CARD: &str = "https://placehold.co/400x450/1C1C1C/BFFF00?text=Service";
    pub const EVENT: &str = "https://placehold.co/1920x1080/333333/555555?text=Event+Image";
}

/// Hero background video.
pub mod hero {
    pub const VIDEO_SRC: &str = "./crewhero.mp4";
    pub const VIDEO_POSTER: &str = "https://images.unsplash.com/photo-1506146332389-18140e7f702d?w=800&auto=format&fit=crop&q=60";
}

// =============================================================================
// UI Configuration
// =============================================================================

/// Icon theme selection.
///
/// Available themes:
/// - `Bootstrap` - Familiar, slightly bolder (default)
/// - `Lucide` - Minimal, thin strokes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[allow(dead_code)]
pub enum IconTheme {
    #[default]
    Bootstrap,
    Lucide,
}

/// Current icon theme used throughout the application.
/// Change this value to switch icon styles globally.
pub const ICON_THEME: IconTheme = IconTheme::Lucide;
