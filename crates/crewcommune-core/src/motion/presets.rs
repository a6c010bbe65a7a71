//! Built-in choreography used across the site.
//!
//! Ranges are in the unit of the property they drive: percent for clip
//! insets and translations expressed in %, pixels for pixel offsets, plain
//! fractions for opacity.

use super::easing::Easing;
use super::spring::SpringConfig;
use super::transition::{PropertyRange, TransitionConfig};

/// Curve shared by the page wipe.
pub const PAGE_WIPE_EASE: Easing = Easing::CubicBezier(0.65, 0.0, 0.35, 1.0);
/// Curve of blocks sliding in on scroll.
pub const REVEAL_EASE: Easing = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);

pub const PAGE_WIPE_MS: f64 = 800.0;
/// Head start the outgoing page gets before the incoming one opens.
pub const PAGE_ENTER_DELAY_MS: f64 = 100.0;

pub const WORD_STAGGER_MS: f64 = 80.0;
pub const LINE_STAGGER_MS: f64 = 200.0;
/// Per-card stagger in grids revealed on scroll.
pub const CARD_STAGGER_MS: f64 = 100.0;

/// Scale applied to the pointer offset from the viewport center before it
/// moves the hero images.
pub const FOLLOW_FACTOR: f64 = 0.05;

/// Incoming page: bottom inset 100% -> 0%.
pub const fn page_enter() -> TransitionConfig {
    TransitionConfig::from_parts(
        PAGE_WIPE_MS,
        PAGE_ENTER_DELAY_MS,
        PAGE_WIPE_EASE,
        PropertyRange::new(100.0, 0.0),
    )
}

/// Outgoing page: top inset 0% -> 100%.
pub const fn page_exit() -> TransitionConfig {
    TransitionConfig::from_parts(
        PAGE_WIPE_MS,
        0.0,
        PAGE_WIPE_EASE,
        PropertyRange::new(0.0, 100.0),
    )
}

/// One word rising out of its mask (translateY %).
pub const fn word_unit() -> TransitionConfig {
    TransitionConfig::from_parts(700.0, 0.0, Easing::CircOut, PropertyRange::new(100.0, 0.0))
}

/// One line rising out of its mask (translateY %).
pub const fn line_unit() -> TransitionConfig {
    TransitionConfig::from_parts(
        800.0,
        0.0,
        Easing::CubicBezier(0.6, -0.05, 0.01, 0.99),
        PropertyRange::new(100.0, 0.0),
    )
}

/// Block fading in while sliding up (px).
pub const fn scroll_reveal() -> TransitionConfig {
    TransitionConfig::from_parts(700.0, 0.0, REVEAL_EASE, PropertyRange::new(50.0, 0.0))
}

/// Image uncovered from the bottom (top inset %).
pub const fn image_reveal() -> TransitionConfig {
    TransitionConfig::from_parts(
        1000.0,
        0.0,
        Easing::CubicBezier(0.6, 0.01, 0.05, 0.95),
        PropertyRange::new(100.0, 0.0),
    )
}

/// Hero image popping in after the headline (opacity).
pub const fn follower_entry() -> TransitionConfig {
    TransitionConfig::from_parts(800.0, 1000.0, REVEAL_EASE, PropertyRange::new(0.0, 1.0))
}

/// Brand name on the loading splash (translateY px).
pub const fn splash_text() -> TransitionConfig {
    TransitionConfig::from_parts(800.0, 200.0, Easing::EaseInOut, PropertyRange::new(20.0, 0.0))
}

/// FAQ answer expanding (opacity).
pub const fn accordion() -> TransitionConfig {
    TransitionConfig::from_parts(400.0, 0.0, Easing::EaseInOut, PropertyRange::new(0.0, 1.0))
}

/// Header sliding down on first render (translateY px).
pub const fn header_enter() -> TransitionConfig {
    TransitionConfig::from_parts(500.0, 200.0, Easing::EaseOut, PropertyRange::new(-100.0, 0.0))
}

/// Custom cursor following the pointer.
pub const fn cursor_spring() -> SpringConfig {
    SpringConfig {
        stiffness: 400.0,
        damping: 30.0,
        mass: 0.1,
        rest_delta: 0.01,
        rest_speed: 0.01,
    }
}

/// Hero images drifting after the pointer.
pub const fn follower_spring() -> SpringConfig {
    SpringConfig {
        stiffness: 50.0,
        damping: 10.0,
        mass: 0.8,
        rest_delta: 0.01,
        rest_speed: 0.01,
    }
}

/// Horizontal event gallery smoothing.
pub const fn gallery_spring() -> SpringConfig {
    SpringConfig {
        stiffness: 200.0,
        damping: 50.0,
        mass: 1.0,
        rest_delta: 0.001,
        rest_speed: 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn revalidate(cfg: TransitionConfig) {
        let checked =
            TransitionConfig::new(cfg.duration_ms(), cfg.delay_ms(), cfg.easing(), cfg.range());
        assert_eq!(checked, Ok(cfg));
    }

    #[test]
    fn test_presets_are_valid() {
        for cfg in [
            page_enter(),
            page_exit(),
            word_unit(),
            line_unit(),
            scroll_reveal(),
            image_reveal(),
            follower_entry(),
            splash_text(),
            accordion(),
            header_enter(),
        ] {
            revalidate(cfg);
        }
    }

    #[test]
    fn test_spring_presets_are_valid() {
        for spring in [cursor_spring(), follower_spring(), gallery_spring()] {
            let checked = SpringConfig::new(spring.stiffness, spring.damping, spring.mass);
            assert!(checked.is_ok(), "{:?}", spring);
        }
    }

    #[test]
    fn test_image_reveal_uncovers_from_bottom() {
        let cfg = image_reveal();
        assert_eq!(cfg.range(), PropertyRange::new(100.0, 0.0));
        assert_eq!(cfg.sample(0.0), 100.0);
        assert_eq!(cfg.sample(cfg.total_ms()), 0.0);
        assert_eq!(
            cfg.css_transition("clip-path", 0.0),
            "clip-path 1000ms cubic-bezier(0.6, 0.01, 0.05, 0.95) 0ms"
        );
    }

    #[test]
    fn test_page_wipe_mirrors() {
        let (enter, exit) = (page_enter(), page_exit());
        assert_eq!(enter.duration_ms(), exit.duration_ms());
        assert_eq!(enter.easing(), exit.easing());
        assert_eq!(enter.delay_ms(), 100.0);
        assert_eq!(exit.delay_ms(), 0.0);
        // both end fully open on the side that moves
        assert_eq!(enter.range().to, 0.0);
        assert_eq!(exit.range().to, 100.0);
    }
}
