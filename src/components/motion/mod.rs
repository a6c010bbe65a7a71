//! Reveal building blocks shared by the pages.
//!
//! - [`AnimatedText`], [`AnimatedTextLines`] - masked word / line reveals
//! - [`ScrollReveal`] - block fade-and-rise on viewport entry
//! - [`AnimatedImage`], [`ParallaxImage`], [`FallbackImage`] - images
//! - [`ImageFollower`] - pointer-following hero image
//! - [`AccordionItem`] - collapsible FAQ row
//!
//! Every component here is independent of navigation state.

mod accordion;
mod follower;
mod image;
mod reveal;
mod text;

pub use accordion::AccordionItem;
pub use follower::ImageFollower;
pub use image::{AnimatedImage, FallbackImage, ParallaxImage};
pub use reveal::ScrollReveal;
pub use text::{AnimatedText, AnimatedTextLines};

use crewcommune_core::motion::ViewportTrigger;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{
    UseIntersectionObserverOptions, use_intersection_observer_with_options,
};

// ============================================================================
// Hooks
// ============================================================================

/// Track whether `target` has crossed `threshold` of visibility.
///
/// With `once` the result latches on the first crossing. The observer is
/// released together with the calling component.
pub fn use_in_view(target: NodeRef<html::Div>, once: bool, threshold: f64) -> Memo<bool> {
    let trigger = RwSignal::new(ViewportTrigger::new(once, threshold));
    let threshold = trigger.with_untracked(|t| t.threshold());

    let _ = use_intersection_observer_with_options(
        target,
        move |entries: Vec<web_sys::IntersectionObserverEntry>, _| {
            if trigger.with_untracked(|t| t.is_done()) {
                return;
            }
            if let Some(entry) = entries.last() {
                let ratio = if entry.is_intersecting() {
                    entry.intersection_ratio()
                } else {
                    0.0
                };
                trigger.maybe_update(|t| {
                    let before = t.is_revealed();
                    t.observe(ratio) != before
                });
            }
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.0, threshold]),
    );

    Memo::new(move |_| trigger.with(|t| t.is_revealed()))
}

/// Flips to `true` two frames after mount, once the initial styles have
/// been applied, so entry transitions have something to animate from.
pub fn use_mounted() -> ReadSignal<bool> {
    let (mounted, set_mounted) = signal(false);
    request_animation_frame(move || {
        request_animation_frame(move || {
            let _ = set_mounted.try_set(true);
        });
    });
    mounted
}
