//! Hero images that drift after the pointer.

use crewcommune_core::motion::{Spring2, presets};
use leptos::ev;
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_event_listener, use_raf_fn, use_window};

use super::{FallbackImage, use_mounted};
use crate::config::placeholders;
use crate::models::HeroImage;
use crate::utils::dom::viewport_size;

stylance::import_crate_style!(css, "src/components/motion/follower.module.css");

/// One floating hero image.
///
/// Rests at its configured offset from the hero center and, driven by a
/// soft spring, leans 5 % of the pointer's distance from the viewport
/// center. Fades in after the headline, one image every 100 ms.
#[component]
pub fn ImageFollower(image: HeroImage, index: usize) -> impl IntoView {
    let base = (image.x_offset, image.y_offset);
    let spring = StoredValue::new(Spring2::new(presets::follower_spring(), base.0, base.1));
    let position = RwSignal::new(base);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        let (width, height) = viewport_size();
        let dx = (f64::from(e.client_x()) - width / 2.0) * presets::FOLLOW_FACTOR;
        let dy = (f64::from(e.client_y()) - height / 2.0) * presets::FOLLOW_FACTOR;
        spring.update_value(|s| s.set_target(base.0 + dx, base.1 + dy));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let moved = spring
            .try_update_value(|s| (!s.is_at_rest()).then(|| s.step(args.delta)))
            .flatten();
        if let Some(p) = moved {
            position.set(p);
        }
    });

    let mounted = use_mounted();
    let entry = presets::follower_entry();
    let stagger = presets::CARD_STAGGER_MS * index as f64;

    let anchor_style = move || {
        let (x, y) = position.get();
        format!(
            "width: {}px; height: {}px; transform: translate(-50%, -50%) translate({}px, {}px);",
            image.width, image.height, x, y
        )
    };
    let entry_style = move || {
        let (opacity, scale) = if mounted.get() { (1.0, 1.0) } else { (0.0, 0.8) };
        format!(
            "opacity: {}; transform: scale({}); transition: {}, {};",
            opacity,
            scale,
            entry.css_transition("opacity", stagger),
            entry.css_transition("transform", stagger),
        )
    };
    let lean = if image.rotate > 0.0 { 5.0 } else { -5.0 };
    let tilt_style = format!(
        "--rotate: {}deg; --hover-rotate: {}deg;",
        image.rotate,
        image.rotate + lean
    );

    view! {
        <div class=css::anchor style=anchor_style>
            <div class=css::entry style=entry_style>
                <div class=css::tilt style=tilt_style data-cursor-hover="image">
                    <FallbackImage
                        src=image.src
                        alt=image.alt
                        placeholder=placeholders::FOLLOWER
                        class=css::image
                    />
                </div>
            </div>
        </div>
    }
}
