//! Custom pointer.

use crewcommune_core::motion::{CursorVariant, Spring2, presets};
use leptos::ev;
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_event_listener, use_media_query, use_raf_fn, use_window};

use crate::config::DESKTOP_MEDIA_QUERY;
use crate::utils::dom::cursor_target;

stylance::import_crate_style!(css, "src/components/layout/cursor.module.css");

/// Disc that chases the pointer on a stiff spring and changes look over
/// links, images and magnetic elements.
///
/// Desktop only. The first touch turns it off for the rest of the session.
#[component]
pub fn CustomCursor() -> impl IntoView {
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);
    let touched = RwSignal::new(false);

    let spring = StoredValue::new(Spring2::new(presets::cursor_spring(), 0.0, 0.0));
    let position = RwSignal::new((0.0, 0.0));
    let variant = RwSignal::new(CursorVariant::Default);

    let _ = use_event_listener(use_window(), ev::mousemove, move |e| {
        if touched.get_untracked() {
            return;
        }
        spring.update_value(|s| s.set_target(f64::from(e.client_x()), f64::from(e.client_y())));

        let (hover, magnetic) = cursor_target(e.target());
        let next = CursorVariant::resolve(hover.as_deref(), magnetic);
        if variant.get_untracked() != next {
            variant.set(next);
        }
    });

    let _ = use_event_listener(use_window(), ev::touchstart, move |_| {
        if !touched.get_untracked() {
            tracing::debug!("touch input detected, custom cursor disabled");
            touched.set(true);
        }
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let moved = spring
            .try_update_value(|s| (!s.is_at_rest()).then(|| s.step(args.delta)))
            .flatten();
        if let Some(p) = moved {
            position.set(p);
        }
    });

    let anchor_style = move || {
        let (x, y) = position.get();
        format!("transform: translate({}px, {}px) translate(-50%, -50%);", x, y)
    };
    let disc_style = move || {
        let style = variant.get().style();
        format!(
            "width: {0}px; height: {0}px; background-color: {1}; mix-blend-mode: {2}; transform: scale({3});",
            style.size_px, style.background, style.blend_mode, style.scale
        )
    };

    view! {
        <Show when=move || is_desktop.get() && !touched.get()>
            <div class=css::anchor style=anchor_style>
                <div class=css::disc style=disc_style>
                    <span class=css::label>{move || variant.get().style().label}</span>
                </div>
            </div>
        </Show>
    }
}
