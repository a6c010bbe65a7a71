//! Images: placeholder fallback, clip-path reveal and scroll parallax.

use crewcommune_core::ImageSource;
use crewcommune_core::motion::{presets, reveal::DEFAULT_THRESHOLD, scroll};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_use::{use_event_listener, use_window, use_window_scroll};

use super::use_in_view;
use crate::config::placeholders;
use crate::config::scroll::PARALLAX_RANGE_PERCENT;
use crate::utils::dom::{element_span, viewport_size};

stylance::import_crate_style!(css, "src/components/motion/image.module.css");

/// `<img>` that swaps to `placeholder` once if the source fails to load.
#[component]
pub fn FallbackImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(default = placeholders::IMAGE)] placeholder: &'static str,
    #[prop(optional)] class: &'static str,
    #[prop(into, optional)] style: MaybeProp<String>,
) -> impl IntoView {
    let source = RwSignal::new(ImageSource::new(src, placeholder));

    view! {
        <img
            src=move || source.with(|s| s.current().to_string())
            alt=alt
            class=class
            style=move || style.get()
            on:error=move |_| source.maybe_update(|s| s.mark_failed())
        />
    }
}

/// Image uncovered bottom-up by a clip-path wipe while settling from 110 %
/// scale, once a third of it is visible.
#[component]
pub fn AnimatedImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, true, DEFAULT_THRESHOLD);

    let transition = presets::image_reveal();
    let range = transition.range();

    let frame_style = move || {
        let top = if in_view.get() { range.to } else { range.from };
        format!(
            "clip-path: inset({}% 0% 0% 0%); transition: {};",
            top,
            transition.css_transition("clip-path", 0.0)
        )
    };
    let image_style = Signal::derive(move || {
        let scale = if in_view.get() { 1.0 } else { 1.1 };
        format!(
            "transform: scale({}); transition: {};",
            scale,
            transition.css_transition("transform", 0.0)
        )
    });

    view! {
        <div
            node_ref=node
            class=format!("{} {}", css::frame, class)
            style=frame_style
            data-cursor-hover="image"
        >
            <FallbackImage src=src alt=alt class=css::cover style=image_style />
        </div>
    }
}

/// Image drifting from -20 % to +20 % of its height as its frame crosses
/// the viewport.
#[component]
pub fn ParallaxImage(
    #[prop(into)] src: String,
    #[prop(into)] alt: String,
    #[prop(optional)] class: &'static str,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let (_, scroll_y) = use_window_scroll();

    let resized = RwSignal::new(());
    let _ = use_event_listener(use_window(), ev::resize, move |_| resized.notify());

    let offset = Memo::new(move |_| {
        scroll_y.track();
        resized.track();
        node.get()
            .map(|el| {
                let (top, height) = element_span(&el);
                let (_, viewport_height) = viewport_size();
                let progress = scroll::scroll_progress(top, height, viewport_height);
                scroll::map_range(
                    progress,
                    (0.0, 1.0),
                    (-PARALLAX_RANGE_PERCENT, PARALLAX_RANGE_PERCENT),
                )
            })
            .unwrap_or(-PARALLAX_RANGE_PERCENT)
    });
    let image_style = Signal::derive(move || format!("transform: translateY({}%);", offset.get()));

    view! {
        <div
            node_ref=node
            class=format!("{} {}", css::parallax, class)
            data-cursor-hover="image"
        >
            <FallbackImage src=src alt=alt class=css::parallaxImage style=image_style />
        </div>
    }
}
