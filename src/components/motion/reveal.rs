//! Block reveal on viewport entry.

use crewcommune_core::motion::{presets, reveal::DEFAULT_THRESHOLD};
use leptos::html;
use leptos::prelude::*;

use super::use_in_view;

stylance::import_crate_style!(css, "src/components/motion/reveal.module.css");

/// Fades its children in while lifting them 50 px.
///
/// `delay_ms` staggers siblings in grids (card index × 100 ms).
#[component]
pub fn ScrollReveal(
    children: Children,
    #[prop(into, optional)] class: String,
    #[prop(optional)] delay_ms: f64,
) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, true, DEFAULT_THRESHOLD);

    let transition = presets::scroll_reveal();
    let range = transition.range();
    let style = move || {
        let (offset, opacity) = if in_view.get() {
            (range.to, 1)
        } else {
            (range.from, 0)
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: {}, {};",
            opacity,
            offset,
            transition.css_transition("opacity", delay_ms),
            transition.css_transition("transform", delay_ms),
        )
    };

    view! {
        <div node_ref=node class=format!("{} {}", css::reveal, class) style=style>
            {children()}
        </div>
    }
}
