//! Loading splash.

use crewcommune_core::motion::presets;
use leptos::prelude::*;

use crate::components::motion::use_mounted;
use crate::config::APP_NAME;

stylance::import_crate_style!(css, "src/components/splash/splash.module.css");

/// Full-screen accent panel with the brand name rising into place.
#[component]
pub fn LoadingScreen() -> impl IntoView {
    let mounted = use_mounted();
    let transition = presets::splash_text();
    let range = transition.range();

    let text_style = move || {
        let (offset, opacity) = if mounted.get() {
            (range.to, 1)
        } else {
            (range.from, 0)
        };
        format!(
            "opacity: {}; transform: translateY({}px); transition: {}, {};",
            opacity,
            offset,
            transition.css_transition("opacity", 0.0),
            transition.css_transition("transform", 0.0),
        )
    };

    view! {
        <div class=css::splash>
            <div class=css::brand style=text_style>{APP_NAME}</div>
        </div>
    }
}
