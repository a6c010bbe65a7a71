//! Scrolling banner.

use crewcommune_core::motion::scroll::map_range_unclamped;
use leptos::prelude::*;
use leptos_use::use_window_scroll;

use crate::config::scroll::{MARQUEE_DRIFT_PERCENT, MARQUEE_DRIFT_SCROLL_PX, MARQUEE_SPEED_S};

stylance::import_crate_style!(css, "src/components/layout/marquee.module.css");

/// Copies of the text on the track; two are always off screen.
const COPIES: usize = 4;

/// Text looping right to left forever, nudged further left as the window
/// scrolls.
#[component]
pub fn Marquee(
    #[prop(into)] text: String,
    #[prop(default = MARQUEE_SPEED_S)] speed_s: f64,
) -> impl IntoView {
    let (_, scroll_y) = use_window_scroll();
    let drift_style = move || {
        let drift = map_range_unclamped(
            scroll_y.get(),
            (0.0, MARQUEE_DRIFT_SCROLL_PX),
            (0.0, MARQUEE_DRIFT_PERCENT),
        );
        format!("transform: translateX({}%);", drift)
    };

    view! {
        <div class=css::marquee>
            <div class=css::drift style=drift_style>
                <div class=css::track style=format!("animation-duration: {}s;", speed_s)>
                    {(0..COPIES)
                        .map(|_| view! { <span class=css::item>{text.clone()}</span> })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
}
