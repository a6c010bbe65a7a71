//! Collapsible FAQ row.

use crewcommune_core::motion::presets;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::components::icons as ic;

stylance::import_crate_style!(css, "src/components/motion/accordion.module.css");

/// Question row that expands to show its answer when clicked.
#[component]
pub fn AccordionItem(#[prop(into)] question: String, #[prop(into)] answer: String) -> impl IntoView {
    let open = RwSignal::new(false);
    let transition = presets::accordion();

    let body_style = move || {
        let rows = if open.get() { "1fr" } else { "0fr" };
        let opacity = if open.get() { 1 } else { 0 };
        format!(
            "grid-template-rows: {}; opacity: {}; transition: {}, {};",
            rows,
            opacity,
            transition.css_transition("grid-template-rows", 0.0),
            transition.css_transition("opacity", 0.0),
        )
    };
    let chevron_class = move || {
        if open.get() {
            format!("{} {}", css::chevron, css::chevronOpen)
        } else {
            css::chevron.to_string()
        }
    };

    view! {
        <div class=css::item on:click=move |_| open.update(|o| *o = !*o)>
            <div class=css::header data-cursor-hover="link">
                <h3 class=css::question>{question}</h3>
                <span class=chevron_class>
                    <Icon icon=ic::CHEVRON_DOWN />
                </span>
            </div>
            <div class=css::body style=body_style>
                <div class=css::bodyInner>
                    <p class=css::answer>{answer}</p>
                </div>
            </div>
        </div>
    }
}
