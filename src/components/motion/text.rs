//! Masked text reveals.
//!
//! Each unit (word or line) sits in an `overflow: hidden` mask and slides up
//! from below once the block scrolls into view.

use crewcommune_core::motion::{RevealMode, RevealPlan, reveal::DEFAULT_THRESHOLD};
use leptos::html;
use leptos::prelude::*;

use super::use_in_view;

stylance::import_crate_style!(css, "src/components/motion/text.module.css");

/// Word-by-word reveal.
///
/// `delay_ms` postpones the first word; later words follow every 80 ms.
/// With `once = false` the words drop out again when the block leaves the
/// viewport and replay on re-entry.
#[component]
pub fn AnimatedText(
    #[prop(into)] text: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: f64,
    #[prop(default = true)] once: bool,
) -> impl IntoView {
    let plan = RevealPlan::new(&text, RevealMode::Words, delay_ms);
    view! { <RevealBlock plan=plan mode=RevealMode::Words class=class once=once /> }
}

/// Line-by-line reveal of newline-separated text.
#[component]
pub fn AnimatedTextLines(
    #[prop(into)] text: String,
    #[prop(optional)] class: &'static str,
    #[prop(optional)] delay_ms: f64,
    #[prop(default = true)] once: bool,
) -> impl IntoView {
    let plan = RevealPlan::new(&text, RevealMode::Lines, delay_ms);
    view! { <RevealBlock plan=plan mode=RevealMode::Lines class=class once=once /> }
}

#[component]
fn RevealBlock(plan: RevealPlan, mode: RevealMode, class: &'static str, once: bool) -> impl IntoView {
    let node = NodeRef::<html::Div>::new();
    let in_view = use_in_view(node, once, DEFAULT_THRESHOLD);

    let (block_class, mask_class) = match mode {
        RevealMode::Words => (css::words, css::wordMask),
        RevealMode::Lines => (css::lines, css::lineMask),
    };
    let transition = plan.unit_transition;
    let range = transition.range();

    let units = plan
        .units
        .into_iter()
        .map(|unit| {
            let style = move || {
                let offset = if in_view.get() { range.to } else { range.from };
                format!(
                    "transform: translateY({}%); transition: {};",
                    offset,
                    transition.css_transition("transform", unit.delay_ms)
                )
            };
            view! {
                <span class=mask_class>
                    <span class=css::unit style=style>{unit.text}</span>
                </span>
            }
        })
        .collect_view();

    view! {
        <div node_ref=node class=format!("{} {}", block_class, class)>
            {units}
        </div>
    }
}
