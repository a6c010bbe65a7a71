//! Events page: horizontal gallery pinned while the section scrolls past.

use crewcommune_core::PageId;
use crewcommune_core::motion::{Spring, presets, scroll};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::{UseRafFnCallbackArgs, use_event_listener, use_raf_fn, use_window, use_window_scroll};

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::motion::{AnimatedText, FallbackImage, ScrollReveal};
use crate::config::placeholders;
use crate::models::Event;
use crate::utils::dom::{element_span, viewport_size};

stylance::import_crate_style!(common, "src/components/pages/common.module.css");
stylance::import_crate_style!(css, "src/components/pages/events.module.css");

#[component]
pub fn EventsPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let events = ctx.content.with_value(|c| c.events.clone());

    view! {
        <div class=common::page>
            <header class=common::pageHeader>
                <h1 class=common::pageTitle>
                    <AnimatedText text=events.title delay_ms=500.0 />
                </h1>
                <ScrollReveal delay_ms=200.0>
                    <p class=common::pageSubtitle>{events.subtitle}</p>
                </ScrollReveal>
            </header>

            <Gallery events=events.events case_study_label=events.case_study_label />

            <section class=common::section>
                <ScrollReveal class=css::cta>
                    <h2 class=css::ctaTitle>{events.cta_title}</h2>
                    <button
                        class=common::pillButton
                        on:click=move |_| ctx.set_page(PageId::Contact)
                        data-cursor-hover="link"
                    >
                        {events.cta_label}
                        <Icon icon=ic::ARROW_RIGHT />
                    </button>
                </ScrollReveal>
            </section>
        </div>
    }
}

/// One viewport-wide card per event.
///
/// The section is `n × 100vh` tall with a sticky inner frame; vertical
/// progress through it slides the track left by up to `(n - 1) × 100vw`,
/// smoothed by a spring.
#[component]
fn Gallery(events: Vec<Event>, case_study_label: String) -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let count = events.len().max(1);
    let max_shift = (count - 1) as f64 * 100.0;

    let section = NodeRef::<html::Section>::new();
    let (_, scroll_y) = use_window_scroll();
    let resized = RwSignal::new(());
    let _ = use_event_listener(use_window(), ev::resize, move |_| resized.notify());

    let spring = StoredValue::new(Spring::new(presets::gallery_spring(), 0.0));
    let shift = RwSignal::new(0.0);

    Effect::new(move || {
        scroll_y.track();
        resized.track();
        let Some(el) = section.get() else {
            return;
        };
        let (top, height) = element_span(&el);
        let (_, viewport_height) = viewport_size();
        let progress = scroll::section_progress(top, height, viewport_height);
        let target = scroll::map_range(progress, (0.0, 1.0), (0.0, -max_shift));
        spring.update_value(|s| s.set_target(target));
    });

    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        let moved = spring
            .try_update_value(|s| (!s.is_at_rest()).then(|| s.step(args.delta)))
            .flatten();
        if let Some(x) = moved {
            shift.set(x);
        }
    });

    let track_style = move || format!("transform: translateX({}vw);", shift.get());

    let cards = events
        .into_iter()
        .map(|event| {
            let label = case_study_label.clone();
            view! {
                <article class=css::card>
                    <FallbackImage
                        src=event.image
                        alt=event.title.clone()
                        placeholder=placeholders::EVENT
                        class=css::cardImage
                    />
                    <div class=css::cardShade></div>
                    <div class=css::cardBody>
                        <div class=css::cardLead>
                            <p class=common::accent>{event.location}</p>
                            <h2 class=css::cardTitle>{event.title}</h2>
                            <button
                                class=css::caseStudy
                                on:click=move |_| ctx.set_page(PageId::Contact)
                                data-cursor-hover="link"
                            >
                                {label}
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                        </div>
                        <div class=css::cardMeta>
                            <p class=css::cardDate>{event.date}</p>
                            <p class=css::cardText>{event.description}</p>
                        </div>
                    </div>
                </article>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section class=css::gallery style=format!("height: {}vh;", count * 100)>
            <div class=css::pinned>
                <div class=css::track style=track_style>{cards}</div>
            </div>
        </section>
    }
}
