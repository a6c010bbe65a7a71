//! Services page.

use crewcommune_core::PageId;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::motion::{AccordionItem, AnimatedText, ParallaxImage, ScrollReveal};

stylance::import_crate_style!(common, "src/components/pages/common.module.css");
stylance::import_crate_style!(css, "src/components/pages/services.module.css");

#[component]
pub fn ServicesPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let services = ctx.content.with_value(|c| c.services.clone());

    let differentiators = services
        .differentiators
        .into_iter()
        .map(|item| view! {
            <ScrollReveal class=css::stat>
                <h3 class=css::statValue>{item.stat}</h3>
                <p class=css::statLabel>{item.label}</p>
                <p class=css::statText>{item.description}</p>
            </ScrollReveal>
        })
        .collect_view();

    // Image and text blocks alternate sides down the page
    let offerings = services
        .offerings
        .into_iter()
        .enumerate()
        .map(|(i, offering)| {
            let (image_class, panel_class) = if i % 2 == 0 {
                (css::imageLeft, css::panelRight)
            } else {
                (css::imageRight, css::panelLeft)
            };
            let cta = format!("Discuss {}", offering.title);
            view! {
                <ScrollReveal class=css::offering>
                    <div class=format!("{} {}", css::offeringImage, image_class)>
                        <ParallaxImage src=offering.image alt=offering.title.clone() />
                        <div class=css::offeringShade></div>
                    </div>
                    <ScrollReveal class=format!("{} {}", css::panel, panel_class) delay_ms=100.0>
                        <span class=css::panelIcon><Icon icon=ic::for_kind(offering.icon) /></span>
                        <h2 class=css::panelTitle>{offering.title}</h2>
                        <p class=css::panelText>{offering.description}</p>
                        <button
                            class=common::pillButton
                            on:click=move |_| ctx.set_page(PageId::Contact)
                            data-cursor-hover="link"
                        >
                            {cta}
                            <Icon icon=ic::ARROW_RIGHT />
                        </button>
                    </ScrollReveal>
                </ScrollReveal>
            }
        })
        .collect_view();

    let faqs = services
        .faqs
        .into_iter()
        .map(|faq| view! { <AccordionItem question=faq.question answer=faq.answer /> })
        .collect_view();

    view! {
        <div class=common::page>
            <header class=common::pageHeader>
                <h1 class=common::pageTitle>
                    <AnimatedText text=services.title delay_ms=500.0 />
                </h1>
                <div class=common::pageSubtitle>
                    <AnimatedText text=services.subtitle delay_ms=700.0 />
                </div>
            </header>

            // Differentiators
            <section class=css::stats>
                <div class=format!("{} {}", common::container, css::statGrid)>
                    {differentiators}
                </div>
            </section>

            // Offerings
            <section class=css::offerings>
                <div class=format!("{} {}", common::container, css::offeringList)>
                    {offerings}
                </div>
            </section>

            // FAQ
            <section class=common::section>
                <div class=common::containerNarrow>
                    <h2 class=common::sectionTitle>
                        <AnimatedText text=services.faq_title />
                    </h2>
                    <div class=css::faqList>{faqs}</div>
                </div>
            </section>
        </div>
    }
}
