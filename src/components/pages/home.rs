//! Home page.

use crewcommune_core::motion::presets::CARD_STAGGER_MS;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_media_query;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::layout::Marquee;
use crate::components::motion::{
    AnimatedImage, AnimatedText, AnimatedTextLines, FallbackImage, ImageFollower, ParallaxImage,
    ScrollReveal,
};
use crate::config::{DESKTOP_MEDIA_QUERY, hero, placeholders};

stylance::import_crate_style!(common, "src/components/pages/common.module.css");
stylance::import_crate_style!(css, "src/components/pages/home.module.css");

/// Landing page: hero, marquee, philosophy, service cards, athlete
/// spotlight and founder call-to-action.
#[component]
pub fn HomePage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let home = ctx.content.with_value(|c| c.home.clone());
    let is_desktop = use_media_query(DESKTOP_MEDIA_QUERY);

    let hero_images = home.hero_images;
    let founder_target = home.founder.target;

    let service_cards = home
        .services
        .into_iter()
        .enumerate()
        .map(|(i, card)| {
            let target = card.target;
            view! {
                <ScrollReveal class=css::cardSlot delay_ms={CARD_STAGGER_MS * i as f64}>
                    <div
                        class=css::card
                        on:click=move |_| ctx.set_page(target)
                        data-cursor-hover="image"
                    >
                        <FallbackImage
                            src=card.image
                            alt=card.title.clone()
                            placeholder=placeholders::SERVICE_CARD
                            class=css::cardImage
                        />
                        <div class=css::cardShade></div>
                        <div class=css::cardBody>
                            <span class=css::cardIcon><Icon icon=ic::for_kind(card.icon) /></span>
                            <h3 class=css::cardTitle>{card.title}</h3>
                            <p class=css::cardText>{card.description}</p>
                            <span class=css::cardMore>
                                "Learn More" <Icon icon=ic::ARROW_RIGHT />
                            </span>
                        </div>
                    </div>
                </ScrollReveal>
            }
        })
        .collect_view();

    let highlights = home
        .spotlight
        .highlights
        .into_iter()
        .map(|item| view! {
            <li class=css::highlight>
                <span class=common::accent><Icon icon=ic::ARROW_RIGHT /></span>
                {item}
            </li>
        })
        .collect_view();

    view! {
        <div class=common::page>
            // Hero
            <section class=css::hero>
                <Show when=move || is_desktop.get()>
                    {hero_images
                        .iter()
                        .cloned()
                        .enumerate()
                        .map(|(index, image)| view! { <ImageFollower image=image index=index /> })
                        .collect_view()}
                </Show>

                <div class=css::heroVideo>
                    // muted must be the live property for autoplay to be allowed
                    <video
                        autoplay=true
                        muted=true
                        prop:muted=true
                        loop=true
                        playsinline=true
                        src=hero::VIDEO_SRC
                        poster=hero::VIDEO_POSTER
                    ></video>
                </div>

                <div class=css::heroText>
                    <h1 class=css::heroHeadline>
                        <AnimatedText text=home.headline delay_ms=800.0 />
                        <AnimatedText text=home.headline_accent class=common::accent delay_ms=1200.0 />
                    </h1>
                </div>
            </section>

            <Marquee text=home.marquee />

            // Philosophy
            <section class=common::sectionDark>
                <div class=css::philosophy>
                    <h2 class=css::philosophyTitle>
                        <AnimatedTextLines text=home.philosophy.headline />
                    </h2>
                    <ScrollReveal>
                        <p class=css::philosophyBody>{home.philosophy.body}</p>
                    </ScrollReveal>
                </div>
            </section>

            // Core expertise
            <section class=common::section>
                <div class=common::container>
                    <h2 class=common::sectionTitle>
                        <AnimatedText text=home.expertise_title />
                    </h2>
                    <div class=css::cardGrid>{service_cards}</div>
                </div>
            </section>

            // Athlete spotlight
            <section class=common::sectionDark>
                <div class=format!("{} {}", common::container, css::split)>
                    <AnimatedImage
                        src=home.spotlight.image
                        alt=home.spotlight.image_alt
                        class=css::spotlightImage
                    />
                    <ScrollReveal delay_ms=200.0>
                        <span class=common::eyebrow>{home.spotlight.eyebrow}</span>
                        <h2 class=css::splitTitle>
                            <AnimatedText text=home.spotlight.title />
                        </h2>
                        <p class=css::splitBody>{home.spotlight.body}</p>
                        <ul class=css::highlights>{highlights}</ul>
                    </ScrollReveal>
                </div>
            </section>

            // Founder
            <section class=common::section>
                <div class=css::founder>
                    <div class=css::founderImage>
                        <ParallaxImage src=home.founder.image alt=home.founder.image_alt />
                    </div>
                    <ScrollReveal delay_ms=200.0>
                        <span class=common::eyebrow>{home.founder.eyebrow}</span>
                        <h2 class=css::splitTitle>
                            <AnimatedText text=home.founder.title />
                        </h2>
                        <p class=css::splitBody>{home.founder.body}</p>
                        <button
                            class=css::textLink
                            on:click=move |_| ctx.set_page(founder_target)
                            data-cursor-hover="link"
                        >
                            <span>{home.founder.cta_label}</span>
                            <Icon icon=ic::ARROW_RIGHT />
                        </button>
                    </ScrollReveal>
                </div>
            </section>
        </div>
    }
}
