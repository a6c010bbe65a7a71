//! About page: the founder's story.

use crewcommune_core::motion::presets::CARD_STAGGER_MS;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::motion::{AnimatedText, AnimatedTextLines, ParallaxImage, ScrollReveal};
use crate::models::Milestone;

stylance::import_crate_style!(common, "src/components/pages/common.module.css");
stylance::import_crate_style!(css, "src/components/pages/about.module.css");

#[component]
pub fn AboutPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let about = ctx.content.with_value(|c| c.about.clone());

    let mission = about
        .mission
        .into_iter()
        .map(|paragraph| view! { <p class=css::missionText>{paragraph}</p> })
        .collect_view();

    let milestones = about
        .milestones
        .into_iter()
        .enumerate()
        .map(|(i, milestone)| view! { <MilestoneRow milestone=milestone mirrored=i % 2 != 0 /> })
        .collect_view();

    let values = about
        .values
        .into_iter()
        .enumerate()
        .map(|(i, value)| view! {
            <ScrollReveal class=css::valueCard delay_ms={CARD_STAGGER_MS * i as f64}>
                <span class=css::valueIcon><Icon icon=ic::for_kind(value.icon) /></span>
                <h3 class=css::valueTitle>{value.title}</h3>
                <p class=css::valueText>{value.description}</p>
            </ScrollReveal>
        })
        .collect_view();

    let team = about
        .team
        .into_iter()
        .enumerate()
        .map(|(i, member)| view! {
            <ScrollReveal class=css::member delay_ms={CARD_STAGGER_MS * i as f64}>
                <div class=css::portrait>
                    <ParallaxImage src=member.image alt=member.name.clone() class=css::grayscale />
                </div>
                <h3 class=css::memberName>{member.name}</h3>
                <p class=common::accent>{member.role}</p>
            </ScrollReveal>
        })
        .collect_view();

    view! {
        <div class=common::page>
            <header class=css::hero>
                <div class=css::heroBackdrop>
                    <ParallaxImage src=about.portrait alt=about.portrait_alt />
                    <div class=css::heroShade></div>
                </div>
                <div class=css::heroContent>
                    <ScrollReveal>
                        <span class=common::eyebrow>{about.eyebrow}</span>
                    </ScrollReveal>
                    <h1 class=css::heroTitle>
                        <AnimatedTextLines text=about.title delay_ms=500.0 />
                    </h1>
                    <ScrollReveal delay_ms=200.0>
                        <p class=css::heroIntro>{about.intro}</p>
                    </ScrollReveal>
                </div>
            </header>

            // Mission
            <section class=common::section>
                <div class=common::containerNarrow>
                    <ScrollReveal class=css::mission>
                        <h2 class=css::missionTitle>
                            <AnimatedText text=about.mission_title />
                        </h2>
                        {mission}
                        <p class=css::signature>{about.signature}</p>
                    </ScrollReveal>
                </div>
            </section>

            // Milestones
            <section class=common::sectionDark>
                <div class=css::timeline>
                    <h2 class=common::sectionTitle>
                        <AnimatedText text=about.milestones_title />
                    </h2>
                    {milestones}
                </div>
            </section>

            // Values
            <section class=common::section>
                <div class=common::container>
                    <h2 class=common::sectionTitle>
                        <AnimatedText text=about.values_title />
                    </h2>
                    <div class=css::cardGrid>{values}</div>
                </div>
            </section>

            // Team
            <section class=common::sectionDark>
                <div class=common::container>
                    <h2 class=common::sectionTitle>
                        <AnimatedText text=about.team_title />
                    </h2>
                    <div class=css::cardGrid>{team}</div>
                </div>
            </section>
        </div>
    }
}

/// Timeline entry; every other row swaps its columns on wide screens.
#[component]
fn MilestoneRow(milestone: Milestone, mirrored: bool) -> impl IntoView {
    let row_class = if mirrored {
        format!("{} {}", css::milestone, css::milestoneMirrored)
    } else {
        css::milestone.to_string()
    };

    view! {
        <ScrollReveal class=row_class>
            <div class=css::milestoneHead>
                <h3 class=css::milestoneYear>{milestone.year}</h3>
                <h4 class=css::milestoneTitle>{milestone.title}</h4>
            </div>
            <div class=css::milestoneBody>
                <span class=css::milestoneDot></span>
                <p class=css::milestoneText>{milestone.description}</p>
            </div>
        </ScrollReveal>
    }
}
