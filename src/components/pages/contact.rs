//! Contact page.

use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::motion::{AnimatedText, ScrollReveal};
use crate::utils::dom::suppress_submit;

stylance::import_crate_style!(common, "src/components/pages/common.module.css");
stylance::import_crate_style!(css, "src/components/pages/contact.module.css");

#[component]
pub fn ContactPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let contact = ctx.content.with_value(|c| c.contact.clone());
    let email_href = contact.email_href();
    let phone_href = contact.phone_href();

    let offices = contact
        .offices
        .into_iter()
        .map(|office| view! {
            <li class=css::detail>
                <span class=css::detailIcon><Icon icon=ic::BRIEFCASE /></span>
                <div>
                    <h3 class=css::detailTitle>{office.city}</h3>
                    <p class=css::detailText>{office.address}</p>
                </div>
            </li>
        })
        .collect_view();

    view! {
        <div class=common::page>
            <header class=common::pageHeader>
                <h1 class=common::pageTitle>
                    <AnimatedText text=contact.title delay_ms=500.0 />
                </h1>
                <ScrollReveal delay_ms=200.0>
                    <p class=common::pageSubtitle>{contact.subtitle}</p>
                </ScrollReveal>
            </header>

            <section class=common::section>
                <div class=format!("{} {}", common::container, css::layout)>
                    <ScrollReveal>
                        // Not wired to a backend; submitting only stays on the page
                        <form class=css::form on:submit=move |ev| suppress_submit(&ev, "contact")>
                            <label class=css::field>
                                <span class=css::fieldLabel>"Name"</span>
                                <input class=css::input type="text" name="name" placeholder="Your name" />
                            </label>
                            <label class=css::field>
                                <span class=css::fieldLabel>"Email"</span>
                                <input class=css::input type="email" name="email" placeholder="you@company.com" />
                            </label>
                            <label class=css::field>
                                <span class=css::fieldLabel>"Message"</span>
                                <textarea class=css::input name="message" rows="5" placeholder="Tell us about your project"></textarea>
                            </label>
                            <button type="submit" class=common::pillButton data-cursor-hover="link">
                                "Send Message"
                                <Icon icon=ic::ARROW_RIGHT />
                            </button>
                        </form>
                    </ScrollReveal>

                    <ScrollReveal delay_ms=200.0>
                        <ul class=css::details>
                            <li class=css::detail>
                                <span class=css::detailIcon><Icon icon=ic::MAIL /></span>
                                <div>
                                    <h3 class=css::detailTitle>"Email"</h3>
                                    <a class=css::detailLink href=email_href data-cursor-hover="link">
                                        {contact.email}
                                    </a>
                                </div>
                            </li>
                            <li class=css::detail>
                                <span class=css::detailIcon><Icon icon=ic::PHONE /></span>
                                <div>
                                    <h3 class=css::detailTitle>"Phone"</h3>
                                    <a class=css::detailLink href=phone_href data-cursor-hover="link">
                                        {contact.phone}
                                    </a>
                                </div>
                            </li>
                            {offices}
                        </ul>
                    </ScrollReveal>
                </div>
            </section>
        </div>
    }
}
