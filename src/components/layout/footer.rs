//! Site footer.

use crewcommune_core::PageId;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_icons::Icon;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::config::{APP_NAME, APP_TAGLINE, COMPANY_NAME};
use crate::utils::dom::{current_year, suppress_submit};

stylance::import_crate_style!(css, "src/components/layout/footer.module.css");

#[component]
pub fn Footer() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let nav_link = move |page: PageId| {
        view! {
            <li>
                <button
                    class=css::link
                    on:click=move |_| ctx.set_page(page)
                    data-cursor-hover="link"
                >
                    {page.label()}
                </button>
            </li>
        }
    };

    view! {
        <footer class=css::footer>
            <div class=css::grid>
                // Brand
                <div class=css::brand>
                    <h3 class=css::brandName>{APP_NAME}</h3>
                    <p class=css::tagline>{APP_TAGLINE}</p>
                    <div class=css::social>
                        <a href="#" class=css::link data-cursor-hover="link" title="Twitter">
                            <Icon icon=ic::TWITTER />
                        </a>
                        <a href="#" class=css::link data-cursor-hover="link" title="Instagram">
                            <Icon icon=ic::INSTAGRAM />
                        </a>
                        <a href="#" class=css::link data-cursor-hover="link" title="LinkedIn">
                            <Icon icon=ic::LINKEDIN />
                        </a>
                    </div>
                </div>

                // Menu
                <div>
                    <h4 class=css::heading>"Menu"</h4>
                    <ul class=css::list>
                        {nav_link(PageId::Services)}
                        {nav_link(PageId::About)}
                        {nav_link(PageId::Events)}
                    </ul>
                </div>

                // Company
                <div>
                    <h4 class=css::heading>"Company"</h4>
                    <ul class=css::list>
                        <li>
                            <a href="#" class=css::link data-cursor-hover="link">"Careers"</a>
                        </li>
                        {nav_link(PageId::Contact)}
                        <li>
                            <a href="#" class=css::link data-cursor-hover="link">"Privacy"</a>
                        </li>
                    </ul>
                </div>

                // Newsletter
                <div class=css::newsletter>
                    <h4 class=css::heading>"Join the newsletter"</h4>
                    <p class=css::blurb>"Get the latest on events and innovations."</p>
                    <form
                        class=css::form
                        on:submit=move |ev: SubmitEvent| suppress_submit(&ev, "newsletter")
                    >
                        <input
                            type="email"
                            placeholder="Enter your email"
                            class=css::input
                            data-cursor-hover="link"
                        />
                        <button type="submit" class=css::submit data-cursor-hover="link" title="Subscribe">
                            <Icon icon=ic::ARROW_RIGHT />
                        </button>
                    </form>
                </div>
            </div>

            <div class=css::copyright>
                <p>{format!("© {} {}. All rights reserved.", current_year(), COMPANY_NAME)}</p>
            </div>
        </footer>
    }
}
