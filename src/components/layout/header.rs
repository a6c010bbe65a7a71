//! Fixed site header.

use crewcommune_core::PageId;
use crewcommune_core::motion::presets;
use leptos::prelude::*;
use leptos_icons::Icon;
use leptos_use::use_window_scroll;

use crate::app::AppContext;
use crate::components::icons as ic;
use crate::components::motion::use_mounted;
use crate::config::{APP_NAME, HEADER_SCROLL_THRESHOLD_PX};

stylance::import_crate_style!(css, "src/components/layout/header.module.css");

/// Pages listed in the navigation, in order. Contact gets its own button.
const NAV_ITEMS: [PageId; 3] = [PageId::Services, PageId::About, PageId::Events];

/// Header bar.
///
/// Transparent over the hero, solid once the page has scrolled past
/// 20 px or while the mobile drawer is open. Slides down on first mount.
#[component]
pub fn Header() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let (_, scroll_y) = use_window_scroll();
    let scrolled = Memo::new(move |_| scroll_y.get() > HEADER_SCROLL_THRESHOLD_PX);
    let header_class = move || {
        if scrolled.get() || ctx.menu_open.get() {
            format!("{} {}", css::header, css::headerSolid)
        } else {
            css::header.to_string()
        }
    };

    let mounted = use_mounted();
    let enter = presets::header_enter();
    let range = enter.range();
    let header_style = move || {
        let offset = if mounted.get() { range.to } else { range.from };
        format!(
            "transform: translateY({}%); transition: {}, background-color 300ms ease;",
            offset,
            enter.css_transition("transform", 0.0)
        )
    };

    let toggle_menu = move |_: leptos::ev::MouseEvent| ctx.menu_open.update(|open| *open = !*open);

    view! {
        <header class=header_class style=header_style>
            <nav class=css::nav>
                // Logo
                <button
                    class=css::logo
                    on:click=move |_| ctx.set_page(PageId::Home)
                    data-cursor-hover="link"
                    data-cursor-magnetic=""
                >
                    {APP_NAME}
                </button>

                // Desktop navigation
                <div class=css::desktopNav>
                    {NAV_ITEMS
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class=css::navLink
                                on:click=move |_| ctx.set_page(page)
                                data-cursor-hover="link"
                            >
                                {page.label()}
                            </button>
                        })
                        .collect_view()}
                    <button
                        class=css::cta
                        on:click=move |_| ctx.set_page(PageId::Contact)
                        data-cursor-hover="link"
                    >
                        "Get In Touch"
                    </button>
                </div>

                // Mobile toggle
                <button
                    class=css::menuToggle
                    on:click=toggle_menu
                    data-cursor-hover="link"
                    title="Toggle menu"
                >
                    {move || if ctx.menu_open.get() {
                        view! { <Icon icon=ic::CLOSE /> }.into_any()
                    } else {
                        view! { <Icon icon=ic::MENU /> }.into_any()
                    }}
                </button>
            </nav>

            // Mobile drawer
            <Show when=move || ctx.menu_open.get()>
                <div class=css::mobileMenu>
                    {NAV_ITEMS
                        .into_iter()
                        .map(|page| view! {
                            <button
                                class=css::mobileLink
                                on:click=move |_| ctx.set_page(page)
                                data-cursor-hover="link"
                            >
                                {page.label()}
                            </button>
                        })
                        .collect_view()}
                    <button
                        class=css::mobileCta
                        on:click=move |_| ctx.set_page(PageId::Contact)
                        data-cursor-hover="link"
                    >
                        "Get In Touch"
                    </button>
                </div>
            </Show>
        </header>
    }
}
