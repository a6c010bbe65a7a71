//! Page presenter.
//!
//! Renders the page selected in [`AppContext`] inside a clip-region wipe:
//! the outgoing page is masked away from the top, then the incoming page is
//! revealed from the bottom.
//!
//! # Architecture
//!
//! - **Navigator is the source of truth**: the presenter only reads it
//! - **One page mounted at a time**: the outgoing page stays until its exit
//!   finishes, then it is replaced
//! - **Frame clock**: `requestAnimationFrame` ticks [`PagePresence`] while a
//!   wipe is running
//! - **Rapid navigation**: the latest request wins; an interrupted enter
//!   starts a fresh exit

use crewcommune_core::{PageChoreography, PageId, PagePresence};
use leptos::prelude::*;
use leptos_use::{UseRafFnCallbackArgs, use_raf_fn};

use crate::app::AppContext;
use crate::components::pages::{AboutPage, ContactPage, EventsPage, HomePage, ServicesPage};

stylance::import_crate_style!(css, "src/components/router.module.css");

// ============================================================================
// Page Router
// ============================================================================

/// Active page wrapped in the enter/exit wipe.
#[component]
pub fn PageRouter() -> impl IntoView {
    let ctx = expect_context::<AppContext>();

    let initial = ctx.nav.with_untracked(|nav| nav.current());
    let presence = RwSignal::new(PagePresence::new(initial, PageChoreography::default()));

    // Forward every navigation to the state machine
    Effect::new(move || {
        let target = ctx.page();
        presence.update(|p| p.request(target));
    });

    // Frame clock (idle frames return early)
    let _ = use_raf_fn(move |args: UseRafFnCallbackArgs| {
        if !presence.with_untracked(|p| p.is_animating()) {
            return;
        }
        presence.update(|p| {
            if p.tick(args.delta) {
                tracing::debug!(page = %p.shown(), "page swapped");
            }
        });
    });

    let shown = Memo::new(move |_| presence.with(|p| p.shown()));
    let clip_style = Signal::derive(move || {
        let clip = presence.with(|p| p.clip());
        if clip.is_visible() {
            "clip-path: none;".to_string()
        } else {
            format!("clip-path: {};", clip)
        }
    });

    view! {
        <div class=css::presenter style=clip_style>
            {move || render_page(shown.get())}
        </div>
    }
}

fn render_page(page: PageId) -> AnyView {
    match page {
        PageId::Home => view! { <HomePage /> }.into_any(),
        PageId::Services => view! { <ServicesPage /> }.into_any(),
        PageId::About => view! { <AboutPage /> }.into_any(),
        PageId::Events => view! { <EventsPage /> }.into_any(),
        PageId::Contact => view! { <ContactPage /> }.into_any(),
    }
}
