//! Root application module.
//!
//! Contains the main App component, AppContext definition, and the
//! loading splash sequencing.

use crewcommune_core::{LoadingGate, Navigator, PageId};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::layout::{CustomCursor, Footer, Header};
use crate::components::router::PageRouter;
use crate::components::splash::LoadingScreen;
use crate::config::LOADING_SPLASH_MS;
use crate::models::SiteContent;
use crate::utils::BrowserViewport;

// ============================================================================
// AppContext
// ============================================================================

/// Application-wide reactive context.
///
/// Provided at the root of the component tree and read with
/// `expect_context::<AppContext>()`. The navigator is the only owner of
/// the current page; every component that changes page goes through
/// [`AppContext::set_page`].
///
/// # Note
///
/// This struct is `Copy` because all fields are Leptos handles, which are
/// cheap to copy (they're just pointers to the underlying reactive state).
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page plus the scroll reset that precedes every change.
    pub nav: RwSignal<Navigator<BrowserViewport>>,
    /// Whether the splash still covers the site.
    pub loading: RwSignal<LoadingGate>,
    /// Mobile navigation drawer.
    pub menu_open: RwSignal<bool>,
    /// Copy for every page.
    pub content: StoredValue<SiteContent>,
}

impl AppContext {
    /// Creates a context starting on Home with the splash up.
    pub fn new(content: SiteContent) -> Self {
        Self {
            nav: RwSignal::new(Navigator::new(BrowserViewport)),
            loading: RwSignal::new(LoadingGate::new()),
            menu_open: RwSignal::new(false),
            content: StoredValue::new(content),
        }
    }

    /// The page currently selected (reactive).
    pub fn page(&self) -> PageId {
        self.nav.with(|nav| nav.current())
    }

    /// Switch pages.
    ///
    /// Scrolls the window to the top, then stores the new page and closes
    /// the mobile menu.
    pub fn set_page(&self, page: PageId) {
        tracing::debug!(%page, "navigate");
        self.nav.update(|nav| nav.set_page(page));
        self.menu_open.set(false);
    }

    /// Whether the loading splash is showing (reactive).
    pub fn is_loading(&self) -> bool {
        self.loading.with(|gate| gate.is_loading())
    }

    /// Dismiss the splash. Later calls change nothing.
    pub fn finish_loading(&self) {
        let mut first = false;
        self.loading.update(|gate| first = gate.finish());
        if first {
            tracing::info!("loading splash dismissed");
        }
    }
}

/// Start the one-shot splash timer.
///
/// The timeout lives in the calling owner; disposing the owner drops it,
/// which cancels the callback.
fn start_loading_timer(ctx: AppContext) {
    let timer = StoredValue::new_local(Some(Timeout::new(LOADING_SPLASH_MS, move || {
        ctx.finish_loading();
    })));
    on_cleanup(move || {
        timer.try_update_value(Option::take);
    });
}

// ============================================================================
// Components
// ============================================================================

/// Root application component with error boundary.
///
/// This component:
/// - Parses the bundled site content
/// - Creates and provides the global AppContext
/// - Renders the site, or the fallback page if content failed to load
#[component]
pub fn App() -> impl IntoView {
    let site = SiteContent::bundled()
        .inspect_err(|e| tracing::error!(error = %e, "site content rejected"))
        .map(|content| {
            provide_context(AppContext::new(content));
            view! { <Site /> }
        });

    view! {
        <ErrorBoundary
            fallback=|errors| view! {
                <div style="
                    display: flex;
                    flex-direction: column;
                    align-items: center;
                    justify-content: center;
                    height: 100vh;
                    padding: 2rem;
                    background: #111111;
                    color: #F5F5F5;
                    font-family: 'Inter', sans-serif;
                ">
                    <div style="
                        max-width: 600px;
                        text-align: center;
                    ">
                        <h1 style="color: #BFFF00; margin-bottom: 1rem;">
                            "Something went wrong"
                        </h1>
                        <p style="color: #a3a3a3; margin-bottom: 2rem;">
                            "The site could not be loaded. Please try reloading the page."
                        </p>
                        <details style="
                            text-align: left;
                            background: #1C1C1C;
                            padding: 1rem;
                            border-radius: 8px;
                            margin-bottom: 1rem;
                        ">
                            <summary style="cursor: pointer; color: #a3a3a3;">
                                "Error details"
                            </summary>
                            <ul style="
                                margin: 1rem 0 0 0;
                                padding-left: 1.5rem;
                                color: #ff6b6b;
                                font-size: 0.9rem;
                            ">
                                {move || errors.get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                                }
                            </ul>
                        </details>
                        <button
                            on:click=move |_| {
                                if let Some(window) = web_sys::window() {
                                    let _ = window.location().reload();
                                }
                            }
                            style="
                                background: #BFFF00;
                                color: #111111;
                                border: none;
                                padding: 0.75rem 2rem;
                                border-radius: 9999px;
                                cursor: pointer;
                                font-weight: 600;
                                font-size: 1rem;
                            "
                        >
                            "Reload Page"
                        </button>
                    </div>
                </div>
            }
        >
            {site}
        </ErrorBoundary>
    }
}

/// Splash first, then header, the active page and footer.
#[component]
fn Site() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    start_loading_timer(ctx);

    view! {
        <CustomCursor />
        <Show
            when=move || !ctx.is_loading()
            fallback=|| view! { <LoadingScreen /> }
        >
            <Header />
            <main>
                <PageRouter />
            </main>
            <Footer />
        </Show>
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::cell::Cell;
    use std::rc::Rc;
    use std::time::Duration;

    use wasm_bindgen::JsCast;
    use wasm_bindgen_test::*;

    use super::*;
    use crate::utils::dom;

    wasm_bindgen_test_configure!(run_in_browser);

    fn mount_site() -> web_sys::HtmlElement {
        let document = document();
        let root = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&root).unwrap();
        mount_to(root.clone(), App).forget();
        root
    }

    /// Mount the site without the error boundary and hand back its context.
    fn mount_site_with_context() -> (web_sys::HtmlElement, AppContext) {
        let document = document();
        let root = document
            .create_element("div")
            .unwrap()
            .unchecked_into::<web_sys::HtmlElement>();
        document.body().unwrap().append_child(&root).unwrap();

        let slot = Rc::new(Cell::new(None));
        let provided = Rc::clone(&slot);
        mount_to(root.clone(), move || {
            let ctx = AppContext::new(SiteContent::bundled().unwrap());
            provide_context(ctx);
            provided.set(Some(ctx));
            view! { <Site /> }
        })
        .forget();
        (root, slot.get().unwrap())
    }

    fn submit_is_prevented(form: &web_sys::Element) -> bool {
        let init = web_sys::EventInit::new();
        init.set_cancelable(true);
        let event = web_sys::Event::new_with_event_init_dict("submit", &init).unwrap();
        let not_prevented = form.dispatch_event(&event).unwrap();
        !not_prevented && event.default_prevented()
    }

    async fn sleep(ms: u64) {
        gloo_timers::future::sleep(Duration::from_millis(ms)).await;
    }

    #[wasm_bindgen_test]
    async fn test_splash_then_home() {
        let root = mount_site();
        assert!(root.inner_html().contains(crate::config::APP_NAME));
        assert!(root.query_selector("main").unwrap().is_none());

        sleep(u64::from(LOADING_SPLASH_MS) + 200).await;
        assert!(root.query_selector("main").unwrap().is_some());
        assert!(root.inner_html().contains("INNOVATING"));

        // autoplay is only allowed on a muted video
        let video = root
            .query_selector("main video")
            .unwrap()
            .unwrap()
            .unchecked_into::<web_sys::HtmlMediaElement>();
        assert!(video.muted());
        assert!(video.autoplay());

        // the spotlight image sits below the fold, still masked
        let spotlight = root
            .query_selector(r#"main [data-cursor-hover="image"][style*="clip-path: inset(100%"]"#)
            .unwrap();
        assert!(spotlight.is_some());
    }

    #[wasm_bindgen_test]
    async fn test_splash_holds_for_full_duration_and_stays_gone() {
        let (root, ctx) = mount_site_with_context();

        sleep(u64::from(LOADING_SPLASH_MS) - 300).await;
        assert!(ctx.loading.with_untracked(|gate| gate.is_loading()));
        assert!(root.query_selector("main").unwrap().is_none());

        sleep(500).await;
        assert!(!ctx.loading.with_untracked(|gate| gate.is_loading()));
        assert!(root.query_selector("main").unwrap().is_some());

        ctx.set_page(PageId::Services);
        sleep(200).await;
        assert!(!ctx.loading.with_untracked(|gate| gate.is_loading()));
        assert!(root.query_selector("main").unwrap().is_some());
    }

    #[wasm_bindgen_test]
    async fn test_fresh_load_ignores_hash() {
        dom::window().unwrap().location().set_hash("#/contact").unwrap();
        let root = mount_site();
        sleep(u64::from(LOADING_SPLASH_MS) + 200).await;
        assert!(root.inner_html().contains("INNOVATING"));
        assert!(!root.inner_html().contains("Send Message"));
    }

    #[wasm_bindgen_test]
    async fn test_newsletter_form_does_not_submit() {
        let root = mount_site();
        sleep(u64::from(LOADING_SPLASH_MS) + 200).await;

        let form = root.query_selector("footer form").unwrap().unwrap();
        assert!(submit_is_prevented(&form));
    }

    #[wasm_bindgen_test]
    async fn test_contact_form_does_not_submit() {
        let (root, ctx) = mount_site_with_context();
        sleep(u64::from(LOADING_SPLASH_MS) + 200).await;

        ctx.set_page(PageId::Contact);
        // exit wipe, then the contact page mounts
        sleep(1_200).await;
        assert_eq!(ctx.nav.with_untracked(|nav| nav.current()), PageId::Contact);
        assert!(root.inner_html().contains("Send Message"));

        let form = root.query_selector("main form").unwrap().unwrap();
        assert!(submit_is_prevented(&form));
    }

    #[wasm_bindgen_test]
    fn test_scroll_reset_is_instant() {
        let window = dom::window().unwrap();
        let body = window.document().unwrap().body().unwrap();
        body.style().set_property("height", "5000px").unwrap();
        window.scroll_to_with_x_and_y(0.0, 800.0);

        dom::scroll_to_top();
        assert_eq!(dom::scroll_y(), 0.0);
        body.style().remove_property("height").unwrap();
    }
}
