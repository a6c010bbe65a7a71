//! Page identity and the navigation controller.

use std::fmt;

use serde::Deserialize;

/// The five pages of the site.
///
/// Parsing never fails: any name outside the closed set maps to
/// [`PageId::Home`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum PageId {
    /// Landing page (default)
    #[default]
    Home,
    Services,
    About,
    Events,
    Contact,
}

impl PageId {
    /// Every page, in navigation order.
    pub const ALL: [PageId; 5] = [
        PageId::Home,
        PageId::Services,
        PageId::About,
        PageId::Events,
        PageId::Contact,
    ];

    /// Parse a page name, falling back to `Home` for anything unknown.
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "home" => Self::Home,
            "services" => Self::Services,
            "about" => Self::About,
            "events" => Self::Events,
            "contact" => Self::Contact,
            other => {
                tracing::debug!(page = other, "unknown page, falling back to home");
                Self::Home
            }
        }
    }

    /// Stable lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Services => "services",
            Self::About => "about",
            Self::Events => "events",
            Self::Contact => "contact",
        }
    }

    /// Human readable label used in navigation menus.
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Services => "Services",
            Self::About => "About",
            Self::Events => "Events",
            Self::Contact => "Contact",
        }
    }
}

impl From<&str> for PageId {
    fn from(name: &str) -> Self {
        Self::from_name(name)
    }
}

impl From<String> for PageId {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ============================================================================
// Navigator
// ============================================================================

/// Host viewport the navigator resets before every page swap.
pub trait Viewport {
    /// Jump to the top-left corner without smooth scrolling.
    fn scroll_to_top(&self);
}

/// Single-writer holder of the current page.
///
/// `set_page` is the only way to change the page. It resets the viewport
/// first so the incoming page always starts at the top, whatever the scroll
/// position on the outgoing page was.
#[derive(Clone, Debug)]
pub struct Navigator<V> {
    current: PageId,
    viewport: V,
}

impl<V: Viewport> Navigator<V> {
    /// Start on [`PageId::Home`]. There is no URL restore: a reload always
    /// lands on the landing page.
    pub fn new(viewport: V) -> Self {
        Self {
            current: PageId::Home,
            viewport,
        }
    }

    pub fn current(&self) -> PageId {
        self.current
    }

    /// Reset the scroll position, then switch to `page`.
    pub fn set_page(&mut self, page: PageId) {
        self.viewport.scroll_to_top();
        if self.current != page {
            tracing::debug!(from = %self.current, to = %page, "navigate");
        }
        self.current = page;
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    /// Records scroll resets into a log shared with the test.
    #[derive(Clone, Default)]
    struct RecordingViewport {
        log: Rc<RefCell<Vec<String>>>,
    }

    impl Viewport for RecordingViewport {
        fn scroll_to_top(&self) {
            self.log.borrow_mut().push("scroll".to_string());
        }
    }

    #[test]
    fn test_page_parsing() {
        assert_eq!(PageId::from_name("home"), PageId::Home);
        assert_eq!(PageId::from_name("services"), PageId::Services);
        assert_eq!(PageId::from_name("about"), PageId::About);
        assert_eq!(PageId::from_name("events"), PageId::Events);
        assert_eq!(PageId::from_name("contact"), PageId::Contact);
        assert_eq!(PageId::from_name(" Contact "), PageId::Contact);
    }

    #[test]
    fn test_unknown_page_falls_back_to_home() {
        assert_eq!(PageId::from_name(""), PageId::Home);
        assert_eq!(PageId::from_name("blog"), PageId::Home);
        assert_eq!(PageId::from("../etc/passwd"), PageId::Home);
    }

    #[test]
    fn test_name_roundtrips_for_every_page() {
        for page in PageId::ALL {
            assert_eq!(PageId::from_name(page.name()), page);
        }
    }

    #[test]
    fn test_deserialize_with_fallback() {
        #[derive(Deserialize)]
        struct Link {
            target: PageId,
        }

        let link: Link = toml::from_str(r#"target = "events""#).unwrap();
        assert_eq!(link.target, PageId::Events);

        let link: Link = toml::from_str(r#"target = "careers""#).unwrap();
        assert_eq!(link.target, PageId::Home);
    }

    #[test]
    fn test_navigator_starts_home() {
        let nav = Navigator::new(RecordingViewport::default());
        assert_eq!(nav.current(), PageId::Home);
    }

    #[test]
    fn test_set_page_resets_scroll_before_swapping() {
        let viewport = RecordingViewport::default();
        let log = viewport.log.clone();
        let mut nav = Navigator::new(viewport);

        for page in PageId::ALL {
            log.borrow_mut().clear();
            nav.set_page(page);
            log.borrow_mut().push(format!("page={}", nav.current()));
            assert_eq!(
                *log.borrow(),
                vec!["scroll".to_string(), format!("page={}", page)]
            );
        }
    }

    #[test]
    fn test_same_page_still_resets_scroll() {
        let viewport = RecordingViewport::default();
        let log = viewport.log.clone();
        let mut nav = Navigator::new(viewport);

        nav.set_page(PageId::Home);
        nav.set_page(PageId::Home);
        assert_eq!(log.borrow().len(), 2);
        assert_eq!(nav.current(), PageId::Home);
    }
}
