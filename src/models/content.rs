//! Site content model.
//!
//! Everything the pages print comes from `assets/content/site.toml`,
//! embedded at compile time (see [`SITE_CONTENT`]).

use crewcommune_core::PageId;
use serde::Deserialize;

use crate::config::SITE_CONTENT;
use crate::error::ContentError;

/// Icons that content entries may reference by name.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum IconKind {
    Medal,
    Briefcase,
    Users,
    Globe,
    Award,
    Target,
    TrendingUp,
}

/// Copy for all five pages.
#[derive(Clone, Debug, Deserialize)]
pub struct SiteContent {
    pub home: HomeContent,
    pub services: ServicesContent,
    pub about: AboutContent,
    pub events: EventsContent,
    pub contact: ContactContent,
}

impl SiteContent {
    /// Parse and check a content document.
    pub fn parse(source: &str) -> Result<Self, ContentError> {
        let content: Self = toml::from_str(source)?;
        content.validate()?;
        Ok(content)
    }

    /// The content compiled into the binary.
    pub fn bundled() -> Result<Self, ContentError> {
        Self::parse(SITE_CONTENT)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.home.services.is_empty() {
            return Err(ContentError::Empty("home.services"));
        }
        if self.services.offerings.is_empty() {
            return Err(ContentError::Empty("services.offerings"));
        }
        if self.events.events.is_empty() {
            return Err(ContentError::Empty("events.events"));
        }
        Ok(())
    }
}

// ============================================================================
// Home
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct HomeContent {
    pub headline: String,
    pub headline_accent: String,
    pub marquee: String,
    pub expertise_title: String,
    pub philosophy: Philosophy,
    #[serde(default)]
    pub hero_images: Vec<HeroImage>,
    #[serde(default)]
    pub services: Vec<ServiceCard>,
    pub spotlight: Spotlight,
    pub founder: FounderCta,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Philosophy {
    /// Newline separated; revealed line by line.
    pub headline: String,
    pub body: String,
}

/// Hero image floating around the headline and drifting with the pointer.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct HeroImage {
    pub src: String,
    pub alt: String,
    /// Size in CSS pixels.
    pub width: u32,
    pub height: u32,
    /// Resting offset from the hero center, CSS pixels.
    pub x_offset: f64,
    pub y_offset: f64,
    /// Resting rotation, degrees.
    pub rotate: f64,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ServiceCard {
    pub title: String,
    pub icon: IconKind,
    pub description: String,
    pub image: String,
    /// Page opened when the card is clicked.
    pub target: PageId,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Spotlight {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
    pub image: String,
    pub image_alt: String,
    #[serde(default)]
    pub highlights: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct FounderCta {
    pub eyebrow: String,
    pub title: String,
    pub body: String,
    pub image: String,
    pub image_alt: String,
    pub cta_label: String,
    pub target: PageId,
}

// ============================================================================
// Services
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct ServicesContent {
    pub title: String,
    pub subtitle: String,
    pub faq_title: String,
    #[serde(default)]
    pub differentiators: Vec<Differentiator>,
    #[serde(default)]
    pub offerings: Vec<Offering>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Differentiator {
    pub stat: String,
    pub label: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Offering {
    pub title: String,
    pub icon: IconKind,
    pub image: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Faq {
    pub question: String,
    pub answer: String,
}

// ============================================================================
// About
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct AboutContent {
    pub eyebrow: String,
    pub title: String,
    pub intro: String,
    pub portrait: String,
    pub portrait_alt: String,
    pub mission_title: String,
    #[serde(default)]
    pub mission: Vec<String>,
    pub signature: String,
    pub milestones_title: String,
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    pub values_title: String,
    #[serde(default)]
    pub values: Vec<CoreValue>,
    pub team_title: String,
    #[serde(default)]
    pub team: Vec<TeamMember>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Milestone {
    /// Free-form so entries like "Today" fit.
    pub year: String,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct CoreValue {
    pub title: String,
    pub icon: IconKind,
    pub description: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct TeamMember {
    pub name: String,
    pub role: String,
    pub image: String,
}

// ============================================================================
// Events
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct EventsContent {
    pub title: String,
    pub subtitle: String,
    pub cta_title: String,
    pub cta_label: String,
    pub case_study_label: String,
    #[serde(default)]
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Event {
    pub title: String,
    pub date: String,
    pub location: String,
    pub description: String,
    pub image: String,
}

// ============================================================================
// Contact
// ============================================================================

#[derive(Clone, Debug, Deserialize)]
pub struct ContactContent {
    pub title: String,
    pub subtitle: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub offices: Vec<Office>,
}

impl ContactContent {
    /// `tel:` link target; dashes and spaces are dropped.
    pub fn phone_href(&self) -> String {
        let digits: String = self
            .phone
            .chars()
            .filter(|c| *c != '-' && !c.is_whitespace())
            .collect();
        format!("tel:{}", digits)
    }

    pub fn email_href(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Office {
    pub city: String,
    pub address: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_content_parses() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.home.hero_images.len(), 6);
        assert_eq!(content.home.services.len(), 5);
        assert_eq!(content.services.offerings.len(), 5);
        assert_eq!(content.services.faqs.len(), 4);
        assert_eq!(content.about.milestones.len(), 5);
        assert_eq!(content.about.team.len(), 4);
        assert_eq!(content.events.events.len(), 5);
        assert_eq!(content.contact.offices.len(), 2);
    }

    #[test]
    fn test_bundled_links_resolve() {
        let content = SiteContent::bundled().unwrap();
        assert!(
            content
                .home
                .services
                .iter()
                .all(|card| card.target == PageId::Services)
        );
        assert_eq!(content.home.founder.target, PageId::About);
    }

    #[test]
    fn test_multiline_headlines_survive_parsing() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.home.philosophy.headline.lines().count(), 2);
        assert_eq!(content.about.title.lines().count(), 2);
    }

    #[test]
    fn test_phone_href() {
        let content = SiteContent::bundled().unwrap();
        assert_eq!(content.contact.phone_href(), "tel:+919082355787");
        assert_eq!(content.contact.email_href(), "mailto:raikars.yash@gmail.com");
    }

    #[test]
    fn test_unknown_target_falls_back_home() {
        let source = SITE_CONTENT.replace(r#"target = "about""#, r#"target = "careers""#);
        let content = SiteContent::parse(&source).unwrap();
        assert_eq!(content.home.founder.target, PageId::Home);
    }

    #[test]
    fn test_invalid_content_is_an_error() {
        assert!(matches!(
            SiteContent::parse("home = 1"),
            Err(ContentError::Parse(_))
        ));

        let no_events = SITE_CONTENT.replace("[[events.events]]", "[[events.archive]]");
        assert!(matches!(
            SiteContent::parse(&no_events),
            Err(ContentError::Empty("events.events"))
        ));
    }
}
