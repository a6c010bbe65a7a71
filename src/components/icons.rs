//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::IconKind;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuArrowRight as ArrowRight, LuAward as Award, LuBriefcase as Briefcase,
        LuChevronDown as ChevronDown, LuGlobe as Globe, LuMail as Mail, LuMedal as Medal,
        LuMenu as Menu, LuPhone as Phone, LuTarget as Target, LuTrendingUp as TrendingUp,
        LuUsers as Users, LuX as Close,
    };
    // Lucide ships no brand marks.
    pub use super::bootstrap::{Instagram, Linkedin, Twitter};
}

mod bootstrap {
    pub use icondata::{
        BsArrowRight as ArrowRight, BsAward as Award, BsBriefcase as Briefcase,
        BsChevronDown as ChevronDown, BsEnvelope as Mail, BsGlobe as Globe,
        BsGraphUpArrow as TrendingUp, BsInstagram as Instagram, BsLinkedin as Linkedin,
        BsList as Menu, BsPeople as Users, BsTelephone as Phone, BsTrophy as Medal,
        BsTwitter as Twitter, BsXLg as Close, BsBullseye as Target,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(CHEVRON_DOWN, ChevronDown);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(MEDAL, Medal);
themed_icon!(BRIEFCASE, Briefcase);
themed_icon!(USERS, Users);
themed_icon!(GLOBE, Globe);
themed_icon!(AWARD, Award);
themed_icon!(TARGET, Target);
themed_icon!(TRENDING_UP, TrendingUp);
themed_icon!(TWITTER, Twitter);
themed_icon!(INSTAGRAM, Instagram);
themed_icon!(LINKEDIN, Linkedin);

/// Icon for a content entry.
pub fn for_kind(kind: IconKind) -> Icon {
    match kind {
        IconKind::Medal => MEDAL,
        IconKind::Briefcase => BRIEFCASE,
        IconKind::Users => USERS,
        IconKind::Globe => GLOBE,
        IconKind::Award => AWARD,
        IconKind::Target => TARGET,
        IconKind::TrendingUp => TRENDING_UP,
    }
}
