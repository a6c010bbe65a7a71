//! Custom cursor variants.

/// Look of the custom cursor, picked from what the pointer is over.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CursorVariant {
    #[default]
    Default,
    /// Over a link or button.
    Link,
    /// Over an image; grows into a "View" disc.
    Image,
    /// Over an element that pulls the cursor in.
    Magnetic,
}

/// Resolved visual properties of a [`CursorVariant`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CursorStyle {
    pub size_px: f64,
    pub background: &'static str,
    pub blend_mode: &'static str,
    pub scale: f64,
    pub label: &'static str,
}

const ACCENT: &str = "#BFFF00";
const LIGHT: &str = "#F5F5F5";

impl CursorVariant {
    /// Pick a variant from the nearest `data-cursor-hover` value and whether
    /// a `data-cursor-magnetic` ancestor exists. Magnetic wins.
    pub fn resolve(hover: Option<&str>, magnetic: bool) -> Self {
        if magnetic {
            return Self::Magnetic;
        }
        match hover {
            Some("image") => Self::Image,
            Some(_) => Self::Link,
            None => Self::Default,
        }
    }

    pub fn style(self) -> CursorStyle {
        match self {
            Self::Default => CursorStyle {
                size_px: 16.0,
                background: ACCENT,
                blend_mode: "normal",
                scale: 1.0,
                label: "",
            },
            Self::Link => CursorStyle {
                size_px: 24.0,
                background: ACCENT,
                blend_mode: "difference",
                scale: 1.0,
                label: "",
            },
            Self::Image => CursorStyle {
                size_px: 64.0,
                background: LIGHT,
                blend_mode: "normal",
                scale: 1.0,
                label: "View",
            },
            Self::Magnetic => CursorStyle {
                size_px: 16.0,
                background: ACCENT,
                blend_mode: "normal",
                scale: 0.5,
                label: "",
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_variants() {
        assert_eq!(CursorVariant::resolve(None, false), CursorVariant::Default);
        assert_eq!(CursorVariant::resolve(Some("link"), false), CursorVariant::Link);
        assert_eq!(CursorVariant::resolve(Some(""), false), CursorVariant::Link);
        assert_eq!(CursorVariant::resolve(Some("image"), false), CursorVariant::Image);
        assert_eq!(CursorVariant::resolve(Some("image"), true), CursorVariant::Magnetic);
    }

    #[test]
    fn test_only_image_has_label() {
        assert_eq!(CursorVariant::Image.style().label, "View");
        assert_eq!(CursorVariant::Image.style().size_px, 64.0);
        assert_eq!(CursorVariant::Link.style().blend_mode, "difference");
        assert_eq!(CursorVariant::Default.style().label, "");
        assert_eq!(CursorVariant::Magnetic.style().scale, 0.5);
    }
}
