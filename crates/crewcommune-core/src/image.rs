//! Image source with a placeholder fallback.

/// Image URL that degrades to a placeholder when loading fails.
///
/// The swap happens at most once: if the placeholder itself fails the
/// source stays put instead of bouncing between the two.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageSource {
    primary: String,
    placeholder: String,
    failed: bool,
}

impl ImageSource {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            placeholder: placeholder.into(),
            failed: false,
        }
    }

    /// URL the `<img>` element should currently point at.
    pub fn current(&self) -> &str {
        if self.failed {
            &self.placeholder
        } else {
            &self.primary
        }
    }

    pub fn is_fallback(&self) -> bool {
        self.failed
    }

    /// Record a load failure. Returns `true` when the source changed.
    pub fn mark_failed(&mut self) -> bool {
        if self.failed || self.primary == self.placeholder {
            return false;
        }
        tracing::warn!(src = %self.primary, "image failed to load, using placeholder");
        self.failed = true;
        true
    }
}
