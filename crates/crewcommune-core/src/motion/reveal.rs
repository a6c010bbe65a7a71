//! Word and line reveal planning, and the viewport trigger behind it.

use super::presets;
use super::transition::TransitionConfig;

/// Default visible fraction that triggers a reveal.
pub const DEFAULT_THRESHOLD: f64 = 0.3;

/// Split on spaces. Runs of spaces and empty input produce no units.
pub fn split_words(text: &str) -> Vec<&str> {
    text.split(' ').filter(|w| !w.is_empty()).collect()
}

/// Split on newlines. Blank lines produce no units.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|l| l.trim_end_matches('\r'))
        .filter(|l| !l.trim().is_empty())
        .collect()
}

/// How a text block is cut into animated units.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RevealMode {
    Words,
    Lines,
}

/// One animated slice of text.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealUnit {
    pub text: String,
    /// Start offset relative to the trigger, stagger included.
    pub delay_ms: f64,
}

/// Units of a text block plus the transition each unit plays.
#[derive(Clone, Debug, PartialEq)]
pub struct RevealPlan {
    pub units: Vec<RevealUnit>,
    pub unit_transition: TransitionConfig,
}

impl RevealPlan {
    /// Plan a reveal of `text` starting `delay_ms` after the trigger fires.
    pub fn new(text: &str, mode: RevealMode, delay_ms: f64) -> Self {
        let (parts, stagger, unit_transition) = match mode {
            RevealMode::Words => (
                split_words(text),
                presets::WORD_STAGGER_MS,
                presets::word_unit(),
            ),
            RevealMode::Lines => (
                split_lines(text),
                presets::LINE_STAGGER_MS,
                presets::line_unit(),
            ),
        };
        let delay_ms = if delay_ms.is_finite() { delay_ms.max(0.0) } else { 0.0 };

        let units = parts
            .into_iter()
            .enumerate()
            .map(|(i, part)| RevealUnit {
                text: part.to_string(),
                delay_ms: delay_ms + stagger * i as f64,
            })
            .collect();

        Self {
            units,
            unit_transition,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }
}

/// Reveal latch driven by viewport intersection.
///
/// With `once` the first intersection latches the reveal for good;
/// otherwise the element hides again when it leaves the viewport and
/// replays on the next entry.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewportTrigger {
    once: bool,
    threshold: f64,
    revealed: bool,
}

impl ViewportTrigger {
    pub fn new(once: bool, threshold: f64) -> Self {
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        Self {
            once,
            threshold,
            revealed: false,
        }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Feed an observation of the visible fraction. Returns the new state.
    pub fn observe(&mut self, visible_ratio: f64) -> bool {
        // observers report ratios a hair under the threshold they fired for
        let visible = visible_ratio > 0.0 && visible_ratio + 1e-3 >= self.threshold;
        if self.once {
            self.revealed |= visible;
        } else {
            self.revealed = visible;
        }
        self.revealed
    }

    /// A latched `once` trigger has nothing left to observe.
    pub fn is_done(&self) -> bool {
        self.once && self.revealed
    }
}

impl Default for ViewportTrigger {
    fn default() -> Self {
        Self::new(true, DEFAULT_THRESHOLD)
    }
}
