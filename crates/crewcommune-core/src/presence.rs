//! Enter/exit choreography between pages.
//!
//! [`PagePresence`] decides which page subtree is mounted and how far its
//! clip-region wipe has progressed. It is advanced by frame deltas, so the
//! same state machine drives the browser and the tests.
//!
//! Only one page is ever shown. The outgoing page stays mounted until its
//! exit wipe completes, then the incoming page replaces it and plays its
//! enter wipe after a short delay.
//!
//! Navigation while a transition runs retargets it, latest request wins:
//! during an exit only the landing page changes; during an enter the page
//! starts exiting from wherever its wipe had reached. An exit only covers
//! the strip that is still visible, and a page that is still fully masked
//! is swapped out at once.

use std::fmt;

use crate::motion::presets;
use crate::motion::{PropertyRange, TransitionConfig, Tween};
use crate::page::PageId;

/// Lifecycle of the shown page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Enter wipe running.
    #[default]
    Entering,
    /// Fully visible, nothing animating.
    Settled,
    /// Exit wipe running; a different page is pending.
    Exiting,
}

/// Rectangular visibility mask, in percent from each edge.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClipInset {
    pub top: f64,
    pub bottom: f64,
}

impl ClipInset {
    pub const VISIBLE: Self = Self {
        top: 0.0,
        bottom: 0.0,
    };

    pub fn is_visible(&self) -> bool {
        *self == Self::VISIBLE
    }
}

impl fmt::Display for ClipInset {
    /// CSS `clip-path` value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inset({}% 0% {}% 0%)", self.top, self.bottom)
    }
}

/// Enter and exit timing of the page wipe.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageChoreography {
    /// Drives the bottom inset of the incoming page.
    pub enter: TransitionConfig,
    /// Drives the top inset of the outgoing page.
    pub exit: TransitionConfig,
}

impl Default for PageChoreography {
    fn default() -> Self {
        Self {
            enter: presets::page_enter(),
            exit: presets::page_exit(),
        }
    }
}

/// Page presence state machine.
#[derive(Clone, Debug, PartialEq)]
pub struct PagePresence {
    shown: PageId,
    pending: Option<PageId>,
    phase: TransitionPhase,
    tween: Tween,
    /// Bottom inset frozen when an enter was interrupted.
    held_bottom: f64,
    choreography: PageChoreography,
}

impl PagePresence {
    /// Show `initial`, starting with its enter wipe.
    pub fn new(initial: PageId, choreography: PageChoreography) -> Self {
        Self {
            shown: initial,
            pending: None,
            phase: TransitionPhase::Entering,
            tween: Tween::new(choreography.enter),
            held_bottom: 0.0,
            choreography,
        }
    }

    pub fn shown(&self) -> PageId {
        self.shown
    }

    pub fn pending(&self) -> Option<PageId> {
        self.pending
    }

    pub fn phase(&self) -> TransitionPhase {
        self.phase
    }

    pub fn is_animating(&self) -> bool {
        self.phase != TransitionPhase::Settled
    }

    /// Ask for `target` to become the shown page.
    pub fn request(&mut self, target: PageId) {
        match self.phase {
            TransitionPhase::Exiting => {
                self.pending = Some(target);
            }
            _ if target == self.shown => {}
            TransitionPhase::Entering if self.tween.value() >= 100.0 => {
                // nothing of the page has been uncovered yet
                self.shown = target;
                self.pending = None;
                self.held_bottom = 0.0;
                self.tween = Tween::new(self.choreography.enter);
            }
            TransitionPhase::Entering | TransitionPhase::Settled => {
                self.held_bottom = match self.phase {
                    TransitionPhase::Entering => self.tween.value(),
                    _ => 0.0,
                };
                self.pending = Some(target);
                self.phase = TransitionPhase::Exiting;
                self.tween = Tween::new(self.exit_over(100.0 - self.held_bottom));
            }
        }
    }

    /// Exit timing shortened to sweep only the `visible` percent strip.
    ///
    /// Keeps the wipe speed of the full exit.
    fn exit_over(&self, visible: f64) -> TransitionConfig {
        let exit = self.choreography.exit;
        let fraction = (visible / 100.0).clamp(0.0, 1.0);
        let range = exit.range();
        TransitionConfig::from_parts(
            exit.duration_ms() * fraction,
            exit.delay_ms(),
            exit.easing(),
            PropertyRange::new(range.from, range.lerp(fraction)),
        )
    }

    /// Advance the running wipe by `dt_ms`.
    ///
    /// Returns `true` when the shown page was swapped during this tick.
    pub fn tick(&mut self, dt_ms: f64) -> bool {
        if self.phase == TransitionPhase::Settled {
            return false;
        }
        self.tween.advance(dt_ms);
        if !self.tween.is_finished() {
            return false;
        }

        match self.phase {
            TransitionPhase::Exiting => {
                let next = self.pending.take().unwrap_or(self.shown);
                let swapped = next != self.shown;
                self.shown = next;
                self.held_bottom = 0.0;
                self.phase = TransitionPhase::Entering;
                self.tween = Tween::new(self.choreography.enter);
                swapped
            }
            TransitionPhase::Entering => {
                self.phase = TransitionPhase::Settled;
                false
            }
            TransitionPhase::Settled => false,
        }
    }

    /// Current mask of the shown page.
    pub fn clip(&self) -> ClipInset {
        match self.phase {
            TransitionPhase::Entering => ClipInset {
                top: 0.0,
                bottom: self.tween.value(),
            },
            TransitionPhase::Settled => ClipInset::VISIBLE,
            TransitionPhase::Exiting => ClipInset {
                top: self.tween.value(),
                bottom: self.held_bottom,
            },
        }
    }
}

impl Default for PagePresence {
    fn default() -> Self {
        Self::new(PageId::Home, PageChoreography::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME_MS: f64 = 16.0;

    /// Tick until settled, collecting every page that was shown.
    fn settle(presence: &mut PagePresence) -> Vec<PageId> {
        let mut seen = vec![presence.shown()];
        for _ in 0..1_000 {
            if presence.tick(FRAME_MS) {
                seen.push(presence.shown());
            }
            if !presence.is_animating() {
                return seen;
            }
        }
        panic!("presence never settled: {:?}", presence);
    }

    #[test]
    fn test_initial_page_enters_then_settles() {
        let mut presence = PagePresence::default();
        assert_eq!(presence.phase(), TransitionPhase::Entering);
        assert_eq!(presence.clip(), ClipInset { top: 0.0, bottom: 100.0 });
        settle(&mut presence);
        assert_eq!(presence.phase(), TransitionPhase::Settled);
        assert!(presence.clip().is_visible());
    }

    #[test]
    fn test_every_page_ends_up_shown() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        for page in PageId::ALL.into_iter().rev() {
            presence.request(page);
            settle(&mut presence);
            assert_eq!(presence.shown(), page);
            assert_eq!(presence.phase(), TransitionPhase::Settled);
            assert_eq!(presence.pending(), None);
        }
    }

    #[test]
    fn test_exit_completes_before_enter_begins() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Events);

        // outgoing page stays shown for the whole exit wipe
        let mut elapsed = 0.0;
        while elapsed + FRAME_MS < presets::PAGE_WIPE_MS {
            assert!(!presence.tick(FRAME_MS));
            elapsed += FRAME_MS;
            assert_eq!(presence.shown(), PageId::Home);
            assert_eq!(presence.phase(), TransitionPhase::Exiting);
        }
        assert!(presence.clip().top > 90.0);

        assert!(presence.tick(FRAME_MS));
        assert_eq!(presence.shown(), PageId::Events);
        assert_eq!(presence.phase(), TransitionPhase::Entering);
        // incoming page is fully masked during its start delay
        presence.tick(presets::PAGE_ENTER_DELAY_MS / 2.0);
        assert_eq!(presence.clip(), ClipInset { top: 0.0, bottom: 100.0 });
    }

    #[test]
    fn test_same_page_request_is_noop() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Home);
        assert_eq!(presence.phase(), TransitionPhase::Settled);
    }

    #[test]
    fn test_latest_request_wins_during_exit() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Services);
        presence.tick(200.0);
        presence.request(PageId::About);
        presence.request(PageId::Contact);
        let seen = settle(&mut presence);
        assert_eq!(seen, vec![PageId::Home, PageId::Contact]);
    }

    #[test]
    fn test_interrupted_enter_exits_from_current_mask() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Services);
        settle_exit(&mut presence);
        presence.tick(500.0);
        let bottom = presence.clip().bottom;
        assert!(bottom > 0.0 && bottom < 100.0);

        presence.request(PageId::About);
        assert_eq!(presence.phase(), TransitionPhase::Exiting);
        assert_eq!(presence.clip(), ClipInset { top: 0.0, bottom });

        let seen = settle(&mut presence);
        assert_eq!(seen, vec![PageId::Services, PageId::About]);
    }

    #[test]
    fn test_interrupted_exit_stops_at_visible_strip() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Services);
        settle_exit(&mut presence);
        presence.tick(500.0);
        let bottom = presence.clip().bottom;

        presence.request(PageId::About);
        let budget = presets::PAGE_WIPE_MS * (100.0 - bottom) / 100.0;
        let mut elapsed = 0.0;
        while !presence.tick(FRAME_MS) {
            elapsed += FRAME_MS;
            // the top inset never runs past the held bottom edge
            assert!(presence.clip().top + bottom <= 100.0 + 1e-9);
            assert!(elapsed <= budget, "exit ran {elapsed} ms, strip needs {budget} ms");
        }
        assert_eq!(presence.shown(), PageId::About);
    }

    #[test]
    fn test_request_during_enter_delay_swaps_at_once() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Services);
        settle_exit(&mut presence);
        presence.tick(presets::PAGE_ENTER_DELAY_MS / 2.0);
        assert_eq!(presence.clip(), ClipInset { top: 0.0, bottom: 100.0 });

        presence.request(PageId::About);
        assert_eq!(presence.shown(), PageId::About);
        assert_eq!(presence.phase(), TransitionPhase::Entering);
        assert_eq!(presence.pending(), None);
        assert_eq!(presence.clip(), ClipInset { top: 0.0, bottom: 100.0 });

        // only the fresh enter remains
        let enter_ms = presets::page_enter().total_ms();
        let mut elapsed = 0.0;
        while presence.is_animating() {
            assert!(!presence.tick(FRAME_MS));
            elapsed += FRAME_MS;
        }
        assert!(elapsed < enter_ms + FRAME_MS);
        assert_eq!(presence.shown(), PageId::About);
    }

    #[test]
    fn test_returning_to_outgoing_page() {
        let mut presence = PagePresence::default();
        settle(&mut presence);
        presence.request(PageId::Events);
        presence.tick(100.0);
        presence.request(PageId::Home);
        let seen = settle(&mut presence);
        assert_eq!(seen, vec![PageId::Home]);
        assert_eq!(presence.shown(), PageId::Home);
    }

    #[test]
    fn test_clip_css() {
        let clip = ClipInset { top: 0.0, bottom: 100.0 };
        assert_eq!(clip.to_string(), "inset(0% 0% 100% 0%)");
        assert_eq!(ClipInset::VISIBLE.to_string(), "inset(0% 0% 0% 0%)");
    }

    fn settle_exit(presence: &mut PagePresence) {
        while presence.phase() == TransitionPhase::Exiting {
            presence.tick(FRAME_MS);
        }
    }
}
