//! One-shot loading splash gate.

/// Tracks whether the initial splash is still up.
///
/// Starts loading and can only move to done, once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LoadingGate {
    loading: bool,
}

impl LoadingGate {
    pub fn new() -> Self {
        Self { loading: true }
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Dismiss the splash.
    ///
    /// Returns `true` only for the call that actually flipped the state;
    /// later calls are no-ops.
    pub fn finish(&mut self) -> bool {
        let was_loading = self.loading;
        self.loading = false;
        was_loading
    }
}

impl Default for LoadingGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_loading() {
        assert!(LoadingGate::new().is_loading());
    }

    #[test]
    fn test_finishes_exactly_once() {
        let mut gate = LoadingGate::new();
        assert!(gate.finish());
        assert!(!gate.is_loading());
        assert!(!gate.finish());
        assert!(!gate.finish());
        assert!(!gate.is_loading());
    }
}
