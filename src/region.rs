//! Suppression region tracking.
//!
//! A region is opened by a rule that names a closing rule (block comments) and
//! lasts until a line matches that closing rule. While a region is active,
//! ordinary classification is bypassed. At most one region is active at a time.

use crate::error::RegionError;

/// Current region state of a classifier
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RegionState {
    #[default]
    Idle,
    /// Inside a region opened by the rule at catalog index `opening`
    InRegion { opening: usize },
}

impl RegionState {
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, RegionState::Idle)
    }

    /// Catalog index of the rule that opened the active region
    #[must_use]
    pub fn opening(self) -> Option<usize> {
        match self {
            RegionState::Idle => None,
            RegionState::InRegion { opening } => Some(opening),
        }
    }
}

/// Tracks the single active suppression region
#[derive(Debug, Clone, Default)]
pub struct RegionTracker {
    state: RegionState,
}

impl RegionTracker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RegionState {
        self.state
    }

    /// Open a region for the rule at `opening`.
    ///
    /// Nested regions are not supported: opening a region while one is active
    /// is reported and leaves the active region untouched.
    pub fn enter(&mut self, opening: usize) -> Result<(), RegionError> {
        if let RegionState::InRegion { opening: active } = self.state {
            return Err(RegionError::AlreadyInRegion {
                active,
                requested: opening,
            });
        }
        tracing::trace!(opening, "entering suppression region");
        self.state = RegionState::InRegion { opening };
        Ok(())
    }

    /// Close the active region. No-op when idle.
    pub fn exit(&mut self) {
        if let RegionState::InRegion { opening } = self.state {
            tracing::trace!(opening, "leaving suppression region");
        }
        self.state = RegionState::Idle;
    }

    /// Whether ordinary classification is bypassed for the next line
    #[must_use]
    pub fn is_suppressed(&self) -> bool {
        !self.state.is_idle()
    }

    pub fn reset(&mut self) {
        self.state = RegionState::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_idle() {
        let tracker = RegionTracker::new();
        assert_eq!(tracker.state(), RegionState::Idle);
        assert!(!tracker.is_suppressed());
    }

    #[test]
    fn test_enter_and_exit() {
        let mut tracker = RegionTracker::new();
        tracker.enter(6).unwrap();
        assert!(tracker.is_suppressed());
        assert_eq!(tracker.state().opening(), Some(6));

        tracker.exit();
        assert!(!tracker.is_suppressed());
        assert_eq!(tracker.state(), RegionState::Idle);
    }

    #[test]
    fn test_nested_enter_is_rejected() {
        let mut tracker = RegionTracker::new();
        tracker.enter(6).unwrap();
        let err = tracker.enter(42).unwrap_err();
        assert_eq!(
            err,
            RegionError::AlreadyInRegion {
                active: 6,
                requested: 42,
            }
        );
        // The first region stays active.
        assert_eq!(tracker.state(), RegionState::InRegion { opening: 6 });
    }

    #[test]
    fn test_exit_when_idle_is_noop() {
        let mut tracker = RegionTracker::new();
        tracker.exit();
        assert_eq!(tracker.state(), RegionState::Idle);
    }

    #[test]
    fn test_reset() {
        let mut tracker = RegionTracker::new();
        tracker.enter(1).unwrap();
        tracker.reset();
        assert!(tracker.state().is_idle());
        assert!(tracker.enter(2).is_ok());
    }
}
