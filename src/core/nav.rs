//! Navigation state: one clamped 1-based slide index plus the mirrored
//! fullscreen flag.
//!
//! The index operations are total: out-of-range requests are rejected, the
//! index never wraps and never leaves `[1, len]`. The fullscreen flag is not
//! owned here either - the host terminal is authoritative, and the flag only
//! changes through `apply_fullscreen` when a change notification arrives.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
    current: usize,
    fullscreen: bool,
    len: usize,
}

impl NavigationState {
    /// Fresh state on the first slide. `len` must be at least 1.
    pub fn new(len: usize) -> Self {
        debug_assert!(len >= 1);
        Self {
            current: 1,
            fullscreen: false,
            len,
        }
    }

    /// Like `new`, but starting on `start` (clamped into `[1, len]`).
    pub fn with_start(len: usize, start: usize) -> Self {
        let mut state = Self::new(len);
        state.current = start.clamp(1, len);
        state
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    pub fn at_first(&self) -> bool {
        self.current == 1
    }

    pub fn at_last(&self) -> bool {
        self.current == self.len
    }

    /// Advance one slide. No-op on the last slide. Returns whether the index
    /// moved.
    pub fn next(&mut self) -> bool {
        if self.current < self.len {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Go back one slide. No-op on the first slide. Returns whether the index
    /// moved.
    pub fn previous(&mut self) -> bool {
        if self.current > 1 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to slide `target`. Out-of-range requests are rejected without
    /// mutating state. Returns whether the index changed.
    pub fn go_to(&mut self, target: usize) -> bool {
        if target < 1 || target > self.len || target == self.current {
            return false;
        }
        self.current = target;
        true
    }

    /// Reconcile the fullscreen flag with the authoritative platform value.
    /// Returns whether the flag changed.
    pub fn apply_fullscreen(&mut self, active: bool) -> bool {
        if self.fullscreen == active {
            return false;
        }
        self.fullscreen = active;
        true
    }
}
