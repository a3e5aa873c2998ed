//! Pure cursor state for a paging session.

/// Which navigation control fired.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum NavDirection {
    Back,
    Forward,
}

/// Cursor over a fixed page list.
///
/// Invariant: `index < page_count` at all times. Index arithmetic always
/// normalizes with a true mathematical modulo; with wraparound off it is the
/// button visibility rule that keeps the edges unreachable, not the math.
#[derive(Clone, Copy, Debug)]
pub(crate) struct NavState {
    index: usize,
    page_count: usize,
    wrap_around: bool,
}

impl NavState {
    pub(crate) fn new(index: usize, page_count: usize, wrap_around: bool) -> Self {
        debug_assert!(page_count > 0 && index < page_count);
        Self {
            index,
            page_count,
            wrap_around,
        }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }

    /// Whether the back button is rendered at the current position.
    pub(crate) fn shows_back(&self) -> bool {
        self.index > 0 || self.wrap_around
    }

    /// Whether the forward button is rendered at the current position.
    pub(crate) fn shows_forward(&self) -> bool {
        self.index < self.page_count - 1 || self.wrap_around
    }

    /// Apply one navigation event.
    ///
    /// An event for a control that is not rendered at the current position
    /// is ignored. Returns whether the cursor moved.
    pub(crate) fn apply(&mut self, direction: NavDirection) -> bool {
        let shown = match direction {
            NavDirection::Back => self.shows_back(),
            NavDirection::Forward => self.shows_forward(),
        };
        if !shown {
            return false;
        }

        let delta: i64 = match direction {
            NavDirection::Back => -1,
            NavDirection::Forward => 1,
        };
        let count = self.page_count as i64;
        let moved = self.index as i64 + delta;

        // True modulo so both underflow and overflow wrap regardless of sign.
        self.index = (((moved % count) + count) % count) as usize;
        true
    }
}
