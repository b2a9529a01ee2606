// SPDX-License-Identifier: MPL-2.0
//! Navigation state for cycling through the artwork catalog.
//!
//! This module provides the single cursor into the catalog. All index
//! changes pass through [`NavigationState::advance`] and
//! [`NavigationState::retreat`] so there is exactly one point of mutation;
//! view code only ever reads the current index.

use std::num::NonZeroUsize;

/// Cursor into a fixed-size, non-empty catalog.
///
/// The invariant `current_index < count` holds at all times. Both
/// navigation operations are total: the catalog length is non-zero by
/// construction, so the modulo arithmetic can never divide by zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationState {
    /// Index of the entry currently on display.
    current_index: usize,
    /// Number of entries the cursor cycles over.
    count: NonZeroUsize,
}

impl NavigationState {
    /// Creates a cursor over `count` entries, positioned on the first one.
    #[must_use]
    pub fn new(count: NonZeroUsize) -> Self {
        Self {
            current_index: 0,
            count,
        }
    }

    /// Returns the index of the entry currently on display.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    /// Returns the number of entries the cursor cycles over.
    #[must_use]
    pub fn count(&self) -> NonZeroUsize {
        self.count
    }

    /// Moves to the next entry and returns the new index.
    ///
    /// Wraps around to the first entry when at the last one.
    pub fn advance(&mut self) -> usize {
        self.current_index = (self.current_index + 1) % self.count.get();
        self.current_index
    }

    /// Moves to the previous entry and returns the new index.
    ///
    /// Wraps around to the last entry when at the first one.
    pub fn retreat(&mut self) -> usize {
        let n = self.count.get();
        self.current_index = (self.current_index + n - 1) % n;
        self.current_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cursor(count: usize) -> NavigationState {
        NavigationState::new(NonZeroUsize::new(count).expect("test count must be non-zero"))
    }

    #[test]
    fn new_cursor_starts_at_first_entry() {
        let nav = cursor(3);
        assert_eq!(nav.current_index(), 0);
        assert_eq!(nav.count().get(), 3);
    }

    #[test]
    fn advance_steps_forward_one_entry() {
        let mut nav = cursor(3);
        assert_eq!(nav.advance(), 1);
        assert_eq!(nav.advance(), 2);
    }

    #[test]
    fn advance_wraps_from_last_to_first() {
        let mut nav = cursor(3);
        nav.advance();
        nav.advance();
        assert_eq!(nav.current_index(), 2);
        assert_eq!(nav.advance(), 0);
    }

    #[test]
    fn retreat_wraps_from_first_to_last() {
        let mut nav = cursor(3);
        assert_eq!(nav.retreat(), 2);
    }

    #[test]
    fn advance_i_times_from_start_yields_i_mod_n() {
        for n in 1..=5 {
            for steps in 0..(3 * n) {
                let mut nav = cursor(n);
                for _ in 0..steps {
                    nav.advance();
                }
                assert_eq!(nav.current_index(), steps % n, "n={n}, steps={steps}");
            }
        }
    }

    #[test]
    fn advancing_count_times_returns_to_start() {
        for n in 1..=5 {
            let mut nav = cursor(n);
            nav.advance();
            let origin = nav.current_index();
            for _ in 0..n {
                nav.advance();
            }
            assert_eq!(nav.current_index(), origin, "n={n}");
        }
    }

    #[test]
    fn retreat_is_the_inverse_of_advance() {
        for n in 1..=5 {
            let mut nav = cursor(n);
            for _ in 0..n {
                let before = nav.current_index();
                nav.advance();
                nav.retreat();
                assert_eq!(nav.current_index(), before, "n={n}");

                nav.retreat();
                nav.advance();
                assert_eq!(nav.current_index(), before, "n={n}");

                nav.advance();
            }
        }
    }

    #[test]
    fn single_entry_catalog_is_a_fixed_point() {
        let mut nav = cursor(1);
        for _ in 0..4 {
            assert_eq!(nav.advance(), 0);
            assert_eq!(nav.retreat(), 0);
        }
    }

    #[test]
    fn three_entry_walkthrough_matches_expected_sequence() {
        // Catalog [A, B, C]: Next, Next, Next cycles back to A;
        // Previous from A lands on C.
        let mut nav = cursor(3);
        assert_eq!(nav.advance(), 1);
        assert_eq!(nav.advance(), 2);
        assert_eq!(nav.advance(), 0);
        assert_eq!(nav.retreat(), 2);
    }
}
