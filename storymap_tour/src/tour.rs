// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::boxed::Box;
use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;

use crate::{TourError, ViewStep};

/// A linear guided tour over a fixed, non-empty script of [`ViewStep`]s.
///
/// The script is immutable once the tour is built; only the current position
/// changes. The position always satisfies `0 <= index() < len()`: navigation
/// past either end clamps instead of wrapping or failing.
///
/// Every navigation method returns `true` if the position actually moved,
/// and bumps [`Tour::revision`] in that case only, so a host can skip
/// re-rendering after a clamped no-op.
#[derive(Clone, Debug)]
pub struct Tour {
    steps: Box<[ViewStep]>,
    index: usize,
    revision: u64,
}

impl Tour {
    /// Builds a tour positioned at the first step.
    ///
    /// Fails with [`TourError::EmptyScript`] if `steps` yields nothing.
    pub fn new<I>(steps: I) -> Result<Self, TourError>
    where
        I: IntoIterator<Item = ViewStep>,
    {
        let steps: Vec<ViewStep> = steps.into_iter().collect();
        if steps.is_empty() {
            return Err(TourError::EmptyScript);
        }
        Ok(Self {
            steps: steps.into_boxed_slice(),
            index: 0,
            revision: 0,
        })
    }

    /// Returns the active step.
    #[must_use]
    pub fn current(&self) -> &ViewStep {
        &self.steps[self.index]
    }

    /// Returns the zero-based position of the active step.
    #[must_use]
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the number of steps in the script. Always at least one.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`; a tour cannot be built from an empty script.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the full script in tour order.
    #[must_use]
    pub fn steps(&self) -> &[ViewStep] {
        &self.steps
    }

    /// Returns a counter that increases each time the position changes.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Returns `true` if the active step is the first one.
    #[must_use]
    pub fn is_first(&self) -> bool {
        self.index == 0
    }

    /// Returns `true` if the active step is the last one.
    #[must_use]
    pub fn is_last(&self) -> bool {
        self.index == self.last_index()
    }

    /// Returns `true` if [`Tour::next`] would move. Drives the "next" trigger.
    #[must_use]
    pub fn can_go_next(&self) -> bool {
        self.index < self.last_index()
    }

    /// Returns `true` if [`Tour::previous`] would move. Drives the "previous" trigger.
    #[must_use]
    pub fn can_go_previous(&self) -> bool {
        self.index > 0
    }

    /// Advances to the next step, staying put on the last one.
    #[expect(
        clippy::should_implement_trait,
        reason = "clamped navigation, not iteration"
    )]
    pub fn next(&mut self) -> bool {
        self.set_index((self.index + 1).min(self.last_index()))
    }

    /// Goes back to the previous step, staying put on the first one.
    pub fn previous(&mut self) -> bool {
        self.set_index(self.index.saturating_sub(1))
    }

    /// Jumps to `index`, clamped to the last step.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.set_index(index.min(self.last_index()))
    }

    /// Jumps back to the first step.
    pub fn restart(&mut self) -> bool {
        self.set_index(0)
    }

    /// Returns the one-based position and total step count.
    #[must_use]
    pub fn progress(&self) -> Progress {
        Progress {
            position: self.index + 1,
            total: self.steps.len(),
        }
    }

    /// Returns a human-readable position such as `"2 of 4"`.
    #[must_use]
    pub fn progress_label(&self) -> String {
        alloc::format!("{}", self.progress())
    }

    fn last_index(&self) -> usize {
        self.steps.len() - 1
    }

    fn set_index(&mut self, index: usize) -> bool {
        debug_assert!(index < self.steps.len(), "tour index out of range");
        if index == self.index {
            return false;
        }
        self.index = index;
        self.revision = self.revision.wrapping_add(1);
        true
    }
}

/// One-based position within a tour, as shown next to the navigation triggers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Progress {
    /// One-based position of the active step.
    pub position: usize,
    /// Total number of steps.
    pub total: usize,
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.position, self.total)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{GeoPoint, Zoom};

    fn tour_of(len: usize) -> Tour {
        Tour::new((0..len).map(|i| {
            ViewStep::new(
                alloc::format!("step {i}"),
                "",
                GeoPoint::new(0.0, 0.0).unwrap(),
                Zoom::new(10.0).unwrap(),
            )
        }))
        .unwrap()
    }

    #[test]
    fn single_step_tour_cannot_move() {
        let mut tour = tour_of(1);
        assert!(tour.is_first() && tour.is_last());
        assert!(!tour.can_go_next());
        assert!(!tour.can_go_previous());
        assert!(!tour.next());
        assert!(!tour.previous());
        assert_eq!(tour.progress_label(), "1 of 1");
        assert_eq!(tour.revision(), 0);
    }

    #[test]
    fn go_to_clamps_past_the_end() {
        let mut tour = tour_of(3);
        assert!(tour.go_to(usize::MAX));
        assert_eq!(tour.index(), 2);
        assert!(!tour.go_to(7));
        assert!(tour.restart());
        assert_eq!(tour.index(), 0);
        assert!(!tour.restart());
    }

    #[test]
    fn progress_is_one_based() {
        let mut tour = tour_of(4);
        tour.next();
        assert_eq!(
            tour.progress(),
            Progress {
                position: 2,
                total: 4
            }
        );
    }
}
