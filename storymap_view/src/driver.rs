// Copyright 2025 the Storymap Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use storymap_tour::{Tour, ViewStep};

use crate::command::{MapSink, apply_all, commands_for};

/// A callback sink notified after each effective move of a [`TourDriver`].
///
/// This is the hook for logging or analytics; the driver itself does not log.
pub trait TourObserver {
    /// Called once the map has been updated for the new step.
    ///
    /// `from` and `to` are zero-based indices and always differ.
    fn step_changed(&mut self, from: usize, to: usize, step: &ViewStep);
}

/// A [`TourObserver`] that ignores every notification.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl TourObserver for NoopObserver {
    fn step_changed(&mut self, _from: usize, _to: usize, _step: &ViewStep) {}
}

/// Keeps a map in sync with a [`Tour`].
///
/// The driver owns the tour and forwards navigation to it. Whenever the
/// position actually changes, it re-derives the map commands for the new step
/// and applies them to the sink, then notifies the observer. Clamped no-ops
/// (for example `next` on the last step) issue nothing.
///
/// Call [`TourDriver::start`] once after construction to bring the map to the
/// first step.
#[derive(Debug)]
pub struct TourDriver<S, O = NoopObserver> {
    tour: Tour,
    sink: S,
    observer: O,
}

impl<S: MapSink> TourDriver<S> {
    /// Creates a driver without an observer.
    pub fn new(tour: Tour, sink: S) -> Self {
        Self::with_observer(tour, sink, NoopObserver)
    }
}

impl<S: MapSink, O: TourObserver> TourDriver<S, O> {
    /// Creates a driver that reports moves to `observer`.
    pub fn with_observer(tour: Tour, sink: S, observer: O) -> Self {
        Self {
            tour,
            sink,
            observer,
        }
    }

    /// Issues the commands for the current step without moving.
    ///
    /// Hosts call this once after construction, and again whenever the map
    /// widget is recreated.
    pub fn start(&mut self) {
        apply_all(&commands_for(self.tour.current()), &mut self.sink);
    }

    /// Advances the tour and updates the map if it moved.
    #[expect(
        clippy::should_implement_trait,
        reason = "clamped navigation, not iteration"
    )]
    pub fn next(&mut self) -> bool {
        self.navigate(Tour::next)
    }

    /// Steps the tour back and updates the map if it moved.
    pub fn previous(&mut self) -> bool {
        self.navigate(Tour::previous)
    }

    /// Jumps to `index` (clamped) and updates the map if it moved.
    pub fn go_to(&mut self, index: usize) -> bool {
        self.navigate(|tour| tour.go_to(index))
    }

    /// Returns to the first step and updates the map if it moved.
    pub fn restart(&mut self) -> bool {
        self.navigate(Tour::restart)
    }

    /// Returns the driven tour.
    #[must_use]
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Returns the map sink.
    #[must_use]
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the map sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Returns the observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Consumes the driver, returning the tour, sink and observer.
    pub fn into_parts(self) -> (Tour, S, O) {
        (self.tour, self.sink, self.observer)
    }

    fn navigate(&mut self, step: impl FnOnce(&mut Tour) -> bool) -> bool {
        let from = self.tour.index();
        if !step(&mut self.tour) {
            return false;
        }
        let current = self.tour.current();
        apply_all(&commands_for(current), &mut self.sink);
        self.observer.step_changed(from, self.tour.index(), current);
        true
    }
}
