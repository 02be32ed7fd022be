// SPDX-License-Identifier: MPL-2.0
//! Per-toast lifecycle controller.
//!
//! Every toast runs through `Enter → Hold → Exit → Removed` exactly once.
//! The controller is driven by elapsed time only, so it can be stepped from
//! any clock (the iced tick subscription in the app, fixed deltas in tests).
//! It never touches the widget tree; [`Lifecycle::visual`] exposes the
//! opacity and drop offset the toast view should use for the current frame.

use crate::app::config::{DEFAULT_ENTER_MS, DEFAULT_EXIT_MS, DEFAULT_HOLD_MS};
use std::time::Duration;

/// Lifecycle phase of a single toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Fading and sliding into place.
    Enter,
    /// Fully visible, resting.
    Hold,
    /// Fading and sliding back out.
    Exit,
    /// Exit completed; the manager evicts the entry.
    Removed,
}

impl Phase {
    fn next(self) -> Self {
        match self {
            Phase::Enter => Phase::Hold,
            Phase::Hold => Phase::Exit,
            Phase::Exit | Phase::Removed => Phase::Removed,
        }
    }
}

/// Durations of the three animated phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timings {
    pub enter: Duration,
    pub hold: Duration,
    pub exit: Duration,
}

impl Timings {
    /// Duration of `phase` (zero for [`Phase::Removed`]).
    #[must_use]
    pub fn of(&self, phase: Phase) -> Duration {
        match phase {
            Phase::Enter => self.enter,
            Phase::Hold => self.hold,
            Phase::Exit => self.exit,
            Phase::Removed => Duration::ZERO,
        }
    }

    /// Time from creation to removal.
    #[must_use]
    pub fn total(&self) -> Duration {
        self.enter + self.hold + self.exit
    }
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            enter: Duration::from_millis(DEFAULT_ENTER_MS),
            hold: Duration::from_millis(DEFAULT_HOLD_MS),
            exit: Duration::from_millis(DEFAULT_EXIT_MS),
        }
    }
}

/// Visual state of a toast for one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Visual {
    /// 0.0 = invisible, 1.0 = opaque.
    pub opacity: f32,
    /// 0.0 = resting position, 1.0 = fully off-screen offset.
    pub offset: f32,
}

impl Visual {
    pub const HIDDEN: Visual = Visual {
        opacity: 0.0,
        offset: 1.0,
    };

    pub const RESTING: Visual = Visual {
        opacity: 1.0,
        offset: 0.0,
    };
}

/// Timer-driven state machine for one toast.
#[derive(Debug, Clone)]
pub struct Lifecycle {
    timings: Timings,
    phase: Phase,
    /// Time spent in the current phase.
    elapsed: Duration,
}

impl Lifecycle {
    #[must_use]
    pub fn new(timings: Timings) -> Self {
        Self {
            timings,
            phase: Phase::Enter,
            elapsed: Duration::ZERO,
        }
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn timings(&self) -> Timings {
        self.timings
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.phase == Phase::Removed
    }

    /// Advances the controller by `delta`.
    ///
    /// A single call may cross several phase boundaries. Returns `true` only on
    /// the call that completes the exit phase; afterwards it is a no-op.
    pub fn advance(&mut self, delta: Duration) -> bool {
        if self.phase == Phase::Removed {
            return false;
        }

        let mut remaining = delta;
        loop {
            let left = self.timings.of(self.phase).saturating_sub(self.elapsed);
            if remaining < left {
                self.elapsed += remaining;
                return false;
            }

            remaining -= left;
            self.phase = self.phase.next();
            self.elapsed = Duration::ZERO;

            if self.phase == Phase::Removed {
                return true;
            }
        }
    }

    /// Progress through the current phase, in `0.0..=1.0`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        let span = self.timings.of(self.phase);
        if span.is_zero() {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / span.as_secs_f32()).min(1.0)
    }

    #[must_use]
    pub fn visual(&self) -> Visual {
        match self.phase {
            Phase::Enter => {
                let t = ease_out(self.progress());
                Visual {
                    opacity: t,
                    offset: 1.0 - t,
                }
            }
            Phase::Hold => Visual::RESTING,
            Phase::Exit => {
                let t = ease_in(self.progress());
                Visual {
                    opacity: 1.0 - t,
                    offset: t,
                }
            }
            Phase::Removed => Visual::HIDDEN,
        }
    }
}

fn ease_out(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

fn ease_in(t: f32) -> f32 {
    t.powi(3)
}
