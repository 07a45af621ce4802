//! Timer scheduling for the UI controllers.
//!
//! Controllers never touch host timer primitives. They ask a [`Scheduler`]
//! for a one-shot timer and get back a [`TimerId`]; when the timer expires
//! the host hands that id to every [`TimerSink`] it drives. A controller
//! acts only on the id it is currently holding, so a cancelled or
//! superseded timer can never mutate state.
//!
//! ```text
//! Controller ──after(delay)──→ Scheduler
//!     ↑                            │
//!     └──────on_timer(id)── host ←─┘
//! ```

mod queue;

pub use queue::TimerQueue;

use std::fmt;
use std::time::Duration;

/// Identity of a scheduled one-shot timer. Unique per scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub(crate) fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

impl fmt::Display for TimerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "timer#{}", self.0)
    }
}

/// Injected timer capability.
pub trait Scheduler {
    /// Arm a one-shot timer that fires once `delay` has elapsed.
    fn after(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Cancelling an unknown or already fired
    /// timer is a no-op.
    fn cancel(&mut self, id: TimerId);
}

/// Receiver of expired timers.
pub trait TimerSink {
    fn on_timer(&mut self, id: TimerId);
}
