use std::time::Duration;

use crate::schedule::{Scheduler, TimerId, TimerSink};
use crate::ui::mvi::{Listeners, Reducer, SubscriptionId};

use super::intent::RevealIntent;
use super::observer::{BlockId, ObserveError, VisibilityObserver};
use super::reducer::RevealReducer;
use super::state::RevealState;
use super::style::{RevealDirection, RevealMotion, RevealStyle};

/// Visible fraction that triggers a reveal unless configured otherwise.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// One-shot reveal of a single block.
///
/// `observe` registers the block, the first intersecting event arms a
/// `delay` timer and unregisters the block, and the timer flips the block
/// to revealed. Revealed never reverts.
pub struct RevealController<S: Scheduler, O: VisibilityObserver> {
    block: BlockId,
    direction: RevealDirection,
    delay: Duration,
    state: RevealState,
    scheduler: S,
    observer: O,
    timer: Option<TimerId>,
    torn_down: bool,
    listeners: Listeners<RevealState>,
}

impl<S: Scheduler, O: VisibilityObserver> RevealController<S, O> {
    pub fn new(
        block: BlockId,
        direction: RevealDirection,
        delay: Duration,
        scheduler: S,
        observer: O,
    ) -> Self {
        Self {
            block,
            direction,
            delay,
            state: RevealState::Idle,
            scheduler,
            observer,
            timer: None,
            torn_down: false,
            listeners: Listeners::new(),
        }
    }

    pub fn block(&self) -> BlockId {
        self.block
    }

    pub fn direction(&self) -> RevealDirection {
        self.direction
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_revealed(&self) -> bool {
        self.state.is_revealed()
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer
    }

    /// Style before the reveal, or `elapsed` into the transition after it.
    pub fn style(&self, motion: &RevealMotion, elapsed: Duration) -> RevealStyle {
        if self.is_revealed() {
            RevealStyle::transitioning(self.direction, motion, elapsed)
        } else {
            RevealStyle::hidden(self.direction, motion)
        }
    }

    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&RevealState) + Send + 'static,
    {
        self.listeners.subscribe(callback)
    }

    /// Register the block for visibility tracking.
    ///
    /// A host without an observer reveals the block immediately. An
    /// unmounted block is left alone.
    pub fn observe(&mut self, threshold: f32) {
        if self.torn_down || self.state != RevealState::Idle {
            return;
        }
        let threshold = if threshold.is_finite() {
            threshold.clamp(0.0, 1.0)
        } else {
            DEFAULT_THRESHOLD
        };
        match self.observer.observe(self.block, threshold) {
            Ok(()) => self.dispatch(RevealIntent::Observed),
            Err(ObserveError::Unavailable) => {
                tracing::warn!(
                    block = %self.block,
                    "no visibility observer, revealing immediately"
                );
                self.dispatch(RevealIntent::ObserverUnavailable);
            }
            Err(err @ ObserveError::UnknownBlock(_)) => {
                tracing::debug!(error = %err, "observe skipped");
            }
        }
    }

    /// Visibility callback from the host.
    pub fn on_intersect(&mut self, is_intersecting: bool) {
        if self.torn_down {
            return;
        }
        self.dispatch(RevealIntent::Intersection { is_intersecting });
        if self.state == RevealState::Triggered && self.timer.is_none() {
            self.observer.unobserve(self.block);
            self.timer = Some(self.scheduler.after(self.delay));
        }
    }

    /// Cancel the pending delay and stop observing. Later events are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        if let Some(id) = self.timer.take() {
            self.scheduler.cancel(id);
        }
        if self.state.is_observing() {
            self.observer.unobserve(self.block);
        }
        self.listeners.clear();
        self.torn_down = true;
    }

    fn dispatch(&mut self, intent: RevealIntent) {
        let before = self.state;
        self.state = RevealReducer::reduce(before, intent);
        if self.state != before {
            self.listeners.notify(&self.state);
        }
    }
}

impl<S: Scheduler, O: VisibilityObserver> TimerSink for RevealController<S, O> {
    fn on_timer(&mut self, id: TimerId) {
        if self.torn_down || self.timer != Some(id) {
            return;
        }
        self.timer = None;
        self.dispatch(RevealIntent::DelayElapsed);
    }
}

impl<S: Scheduler, O: VisibilityObserver> Drop for RevealController<S, O> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<S: Scheduler, O: VisibilityObserver> std::fmt::Debug for RevealController<S, O> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RevealController")
            .field("block", &self.block)
            .field("direction", &self.direction)
            .field("delay", &self.delay)
            .field("state", &self.state)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}
