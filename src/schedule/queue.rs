//! Deadline-ordered timer queue with a manual or wall clock.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

use super::{Scheduler, TimerId, TimerSink};

#[derive(Debug, Clone, Copy)]
enum Clock {
    /// Time only moves through [`TimerQueue::advance`].
    Manual,
    /// Time is measured from the moment the queue was created.
    Realtime(Instant),
}

#[derive(Debug)]
struct QueueInner {
    clock: Clock,
    /// Current time for the manual clock, and the deadline of the timer
    /// being delivered for both clocks.
    now: Duration,
    next_id: u64,
    pending: BTreeMap<(Duration, u64), TimerId>,
    deadlines: HashMap<TimerId, Duration>,
}

impl QueueInner {
    fn current_time(&self) -> Duration {
        match self.clock {
            Clock::Manual => self.now,
            Clock::Realtime(started) => started.elapsed().max(self.now),
        }
    }

    fn pop_due(&mut self, target: Duration) -> Option<TimerId> {
        let (&(deadline, seq), _) = self.pending.iter().next()?;
        if deadline > target {
            return None;
        }
        let id = self.pending.remove(&(deadline, seq))?;
        self.deadlines.remove(&id);
        if deadline > self.now {
            self.now = deadline;
        }
        Some(id)
    }
}

/// Cloneable handle to a shared timer queue.
///
/// All clones see the same timers, so one queue can be shared between
/// every controller on a page and the host loop that drives them.
#[derive(Debug, Clone)]
pub struct TimerQueue {
    inner: Arc<Mutex<QueueInner>>,
}

impl TimerQueue {
    fn with_clock(clock: Clock) -> Self {
        Self {
            inner: Arc::new(Mutex::new(QueueInner {
                clock,
                now: Duration::ZERO,
                next_id: 1,
                pending: BTreeMap::new(),
                deadlines: HashMap::new(),
            })),
        }
    }

    /// Queue driven by virtual time. Nothing fires until [`advance`](Self::advance).
    pub fn manual() -> Self {
        Self::with_clock(Clock::Manual)
    }

    /// Queue driven by the wall clock. The host calls [`run_due`](Self::run_due).
    pub fn realtime() -> Self {
        Self::with_clock(Clock::Realtime(Instant::now()))
    }

    /// Time elapsed on this queue's clock.
    pub fn now(&self) -> Duration {
        self.inner.lock().current_time()
    }

    /// Number of armed timers.
    pub fn pending(&self) -> usize {
        self.inner.lock().pending.len()
    }

    pub fn is_pending(&self, id: TimerId) -> bool {
        self.inner.lock().deadlines.contains_key(&id)
    }

    /// Time remaining until the earliest armed timer, if any.
    pub fn next_deadline(&self) -> Option<Duration> {
        let inner = self.inner.lock();
        let now = inner.current_time();
        inner
            .pending
            .keys()
            .next()
            .map(|(deadline, _)| deadline.saturating_sub(now))
    }

    /// Move virtual time forward by `by`, firing every timer that falls due
    /// in deadline order. Timers armed by a sink while firing are fired too
    /// when their deadline lands inside the window.
    pub fn advance(&self, by: Duration, sinks: &mut [&mut dyn TimerSink]) {
        let target = self.inner.lock().now + by;
        self.fire_until(target, sinks);
        let mut inner = self.inner.lock();
        if inner.now < target {
            inner.now = target;
        }
    }

    /// Fire every timer whose deadline has passed on the queue's clock.
    pub fn run_due(&self, sinks: &mut [&mut dyn TimerSink]) {
        let target = self.inner.lock().current_time();
        self.fire_until(target, sinks);
    }

    fn fire_until(&self, target: Duration, sinks: &mut [&mut dyn TimerSink]) {
        loop {
            // The lock is released before delivery so sinks can re-arm.
            let Some(id) = self.inner.lock().pop_due(target) else {
                break;
            };
            tracing::trace!(%id, "timer fired");
            for sink in sinks.iter_mut() {
                sink.on_timer(id);
            }
        }
    }
}

impl Scheduler for TimerQueue {
    fn after(&mut self, delay: Duration) -> TimerId {
        let mut inner = self.inner.lock();
        let seq = inner.next_id;
        inner.next_id += 1;
        let id = TimerId::new(seq);
        let deadline = inner.current_time() + delay;
        inner.pending.insert((deadline, seq), id);
        inner.deadlines.insert(id, deadline);
        id
    }

    fn cancel(&mut self, id: TimerId) {
        let mut inner = self.inner.lock();
        if let Some(deadline) = inner.deadlines.remove(&id) {
            inner.pending.remove(&(deadline, id.raw()));
        }
    }
}
