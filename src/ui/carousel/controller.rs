//! Carousel controller: reducer plus the autoplay timer.

use std::time::Duration;

use crate::schedule::{Scheduler, TimerId, TimerSink};
use crate::ui::mvi::{Listeners, Reducer, SubscriptionId};

use super::breakpoints::Breakpoints;
use super::intent::CarouselIntent;
use super::reducer::CarouselReducer;
use super::state::{CarouselPhase, CarouselState, CarouselView};

/// Autoplay interval used by the home categories carousel.
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(4000);

/// Pause after manual navigation before autoplay restarts.
pub const DEFAULT_RESUME_DELAY: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselTiming {
    pub interval: Duration,
    pub resume_delay: Duration,
}

impl Default for CarouselTiming {
    fn default() -> Self {
        Self {
            interval: DEFAULT_INTERVAL,
            resume_delay: DEFAULT_RESUME_DELAY,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerRole {
    /// Recurring advance, re-armed every time it fires.
    Autoplay,
    /// One-shot wait after manual navigation. Arms autoplay when it fires.
    Resume,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ActiveTimer {
    id: TimerId,
    role: TimerRole,
}

/// Drives a [`CarouselState`] from host events.
///
/// Holds at most one live timer. Every path that starts a timer cancels
/// the previous one first, and [`on_timer`](TimerSink::on_timer) ignores
/// any id other than the one currently held.
pub struct CarouselController<T, S: Scheduler> {
    state: CarouselState<T>,
    timing: CarouselTiming,
    breakpoints: Breakpoints,
    scheduler: S,
    timer: Option<ActiveTimer>,
    torn_down: bool,
    listeners: Listeners<CarouselView>,
}

impl<T, S> CarouselController<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: Scheduler,
{
    pub fn new(scheduler: S, timing: CarouselTiming, breakpoints: Breakpoints) -> Self {
        let items_per_view = breakpoints.items_for_width(0);
        Self {
            state: CarouselState::new(items_per_view),
            timing,
            breakpoints,
            scheduler,
            timer: None,
            torn_down: false,
            listeners: Listeners::new(),
        }
    }

    pub fn state(&self) -> &CarouselState<T> {
        &self.state
    }

    pub fn view(&self) -> CarouselView {
        self.state.view()
    }

    pub fn phase(&self) -> CarouselPhase {
        self.state.phase()
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index()
    }

    pub fn timing(&self) -> CarouselTiming {
        self.timing
    }

    /// The live timer and what it is for.
    pub fn active_timer(&self) -> Option<(TimerId, TimerRole)> {
        self.timer.map(|t| (t.id, t.role))
    }

    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Subscribe to render snapshots. Called after every change.
    pub fn subscribe<F>(&mut self, callback: F) -> SubscriptionId
    where
        F: FnMut(&CarouselView) + Send + 'static,
    {
        self.listeners.subscribe(callback)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }

    /// Deliver the backing collection. Resets the index to 0.
    pub fn set_items(&mut self, items: Vec<T>) {
        tracing::debug!(count = items.len(), "carousel items delivered");
        self.dispatch(CarouselIntent::Loaded(items));
    }

    pub fn set_items_per_view(&mut self, items_per_view: usize) {
        self.dispatch(CarouselIntent::SetItemsPerView(items_per_view));
    }

    /// Resolve `width` through the breakpoint table.
    pub fn set_viewport_width(&mut self, width: u32) {
        let items_per_view = self.breakpoints.items_for_width(width);
        self.set_items_per_view(items_per_view);
    }

    /// Advance one item. A no-op while paused or outside the carousel phase.
    pub fn tick(&mut self) {
        self.dispatch(CarouselIntent::Tick);
    }

    /// Jump to `index` (clamped) and hold autoplay for the resume delay.
    pub fn go_to(&mut self, index: usize) {
        if self.torn_down {
            return;
        }
        self.dispatch(CarouselIntent::GoTo(index));
        if self.state.phase() == CarouselPhase::Carousel {
            self.cancel_timer();
            self.arm(TimerRole::Resume);
        }
    }

    pub fn previous(&mut self) {
        let target = self.state.current_index().saturating_sub(1);
        self.go_to(target);
    }

    pub fn next(&mut self) {
        let target = self.state.current_index() + 1;
        self.go_to(target);
    }

    /// Pointer entered or left the track. The timer keeps its schedule.
    pub fn set_paused(&mut self, paused: bool) {
        if self.state.is_paused() != paused {
            self.dispatch(CarouselIntent::SetPaused(paused));
        }
    }

    /// Cancel the timer and drop subscribers. Later events are ignored.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        self.cancel_timer();
        self.listeners.clear();
        self.torn_down = true;
    }

    fn dispatch(&mut self, intent: CarouselIntent<T>) {
        if self.torn_down {
            tracing::debug!("carousel event after teardown ignored");
            return;
        }
        let before = self.state.view();
        self.state = CarouselReducer::<T>::reduce(std::mem::take(&mut self.state), intent);
        self.sync_timer(before.max_index);
        let after = self.state.view();
        if after != before {
            self.listeners.notify(&after);
        }
    }

    /// Keep the timer in line with the phase: autoplay only in the
    /// carousel phase, restarted when the page count changes.
    fn sync_timer(&mut self, previous_max_index: usize) {
        let enabled = self.state.auto_advance_enabled();
        match self.timer.map(|t| t.role) {
            Some(_) if !enabled => self.cancel_timer(),
            None if enabled => self.arm(TimerRole::Autoplay),
            Some(TimerRole::Autoplay) if previous_max_index != self.state.max_index() => {
                self.cancel_timer();
                self.arm(TimerRole::Autoplay);
            }
            _ => {}
        }
    }

    fn arm(&mut self, role: TimerRole) {
        let delay = match role {
            TimerRole::Autoplay => self.timing.interval,
            TimerRole::Resume => self.timing.resume_delay,
        };
        let id = self.scheduler.after(delay);
        self.timer = Some(ActiveTimer { id, role });
    }

    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer.id);
        }
    }
}

impl<T, S> TimerSink for CarouselController<T, S>
where
    T: Clone + PartialEq + Send + 'static,
    S: Scheduler,
{
    fn on_timer(&mut self, id: TimerId) {
        if self.torn_down {
            return;
        }
        let Some(active) = self.timer else {
            return;
        };
        if active.id != id {
            return;
        }
        self.timer = None;
        match active.role {
            TimerRole::Autoplay => {
                self.arm(TimerRole::Autoplay);
                self.tick();
            }
            TimerRole::Resume => self.arm(TimerRole::Autoplay),
        }
    }
}

impl<T, S: Scheduler> Drop for CarouselController<T, S> {
    fn drop(&mut self) {
        if let Some(timer) = self.timer.take() {
            self.scheduler.cancel(timer.id);
        }
    }
}

impl<T, S: Scheduler> std::fmt::Debug for CarouselController<T, S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CarouselController")
            .field("phase", &self.state.phase())
            .field("current_index", &self.state.current_index())
            .field("items_per_view", &self.state.items_per_view())
            .field("timer", &self.timer)
            .field("torn_down", &self.torn_down)
            .finish()
    }
}
