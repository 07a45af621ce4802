//! Intents for the carousel.

use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CarouselIntent<T> {
    /// The backing collection resolved. Resets the index to 0.
    Loaded(Vec<T>),
    /// Viewport crossed a breakpoint.
    SetItemsPerView(usize),
    /// Autoplay timer fired.
    Tick,
    /// Manual navigation. Out-of-range targets are clamped.
    GoTo(usize),
    /// Pointer entered (true) or left (false) the track.
    SetPaused(bool),
}

impl<T: Send + 'static> Intent for CarouselIntent<T> {}
