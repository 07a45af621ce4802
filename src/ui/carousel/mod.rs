//! Carousel: a sliding window of items with autoplay.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Window over the items, phase, render snapshot
//! - `intent.rs` - Data arrival, resize, tick, navigation, hover
//! - `reducer.rs` - Index arithmetic
//! - `controller.rs` - Autoplay and resume timers, subscribers
//! - `breakpoints.rs` - Viewport width to items per view

mod breakpoints;
mod controller;
mod intent;
mod reducer;
mod state;

pub use breakpoints::{default_breakpoints, Breakpoint, Breakpoints};
pub use controller::{
    CarouselController, CarouselTiming, TimerRole, DEFAULT_INTERVAL, DEFAULT_RESUME_DELAY,
};
pub use intent::CarouselIntent;
pub use reducer::CarouselReducer;
pub use state::{CarouselPhase, CarouselState, CarouselView, Dot};
