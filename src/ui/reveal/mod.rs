//! Scroll reveal: show a block with a short transition the first time it
//! scrolls into view.
//!
//! - `state.rs` / `intent.rs` / `reducer.rs` - One-shot reveal state machine
//! - `controller.rs` - Observer registration and the stagger timer
//! - `observer.rs` - Injected viewport intersection capability
//! - `style.rs` - Initial transforms and the eased transition

mod controller;
mod intent;
mod observer;
mod reducer;
mod state;
mod style;

pub use controller::{RevealController, DEFAULT_THRESHOLD};
pub use intent::RevealIntent;
pub use observer::{BlockId, ObserveError, UnavailableObserver, VisibilityObserver};
pub use reducer::RevealReducer;
pub use state::RevealState;
pub use style::{ease_out, RevealDirection, RevealMotion, RevealStyle, Transform};
