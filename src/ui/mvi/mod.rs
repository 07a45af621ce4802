//! Model-View-Intent primitives shared by the page widgets.
//!
//! ```text
//! host event ──→ Intent ──→ Reducer ──→ State ──→ Listeners (render)
//!                                         │
//!                  controller side effects (timers, observers)
//! ```
//!
//! Reducers stay pure. Anything that touches a scheduler or a visibility
//! observer belongs to the controller wrapping the reducer.

mod listeners;

pub use listeners::{Listeners, SubscriptionId};

/// Snapshot a widget renders from. Cheap to compare so controllers can
/// skip notifying when nothing changed.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}

/// Something that happened to a widget: a key, a click, a fired timer,
/// a resize or data arriving from the store.
pub trait Intent: Send + 'static {}

/// The single place a widget's state changes.
pub trait Reducer {
    type State: UiState;
    type Intent: Intent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State;
}
