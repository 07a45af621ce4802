//! Products dropdown in the navigation bar.

mod intent;
mod reducer;
mod state;

pub use intent::DropdownIntent;
pub use reducer::DropdownReducer;
pub use state::DropdownState;
