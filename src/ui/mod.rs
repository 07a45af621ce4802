//! Home page behaviour: carousel, reveal and dropdown state machines, plus
//! a terminal preview that hosts them.

pub mod app;
pub mod carousel;
pub mod dropdown;
pub mod events;
pub mod home;
pub mod layout;
pub mod mvi;
pub mod render;
pub mod reveal;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
pub mod viewport;
