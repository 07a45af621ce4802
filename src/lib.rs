pub mod config;
pub mod content;
pub mod logging;
pub mod schedule;
pub mod server;
pub mod session;
pub mod slug;
pub mod ui;
