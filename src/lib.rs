//! Conversation view library.
//!
//! Turns an ordered list of chat messages into render units (start notice,
//! day dividers, message tiles) and draws them with egui.

pub mod app;
pub mod config;
pub mod emoji;
pub mod error;
pub mod format;
pub mod identity;
pub mod logging;
pub mod message;
pub mod render_units;
pub mod transcript;
pub mod ui;
