//! Colors and identity widgets for the conversation view.

pub mod colors;
pub mod widgets;

pub use colors::{identity_color, ChatTheme};
pub use widgets::{render_address_badge, render_avatar};
