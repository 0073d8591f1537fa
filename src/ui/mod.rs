//! egui rendering for the conversation view.
//!
//! - `messages`: the scrollable message list
//! - `anchor`: caller-owned scroll anchor after the last message
//! - `theme`: colors, avatars and address badges

mod anchor;
mod messages;
mod theme;

pub use anchor::ScrollAnchor;
pub use messages::*;
pub use theme::{identity_color, render_address_badge, render_avatar, ChatTheme};
