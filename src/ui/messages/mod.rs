//! Message list rendering for the conversation panel.

mod render;

pub use render::{render_messages, ViewContext, BEGINNING_NOTICE};
