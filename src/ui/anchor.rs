//! Scroll anchor placed after the last message.

use eframe::egui;

/// Caller-owned handle for the trailing anchor of the message list.
///
/// The view records where the anchor was placed on each frame. The caller
/// decides when to jump to the newest message by calling
/// [`ScrollAnchor::request_scroll`]; the next frame scrolls once and clears
/// the request.
#[derive(Debug, Default, Clone)]
pub struct ScrollAnchor {
    rect: Option<egui::Rect>,
    scroll_requested: bool,
}

impl ScrollAnchor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the view to bring the anchor into view on the next frame.
    pub fn request_scroll(&mut self) {
        self.scroll_requested = true;
    }

    pub fn is_scroll_requested(&self) -> bool {
        self.scroll_requested
    }

    /// Where the anchor was placed on the last frame, if it has been drawn.
    pub fn rect(&self) -> Option<egui::Rect> {
        self.rect
    }

    /// Place the anchor at the current cursor position of `ui`.
    pub(crate) fn mount(&mut self, ui: &mut egui::Ui) {
        let (rect, _) =
            ui.allocate_exact_size(egui::vec2(ui.available_width(), 0.0), egui::Sense::hover());
        self.rect = Some(rect);
        if std::mem::take(&mut self.scroll_requested) {
            ui.scroll_to_rect(rect, Some(egui::Align::BOTTOM));
        }
    }
}
