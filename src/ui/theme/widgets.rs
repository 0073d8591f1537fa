//! Avatar and address badge widgets.

use eframe::egui::{self, Color32};

use super::colors::{identity_color, ChatTheme};
use crate::identity;

/// Render a circular identicon avatar for `address`.
///
/// The 5x5 mirrored pattern is clipped to the circle. Clicking the avatar
/// opens the sender's profile page at `profile_url_base` + address.
pub fn render_avatar(
    ui: &mut egui::Ui,
    address: &str,
    size: f32,
    profile_url_base: &str,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        let radius = size / 2.0;

        painter.circle_filled(
            rect.center() + egui::vec2(0.0, 1.5),
            radius,
            Color32::from_black_alpha(30),
        );
        painter.circle_filled(rect.center(), radius, identity_color(address));

        let pattern = identity::identicon_pattern(address);
        let fg_color = Color32::from_white_alpha(200);
        let cell_size = size / 6.0;
        let offset = cell_size * 0.5;

        for row in 0..5 {
            for col in 0..5 {
                if !identity::identicon_cell(pattern, row, col) {
                    continue;
                }
                let cell_x = rect.left() + offset + (col as f32 * cell_size);
                let cell_y = rect.top() + offset + (row as f32 * cell_size);
                let center = egui::pos2(cell_x + cell_size / 2.0, cell_y + cell_size / 2.0);

                if (center - rect.center()).length() < radius - cell_size * 0.3 {
                    painter.rect_filled(
                        egui::Rect::from_min_size(
                            egui::pos2(cell_x, cell_y),
                            egui::vec2(cell_size * 0.85, cell_size * 0.85),
                        ),
                        cell_size * 0.2,
                        fg_color,
                    );
                }
            }
        }

        painter.circle_stroke(
            rect.center(),
            radius,
            egui::Stroke::new(1.5, Color32::from_white_alpha(15)),
        );
    }

    if response.clicked() {
        let url = identity::profile_url(profile_url_base, address);
        tracing::debug!(%url, "opening sender profile");
        ui.ctx().open_url(egui::OpenUrl::new_tab(url));
    }

    response
        .on_hover_text(address)
        .on_hover_cursor(egui::CursorIcon::PointingHand)
}

/// Render the pill-shaped sender badge. The current user's badge is filled
/// with the accent color.
pub fn render_address_badge(
    ui: &mut egui::Ui,
    address: &str,
    is_sender: bool,
    theme: &ChatTheme,
) -> egui::Response {
    let (fill, text_color) = if is_sender {
        (theme.accent, Color32::WHITE)
    } else {
        (theme.surface[2], theme.text_primary)
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(10))
        .inner_margin(egui::Margin::symmetric(8, 2))
        .show(ui, |ui| {
            ui.label(
                egui::RichText::new(identity::short_address(address))
                    .size(12.0)
                    .strong()
                    .color(text_color),
            )
        })
        .response
        .on_hover_text(address)
}
