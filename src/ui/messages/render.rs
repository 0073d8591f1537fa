//! Conversation rendering: notice, date dividers, message tiles and the
//! trailing scroll anchor.

use eframe::egui::{self, Color32};

use crate::format::{self, MessageFormatter};
use crate::message::Message;
use crate::render_units::{self, build_render_list, RenderUnit, TileText};
use crate::ui::anchor::ScrollAnchor;
use crate::ui::theme::{self, ChatTheme};

pub const BEGINNING_NOTICE: &str = "This is the beginning of the conversation";

const AVATAR_SIZE: f32 = 36.0;

/// Shared inputs for drawing one frame of the list.
pub struct ViewContext<'a> {
    pub formatter: &'a dyn MessageFormatter,
    pub theme: &'a ChatTheme,
    pub profile_url_base: &'a str,
}

/// Render the scrollable message list for `messages`.
///
/// Units are rebuilt from `messages` on every call. The anchor is always
/// placed after the last unit, even when there are no messages.
pub fn render_messages(
    ui: &mut egui::Ui,
    messages: &[Message],
    current_user: Option<&str>,
    view: &ViewContext<'_>,
    anchor: &mut ScrollAnchor,
) {
    let list = build_render_list(messages, current_user, view.formatter);

    egui::ScrollArea::vertical()
        .auto_shrink([false; 2])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            ui.add_space(24.0);

            for unit in list.iter() {
                match unit {
                    RenderUnit::ConversationStart => render_beginning_notice(ui, view.theme),
                    RenderUnit::DateDivider { date, .. } => {
                        render_date_divider(ui, &format::date_label(view.formatter, *date), view.theme)
                    }
                    RenderUnit::Tile { message, is_sender } => {
                        render_message_tile(ui, message, *is_sender, view)
                    }
                }
            }

            anchor.mount(ui);
        });
}

fn render_beginning_notice(ui: &mut egui::Ui, theme: &ChatTheme) {
    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new(BEGINNING_NOTICE)
                .size(13.0)
                .strong()
                .color(theme.text_muted),
        );
    });
    ui.add_space(16.0);
}

/// Two rules with the date label between them. An empty label draws a
/// single unbroken rule.
fn render_date_divider(ui: &mut egui::Ui, label: &str, theme: &ChatTheme) {
    ui.add_space(16.0);

    let (rect, _) = ui.allocate_exact_size(egui::vec2(ui.available_width(), 20.0), egui::Sense::hover());
    let painter = ui.painter();
    let stroke = egui::Stroke::new(2.0, theme.border_subtle);
    let y = rect.center().y;

    if label.is_empty() {
        painter.hline(rect.x_range(), y, stroke);
    } else {
        let text_rect = painter.text(
            rect.center(),
            egui::Align2::CENTER_CENTER,
            label,
            egui::FontId::proportional(13.0),
            theme.text_muted,
        );
        let gap = 44.0;
        painter.hline(rect.left()..=(text_rect.left() - gap).max(rect.left()), y, stroke);
        painter.hline((text_rect.right() + gap).min(rect.right())..=rect.right(), y, stroke);
    }

    ui.add_space(32.0);
}

fn render_message_tile(ui: &mut egui::Ui, message: &Message, is_sender: bool, view: &ViewContext<'_>) {
    ui.horizontal(|ui| {
        ui.add_space(16.0);
        theme::render_avatar(ui, &message.sender_address, AVATAR_SIZE, view.profile_url_base);
        ui.add_space(8.0);

        ui.vertical(|ui| {
            ui.horizontal(|ui| {
                theme::render_address_badge(ui, &message.sender_address, is_sender, view.theme);
                ui.label(
                    egui::RichText::new(render_units::tile_time(message, view.formatter).to_uppercase())
                        .size(12.0)
                        .color(view.theme.text_muted),
                );
            });

            ui.add_space(4.0);

            let body = TileText::for_message(message, view.formatter);
            let color: Color32 = if body.is_error() { view.theme.error } else { view.theme.text_primary };
            ui.add(
                egui::Label::new(egui::RichText::new(body.as_str()).size(14.0).color(color)).wrap(),
            );
        });
    });

    ui.add_space(16.0);
}
