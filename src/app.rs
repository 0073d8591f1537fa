//! eframe host application: loads a transcript and shows the conversation.

use std::path::PathBuf;

use eframe::egui;

use crate::config::{self, write_settings, Settings};
use crate::format::{MessageFormatter, ZonedFormatter};
use crate::message::Message;
use crate::transcript::load_transcript;
use crate::ui::{self, ChatTheme, ScrollAnchor, ViewContext};

pub struct ConvoApp {
    pub settings: Settings,
    pub transcript_path: Option<PathBuf>,
    pub messages: Vec<Message>,
    /// Load failure shown in place of the list.
    pub status: Option<String>,
    pub anchor: ScrollAnchor,
    pub theme: ChatTheme,
    pub current_user_input: String,
    /// Where settings are written; `None` keeps them in memory only.
    settings_file: Option<PathBuf>,
    formatter: Box<dyn MessageFormatter>,
}

/// `s` trimmed, or `None` when nothing is left.
fn non_blank(s: &str) -> Option<&str> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then_some(trimmed)
}

impl ConvoApp {
    pub fn new(settings: Settings, transcript_path: Option<PathBuf>) -> Self {
        Self::with_settings_file(settings, transcript_path, config::settings_path())
    }

    pub fn with_settings_file(
        settings: Settings,
        transcript_path: Option<PathBuf>,
        settings_file: Option<PathBuf>,
    ) -> Self {
        let formatter = formatter_for(&settings);
        let theme = ChatTheme::by_name(&settings.theme);
        let current_user_input = settings.current_user.clone().unwrap_or_default();

        let mut app = Self {
            settings,
            transcript_path,
            messages: Vec::new(),
            status: None,
            anchor: ScrollAnchor::new(),
            theme,
            current_user_input,
            settings_file,
            formatter,
        };
        app.reload();
        app
    }

    pub fn with_creation_context(
        cc: &eframe::CreationContext<'_>,
        settings: Settings,
        transcript_path: Option<PathBuf>,
    ) -> Self {
        let app = Self::new(settings, transcript_path);
        app.apply_visuals(&cc.egui_ctx);
        app
    }

    /// Current user as passed to the view; blank input means nobody.
    pub fn current_user(&self) -> Option<&str> {
        non_blank(&self.current_user_input)
    }

    /// Re-read the transcript and jump to the newest message. A successful
    /// load is remembered as the default transcript for the next start.
    pub fn reload(&mut self) {
        let Some(path) = self.transcript_path.clone() else {
            self.messages.clear();
            self.status = None;
            return;
        };

        match load_transcript(&path) {
            Ok(messages) => {
                self.messages = messages;
                self.status = None;
                self.anchor.request_scroll();
                if self.settings.last_transcript.as_ref() != Some(&path) {
                    self.settings.last_transcript = Some(path);
                    self.persist();
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "transcript load failed");
                self.messages.clear();
                self.status = Some(e.to_string());
            }
        }
    }

    pub fn set_theme(&mut self, ctx: &egui::Context, name: &str) {
        self.settings.theme = name.to_string();
        self.theme = ChatTheme::by_name(name);
        self.apply_visuals(ctx);
        self.persist();
    }

    fn apply_visuals(&self, ctx: &egui::Context) {
        if self.theme.is_dark() {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }
    }

    fn persist(&mut self) {
        self.settings.current_user = self.current_user().map(str::to_string);
        let Some(file) = &self.settings_file else {
            tracing::debug!("no settings file, not saving");
            return;
        };
        if let Err(e) = write_settings(file, &self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
        }
    }

    fn render_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let label = self
                .transcript_path
                .as_ref()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "No transcript".to_string());
            ui.label(egui::RichText::new(label).color(self.theme.text_secondary));

            if ui.button("Reload").clicked() {
                self.reload();
            }
            if ui.button("Jump to latest").clicked() {
                self.anchor.request_scroll();
            }

            ui.separator();
            ui.label("Viewing as:");
            let response = ui.add(
                egui::TextEdit::singleline(&mut self.current_user_input)
                    .hint_text("0x…")
                    .desired_width(180.0),
            );
            if response.lost_focus() {
                self.persist();
            }

            ui.separator();
            if ui.selectable_label(self.theme.is_dark(), "Dark").clicked() {
                self.set_theme(ui.ctx(), "dark");
            }
            if ui.selectable_label(!self.theme.is_dark(), "Light").clicked() {
                self.set_theme(ui.ctx(), "light");
            }
        });
    }
}

fn formatter_for(settings: &Settings) -> Box<dyn MessageFormatter> {
    if settings.use_utc {
        Box::new(ZonedFormatter::utc())
    } else {
        Box::new(ZonedFormatter::local())
    }
}

impl eframe::App for ConvoApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            self.render_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.surface[0]))
            .show(ctx, |ui| {
                if let Some(status) = &self.status {
                    ui.colored_label(self.theme.error, status);
                    return;
                }

                let view = ViewContext {
                    formatter: self.formatter.as_ref(),
                    theme: &self.theme,
                    profile_url_base: &self.settings.profile_url_base,
                };
                let current_user = non_blank(&self.current_user_input);
                ui::render_messages(ui, &self.messages, current_user, &view, &mut self.anchor);
            });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("convo-view-app-{}-{}", std::process::id(), name))
    }

    fn write_transcript(name: &str) -> PathBuf {
        let path = temp_path(name);
        std::fs::write(&path, r#"[{"id": "1", "senderAddress": "0xA", "content": "hi"}]"#).unwrap();
        path
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(non_blank(" 0xA\t"), Some("0xA"));
    }

    #[test]
    fn test_blank_current_user_is_none() {
        let mut app = ConvoApp::with_settings_file(Settings::default(), None, None);
        assert_eq!(app.current_user(), None);
        app.current_user_input = "  0xA ".into();
        assert_eq!(app.current_user(), Some("0xA"));
    }

    #[test]
    fn test_missing_transcript_sets_status() {
        let settings_file = temp_path("missing-settings.json");
        let app = ConvoApp::with_settings_file(
            Settings::default(),
            Some(PathBuf::from("/nonexistent/t.json")),
            Some(settings_file.clone()),
        );
        assert!(app.messages.is_empty());
        assert!(app.status.as_deref().is_some_and(|s| s.contains("/nonexistent/t.json")));
        assert!(!settings_file.exists(), "failed loads are not remembered");
    }

    #[test]
    fn test_successful_load_requests_scroll() {
        let path = write_transcript("scroll.json");
        let app = ConvoApp::with_settings_file(Settings::default(), Some(path.clone()), None);
        assert_eq!(app.messages.len(), 1);
        assert!(app.status.is_none());
        assert!(app.anchor.is_scroll_requested());
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn test_loaded_transcript_is_remembered() {
        let path = write_transcript("remembered.json");
        let settings_file = temp_path("remembered-settings.json");
        let settings = Settings {
            current_user: Some("0xA".into()),
            ..Settings::default()
        };

        let app = ConvoApp::with_settings_file(settings, Some(path.clone()), Some(settings_file.clone()));
        drop(app);

        let saved = config::read_settings(&settings_file).unwrap();
        assert_eq!(saved.last_transcript, Some(path.clone()));
        assert_eq!(saved.current_user.as_deref(), Some("0xA"));

        let _ = std::fs::remove_file(&path);
        let _ = std::fs::remove_file(&settings_file);
    }
}
