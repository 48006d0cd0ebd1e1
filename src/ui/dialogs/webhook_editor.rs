//! Webhook settings window - rename, change icon, copy URL, delete.

use eframe::egui;

use super::DialogAction;
use crate::api::PendingFile;
use crate::models::Webhook;
use crate::ui::widgets::render_avatar;
use crate::webhook::{AvatarInput, WebhookEditor};

/// Dialog wrapper around [`WebhookEditor`].
pub struct WebhookEditorDialog {
    pub editor: WebhookEditor,
    /// Path typed into the icon file field
    icon_path: String,
    /// Error from reading the icon file
    icon_error: Option<String>,
    api_url: String,
    deleting: bool,
}

impl WebhookEditorDialog {
    pub fn new(webhook: Webhook, api_url: &str) -> Self {
        Self {
            editor: WebhookEditor::new(webhook),
            icon_path: String::new(),
            icon_error: None,
            api_url: api_url.to_string(),
            deleting: false,
        }
    }

    pub fn webhook_id(&self) -> &str {
        &self.editor.webhook.id
    }

    /// Save action for the current dirty fields.
    pub fn save_action(&mut self) -> DialogAction {
        self.editor.pending = true;
        DialogAction::SaveWebhook {
            webhook_id: self.editor.webhook.id.clone(),
            changes: self.editor.changes(None),
            avatar: self.editor.pending_upload().cloned(),
        }
    }

    /// The backend reported a failed save or delete.
    pub fn failed(&mut self) {
        self.editor.pending = false;
        self.deleting = false;
    }

    fn load_icon(&mut self) {
        let path = std::path::Path::new(self.icon_path.trim());
        match std::fs::read(path) {
            Ok(bytes) => {
                let filename = path
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| "avatar".to_string());
                self.editor
                    .avatar
                    .set_value(AvatarInput::Upload(PendingFile { filename, bytes }));
                self.icon_error = None;
            }
            Err(e) => self.icon_error = Some(format!("Could not read file: {e}")),
        }
    }

    /// Render the window. Returns the action and whether it stays open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action = None;
        let mut window_open = true;

        egui::Window::new(format!("Webhook: {}", self.editor.webhook.name))
            .open(&mut window_open)
            .resizable(false)
            .default_width(420.0)
            .show(ctx, |ui| {
                let busy = self.editor.pending || self.deleting;

                ui.add_enabled_ui(!busy, |ui| {
                    ui.label("Webhook Icon");
                    ui.horizontal(|ui| {
                        render_avatar(ui, &self.editor.webhook.id, 48.0);
                        ui.vertical(|ui| {
                            let current = match self.editor.avatar.value() {
                                AvatarInput::Url(url) => url.clone(),
                                AvatarInput::Cleared => "No icon".to_string(),
                                AvatarInput::Upload(file) => format!("{} (not uploaded yet)", file.filename),
                            };
                            ui.label(egui::RichText::new(current).small());
                            ui.horizontal(|ui| {
                                ui.add(
                                    egui::TextEdit::singleline(&mut self.icon_path)
                                        .hint_text("/path/to/icon.png")
                                        .desired_width(180.0),
                                );
                                if ui.button("Choose").clicked() {
                                    self.load_icon();
                                }
                                if ui.button("Remove").clicked() {
                                    self.editor.avatar.set_value(AvatarInput::Cleared);
                                }
                            });
                            if let Some(err) = &self.icon_error {
                                ui.colored_label(egui::Color32::LIGHT_RED, err);
                            }
                        });
                    });

                    ui.add_space(8.0);
                    ui.label("Webhook Name");
                    ui.add(
                        egui::TextEdit::singleline(self.editor.name.value_mut())
                            .desired_width(f32::INFINITY),
                    );

                    ui.add_space(8.0);
                    ui.horizontal(|ui| {
                        if ui.add_enabled(self.editor.is_dirty(), egui::Button::new("Reset")).clicked() {
                            self.editor.reset();
                        }
                        if ui.add_enabled(self.editor.can_submit(), egui::Button::new("Save")).clicked() {
                            action = Some(self.save_action());
                        }
                    });
                });

                if busy {
                    ui.spinner();
                }

                ui.separator();

                match self.editor.url(&self.api_url) {
                    Some(url) => {
                        if ui.button("📋 Copy webhook URL").clicked() {
                            ui.ctx().copy_text(url);
                            action = Some(DialogAction::Notify("Webhook URL copied".into()));
                        }
                    }
                    None => {
                        ui.add_enabled(false, egui::Button::new("📋 Copy webhook URL"))
                            .on_disabled_hover_text("Token not available");
                    }
                }

                if ui.add_enabled(!self.deleting, egui::Button::new("🗑 Delete webhook")).clicked() {
                    self.deleting = true;
                    action = Some(DialogAction::DeleteWebhook {
                        webhook_id: self.editor.webhook.id.clone(),
                    });
                }
            });

        (action, window_open)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FieldsWebhook;

    fn dialog() -> WebhookEditorDialog {
        WebhookEditorDialog::new(
            Webhook {
                id: "W1".into(),
                channel_id: "C1".into(),
                name: "Builds".into(),
                avatar_url: Some("https://media.example/avatars/a".into()),
                token: Some("tok".into()),
            },
            "https://api.example",
        )
    }

    #[test]
    fn test_save_action_marks_pending() {
        let mut dialog = dialog();
        dialog.editor.avatar.set_value(AvatarInput::Cleared);
        match dialog.save_action() {
            DialogAction::SaveWebhook {
                webhook_id,
                changes,
                avatar,
            } => {
                assert_eq!(webhook_id, "W1");
                assert_eq!(changes.remove, vec![FieldsWebhook::Avatar]);
                assert_eq!(avatar, None);
            }
            other => panic!("unexpected action {:?}", other),
        }
        assert!(dialog.editor.pending);

        dialog.failed();
        assert!(!dialog.editor.pending);
    }

    #[test]
    fn test_save_action_carries_upload() {
        let mut dialog = dialog();
        let file = PendingFile {
            filename: "icon.png".into(),
            bytes: vec![1],
        };
        dialog.editor.avatar.set_value(AvatarInput::Upload(file.clone()));
        match dialog.save_action() {
            DialogAction::SaveWebhook { changes, avatar, .. } => {
                assert_eq!(avatar, Some(file));
                // id is filled in by the backend after uploading
                assert_eq!(changes.avatar, None);
            }
            other => panic!("unexpected action {:?}", other),
        }
    }

    #[test]
    fn test_load_icon_missing_file() {
        let mut dialog = dialog();
        dialog.icon_path = "/nonexistent/stoat-views/icon.png".into();
        dialog.load_icon();
        assert!(dialog.icon_error.is_some());
        assert!(!dialog.editor.is_dirty());
    }
}
