//! Custom status dialog - set or clear the user's status text.

use eframe::egui;

use super::DialogAction;
use crate::api::DataEditUser;
use crate::form::{can_submit, FormControl};
use crate::models::UserStatus;

/// Self-contained custom status dialog state.
pub struct CustomStatusDialog {
    pub text: FormControl<String>,
    /// The status being edited; fields other than `text` are carried over
    status: UserStatus,
    /// A save is in flight; inputs are disabled until it resolves
    pub pending: bool,
}

impl CustomStatusDialog {
    pub fn new(current: Option<&UserStatus>) -> Self {
        let status = current.cloned().unwrap_or_default();
        Self {
            text: FormControl::new(status.text.clone().unwrap_or_default()),
            status,
            pending: false,
        }
    }

    pub fn can_save(&self) -> bool {
        can_submit(self.text.is_dirty(), self.pending)
    }

    /// Build the user edit. Whitespace-only input clears the status text;
    /// anything else is kept exactly as typed.
    pub fn edit(&self) -> DataEditUser {
        let text = self.text.value();
        DataEditUser {
            status: Some(UserStatus {
                text: (!text.trim().is_empty()).then(|| text.clone()),
                ..self.status.clone()
            }),
        }
    }

    /// Render the dialog.
    /// Returns the action to perform and whether the dialog is still open.
    pub fn render(&mut self, ctx: &egui::Context) -> (Option<DialogAction>, bool) {
        let mut action = None;
        let mut window_open = true;
        let mut should_close = false;

        egui::Window::new("Set your status")
            .open(&mut window_open)
            .resizable(false)
            .collapsible(false)
            .show(ctx, |ui| {
                ui.add_enabled_ui(!self.pending, |ui| {
                    ui.label("Custom status");
                    let response = ui.add(
                        egui::TextEdit::singleline(self.text.value_mut()).desired_width(280.0),
                    );

                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Close").clicked() {
                            should_close = true;
                        }

                        let submit = ui.add_enabled(self.can_save(), egui::Button::new("Save")).clicked()
                            || (response.lost_focus()
                                && ui.input(|i| i.key_pressed(egui::Key::Enter))
                                && self.can_save());
                        if submit {
                            self.pending = true;
                            action = Some(DialogAction::EditUser(self.edit()));
                        }
                    });
                });

                if self.pending {
                    ui.spinner();
                }

                if ui.input(|i| i.key_pressed(egui::Key::Escape)) {
                    should_close = true;
                }
            });

        (action, window_open && !should_close)
    }
}
