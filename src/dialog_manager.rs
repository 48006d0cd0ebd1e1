//! Dialog management for centralized dialog state and rendering.
//!
//! Uses the `Option<Dialog>` pattern: `None` is closed, `Some` is open.
//! Backend results are routed back to whichever dialog started the request.

use eframe::egui::Context;

use crate::models::{UserStatus, Webhook};
use crate::protocol::{BackendAction, RequestOrigin};
use crate::ui::dialogs::{CustomStatusDialog, DialogAction, WebhookEditorDialog};

#[derive(Default)]
pub struct DialogManager {
    pub custom_status: Option<CustomStatusDialog>,
    pub webhook_editor: Option<WebhookEditorDialog>,
}

impl DialogManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_custom_status(&mut self, current: Option<&UserStatus>) {
        self.custom_status = Some(CustomStatusDialog::new(current));
    }

    /// Open the editor for `webhook`, replacing any editor already open.
    pub fn open_webhook_editor(&mut self, webhook: Webhook, api_url: &str) {
        self.webhook_editor = Some(WebhookEditorDialog::new(webhook, api_url));
    }

    /// Render all open dialogs and collect their actions.
    pub fn render(&mut self, ctx: &Context) -> Vec<DialogAction> {
        let mut actions = Vec::new();

        if let Some(dialog) = &mut self.custom_status {
            let (action, open) = dialog.render(ctx);
            actions.extend(action);
            if !open {
                self.custom_status = None;
            }
        }

        if let Some(dialog) = &mut self.webhook_editor {
            let (action, open) = dialog.render(ctx);
            actions.extend(action);
            if !open {
                self.webhook_editor = None;
            }
        }

        actions
    }

    /// The webhook was saved: the editor rebases onto the new values.
    pub fn webhook_saved(&mut self, webhook: &Webhook) {
        if let Some(dialog) = &mut self.webhook_editor {
            if dialog.webhook_id() == webhook.id {
                dialog.editor.saved(webhook.clone());
            }
        }
    }

    /// The webhook is gone; leave its settings page.
    pub fn webhook_deleted(&mut self, webhook_id: &str) {
        if self
            .webhook_editor
            .as_ref()
            .is_some_and(|d| d.webhook_id() == webhook_id)
        {
            self.webhook_editor = None;
        }
    }

    /// The status was saved; the status dialog closes.
    pub fn user_updated(&mut self) {
        self.custom_status = None;
    }

    /// A request failed; only the dialog that sent it becomes editable again.
    /// A backend failure settles every dialog since nothing will answer.
    pub fn request_failed(&mut self, origin: &RequestOrigin) {
        if matches!(origin, RequestOrigin::Status | RequestOrigin::Backend) {
            if let Some(dialog) = &mut self.custom_status {
                dialog.pending = false;
            }
        }

        if let Some(dialog) = &mut self.webhook_editor {
            let matches = match origin {
                RequestOrigin::Webhook(id) => dialog.webhook_id() == id,
                RequestOrigin::Backend => true,
                RequestOrigin::Status => false,
            };
            if matches {
                dialog.failed();
            }
        }
    }
}

/// Backend request for a dialog action; `None` for UI-only actions.
pub fn backend_action(action: DialogAction) -> Option<BackendAction> {
    match action {
        DialogAction::SaveWebhook {
            webhook_id,
            changes,
            avatar,
        } => Some(BackendAction::EditWebhook {
            webhook_id,
            changes,
            avatar,
        }),
        DialogAction::DeleteWebhook { webhook_id } => {
            Some(BackendAction::DeleteWebhook { webhook_id })
        }
        DialogAction::EditUser(changes) => Some(BackendAction::EditUser(changes)),
        DialogAction::Notify(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DataEditUser;

    fn webhook() -> Webhook {
        Webhook {
            id: "W1".into(),
            channel_id: "C1".into(),
            name: "Builds".into(),
            avatar_url: None,
            token: None,
        }
    }

    #[test]
    fn test_saved_rebases_editor() {
        let mut dialogs = DialogManager::new();
        dialogs.open_webhook_editor(webhook(), "https://api.example");
        let editor = &mut dialogs.webhook_editor.as_mut().unwrap().editor;
        editor.name.set_value("CI".into());
        editor.pending = true;

        let mut saved = webhook();
        saved.name = "CI".into();
        dialogs.webhook_saved(&saved);

        let editor = &dialogs.webhook_editor.as_ref().unwrap().editor;
        assert!(!editor.pending);
        assert!(!editor.is_dirty());
        assert_eq!(editor.webhook.name, "CI");
    }

    #[test]
    fn test_deleted_closes_matching_editor_only() {
        let mut dialogs = DialogManager::new();
        dialogs.open_webhook_editor(webhook(), "https://api.example");
        dialogs.webhook_deleted("W2");
        assert!(dialogs.webhook_editor.is_some());
        dialogs.webhook_deleted("W1");
        assert!(dialogs.webhook_editor.is_none());
    }

    /// Both dialogs waiting on a request.
    fn both_pending() -> DialogManager {
        let mut dialogs = DialogManager::new();
        dialogs.open_custom_status(None);
        dialogs.open_webhook_editor(webhook(), "https://api.example");
        dialogs.custom_status.as_mut().unwrap().pending = true;
        let dialog = dialogs.webhook_editor.as_mut().unwrap();
        dialog.editor.name.set_value("CI".into());
        dialog.save_action();
        dialogs
    }

    #[test]
    fn test_status_failure_keeps_webhook_save_locked() {
        let mut dialogs = both_pending();

        dialogs.request_failed(&RequestOrigin::Status);

        assert!(!dialogs.custom_status.as_ref().unwrap().pending);
        let editor = &dialogs.webhook_editor.as_ref().unwrap().editor;
        assert!(editor.pending);
        assert!(!editor.can_submit());
    }

    #[test]
    fn test_webhook_failure_reenables_only_its_editor() {
        let mut dialogs = both_pending();

        // another webhook's failure is not ours
        dialogs.request_failed(&RequestOrigin::Webhook("W2".into()));
        assert!(dialogs.webhook_editor.as_ref().unwrap().editor.pending);

        dialogs.request_failed(&RequestOrigin::Webhook("W1".into()));
        let editor = &dialogs.webhook_editor.as_ref().unwrap().editor;
        assert!(!editor.pending);
        // edits survive a failed save
        assert!(editor.is_dirty());
        assert!(editor.can_submit());
        assert!(dialogs.custom_status.as_ref().unwrap().pending);
    }

    #[test]
    fn test_backend_failure_settles_everything() {
        let mut dialogs = both_pending();
        dialogs.request_failed(&RequestOrigin::Backend);
        assert!(!dialogs.custom_status.as_ref().unwrap().pending);
        assert!(!dialogs.webhook_editor.as_ref().unwrap().editor.pending);
    }

    #[test]
    fn test_user_updated_closes_status() {
        let mut dialogs = DialogManager::new();
        dialogs.open_custom_status(None);
        dialogs.user_updated();
        assert!(dialogs.custom_status.is_none());
    }

    #[test]
    fn test_backend_action_mapping() {
        assert!(backend_action(DialogAction::Notify("copied".into())).is_none());
        assert!(matches!(
            backend_action(DialogAction::DeleteWebhook {
                webhook_id: "W1".into()
            }),
            Some(BackendAction::DeleteWebhook { webhook_id }) if webhook_id == "W1"
        ));
        assert!(matches!(
            backend_action(DialogAction::EditUser(DataEditUser::default())),
            Some(BackendAction::EditUser(_))
        ));
    }
}
