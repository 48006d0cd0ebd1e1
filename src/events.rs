//! Backend event processing (saved webhooks, deletions, user updates, errors).

use crate::dialog_manager::DialogManager;
use crate::protocol::GuiEvent;
use crate::state::ViewState;

/// Apply one backend event to the view state and the open dialogs.
pub fn process_single_event(state: &mut ViewState, dialogs: &mut DialogManager, event: GuiEvent) {
    match event {
        GuiEvent::WebhookUpdated(webhook) => {
            tracing::debug!(webhook = %webhook.id, "webhook saved");
            dialogs.webhook_saved(&webhook);
            state.push_info(format!("Saved {}", webhook.name));
            state.update_webhook(webhook);
        }

        GuiEvent::WebhookDeleted { webhook_id } => {
            let name = state
                .webhook(&webhook_id)
                .map(|w| w.name.clone())
                .unwrap_or_else(|| webhook_id.clone());
            state.remove_webhook(&webhook_id);
            dialogs.webhook_deleted(&webhook_id);
            state.push_info(format!("Deleted {name}"));
        }

        GuiEvent::UserUpdated(user) => {
            state
                .directory
                .users
                .insert(user.id.clone(), user.display_name().to_string());
            state.user = user;
            dialogs.user_updated();
            state.push_info("Status updated");
        }

        GuiEvent::Error { origin, message } => {
            dialogs.request_failed(&origin);
            state.push_error(format!("Error: {message}"));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::RequestOrigin;
    use chrono::{TimeZone, Utc};

    fn setup() -> (ViewState, DialogManager) {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        (ViewState::sample("https://stoat.chat", now), DialogManager::new())
    }

    #[test]
    fn test_webhook_updated() {
        let (mut state, mut dialogs) = setup();
        let mut hook = state.webhooks[0].clone();
        dialogs.open_webhook_editor(hook.clone(), "https://api.example");
        hook.name = "CI".into();

        process_single_event(&mut state, &mut dialogs, GuiEvent::WebhookUpdated(hook));

        assert_eq!(state.webhooks[0].name, "CI");
        assert_eq!(dialogs.webhook_editor.as_ref().unwrap().editor.webhook.name, "CI");
        assert_eq!(state.toasts.len(), 1);
        assert!(!state.toasts[0].is_error);
    }

    #[test]
    fn test_webhook_deleted_navigates_back() {
        let (mut state, mut dialogs) = setup();
        let hook = state.webhooks[0].clone();
        dialogs.open_webhook_editor(hook.clone(), "https://api.example");

        process_single_event(
            &mut state,
            &mut dialogs,
            GuiEvent::WebhookDeleted {
                webhook_id: hook.id.clone(),
            },
        );

        assert!(dialogs.webhook_editor.is_none());
        assert!(state.webhook(&hook.id).is_none());
        assert_eq!(state.toasts[0].text, "Deleted Build Bot");
    }

    #[test]
    fn test_user_updated_closes_dialog() {
        let (mut state, mut dialogs) = setup();
        dialogs.open_custom_status(state.user.status.as_ref());
        let mut user = state.user.clone();
        user.status = None;

        process_single_event(&mut state, &mut dialogs, GuiEvent::UserUpdated(user));

        assert!(dialogs.custom_status.is_none());
        assert_eq!(state.user.status, None);
    }

    #[test]
    fn test_error_keeps_dialog_open() {
        let (mut state, mut dialogs) = setup();
        dialogs.open_custom_status(None);
        dialogs.custom_status.as_mut().unwrap().pending = true;

        process_single_event(
            &mut state,
            &mut dialogs,
            GuiEvent::Error {
                origin: RequestOrigin::Status,
                message: "nope".into(),
            },
        );

        let dialog = dialogs.custom_status.as_ref().unwrap();
        assert!(!dialog.pending);
        assert!(state.toasts[0].is_error);
        assert_eq!(state.toasts[0].text, "Error: nope");
    }

    #[test]
    fn test_status_error_leaves_webhook_save_in_flight() {
        let (mut state, mut dialogs) = setup();
        dialogs.open_webhook_editor(state.webhooks[0].clone(), "https://api.example");
        let editor = dialogs.webhook_editor.as_mut().unwrap();
        editor.editor.name.set_value("CI".into());
        editor.save_action();
        dialogs.open_custom_status(None);
        dialogs.custom_status.as_mut().unwrap().pending = true;

        process_single_event(
            &mut state,
            &mut dialogs,
            GuiEvent::Error {
                origin: RequestOrigin::Status,
                message: "status rejected".into(),
            },
        );

        let editor = &dialogs.webhook_editor.as_ref().unwrap().editor;
        assert!(editor.pending);
        assert!(!editor.can_submit());
        assert!(!dialogs.custom_status.as_ref().unwrap().pending);
    }
}
