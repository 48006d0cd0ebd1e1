use crate::api::{DataEditUser, DataEditWebhook, PendingFile};
use crate::models::{User, Webhook};

/// Actions sent from the UI to the Backend
#[derive(Debug, Clone)]
pub enum BackendAction {
    /// Save a webhook; `avatar` is uploaded first and its id merged into `changes`
    EditWebhook {
        webhook_id: String,
        changes: DataEditWebhook,
        avatar: Option<PendingFile>,
    },
    /// Delete a webhook
    DeleteWebhook { webhook_id: String },
    /// Edit the current user (custom status)
    EditUser(DataEditUser),
    /// Stop the backend loop
    Shutdown,
}

impl BackendAction {
    /// Which dialog is waiting on this action.
    pub fn origin(&self) -> RequestOrigin {
        match self {
            BackendAction::EditWebhook { webhook_id, .. }
            | BackendAction::DeleteWebhook { webhook_id } => {
                RequestOrigin::Webhook(webhook_id.clone())
            }
            BackendAction::EditUser(_) => RequestOrigin::Status,
            BackendAction::Shutdown => RequestOrigin::Backend,
        }
    }
}

/// Where a failed request came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestOrigin {
    /// Save or delete of the webhook with this id
    Webhook(String),
    /// Custom status edit
    Status,
    /// The backend itself (runtime startup)
    Backend,
}

/// Events sent from the Backend to the UI
#[derive(Debug, Clone)]
pub enum GuiEvent {
    /// A webhook was saved
    WebhookUpdated(Webhook),
    /// A webhook was deleted
    WebhookDeleted { webhook_id: String },
    /// The current user was updated
    UserUpdated(User),
    /// A mutation failed
    Error {
        origin: RequestOrigin,
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::DataEditWebhook;

    #[test]
    fn test_action_origin() {
        let edit = BackendAction::EditWebhook {
            webhook_id: "W1".into(),
            changes: DataEditWebhook::default(),
            avatar: None,
        };
        assert_eq!(edit.origin(), RequestOrigin::Webhook("W1".into()));
        assert_eq!(
            BackendAction::DeleteWebhook {
                webhook_id: "W2".into()
            }
            .origin(),
            RequestOrigin::Webhook("W2".into())
        );
        assert_eq!(
            BackendAction::EditUser(DataEditUser::default()).origin(),
            RequestOrigin::Status
        );
    }
}
