//! Dialog action types - dialogs return actions instead of mutating state directly.
//!
//! The app processes these in its update loop and forwards mutations to
//! the backend.

use crate::api::{DataEditUser, DataEditWebhook, PendingFile};

/// Actions that dialogs can return to the main application.
#[derive(Debug, Clone)]
pub enum DialogAction {
    // Webhook editor
    SaveWebhook {
        webhook_id: String,
        changes: DataEditWebhook,
        avatar: Option<PendingFile>,
    },
    DeleteWebhook {
        webhook_id: String,
    },

    // Custom status
    EditUser(DataEditUser),

    /// Show a transient status toast
    Notify(String),
}
