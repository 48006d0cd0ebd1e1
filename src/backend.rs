//! Mutation backend: runs chat API calls off the UI thread.
//!
//! The UI sends [`BackendAction`]s over a crossbeam channel; this loop
//! executes them on its own Tokio runtime and reports [`GuiEvent`]s back.

use std::sync::Arc;

use crossbeam_channel::{Receiver, Sender};
use tokio::runtime::Runtime;

use crate::api::ChatApi;
use crate::error::Result;
use crate::protocol::{BackendAction, GuiEvent, RequestOrigin};

pub fn run_backend(
    api: Arc<dyn ChatApi>,
    action_rx: Receiver<BackendAction>,
    event_tx: Sender<GuiEvent>,
) {
    // Create a Tokio runtime for this thread
    let rt = match Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!(error = %e, "failed to create tokio runtime");
            let _ = event_tx.send(GuiEvent::Error {
                origin: RequestOrigin::Backend,
                message: format!("Failed to create Tokio runtime: {}", e),
            });
            return;
        }
    };

    tracing::debug!("backend started");

    // recv() blocks this thread only; the runtime is driven by block_on per action
    while let Ok(action) = action_rx.recv() {
        let origin = action.origin();
        let event = match rt.block_on(handle_action(api.as_ref(), action)) {
            Ok(Some(event)) => event,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(error = %e, ?origin, "mutation failed");
                GuiEvent::Error {
                    origin,
                    message: e.to_string(),
                }
            }
        };

        if event_tx.send(event).is_err() {
            // UI is gone
            break;
        }
    }

    tracing::debug!("backend stopped");
}

/// Perform one action; `None` means the loop should stop.
async fn handle_action(api: &dyn ChatApi, action: BackendAction) -> Result<Option<GuiEvent>> {
    match action {
        BackendAction::EditWebhook {
            webhook_id,
            mut changes,
            avatar,
        } => {
            if let Some(file) = avatar {
                tracing::info!(webhook = %webhook_id, file = %file.filename, "uploading webhook avatar");
                changes.avatar = Some(api.upload_avatar(file).await?);
            }
            tracing::info!(webhook = %webhook_id, "editing webhook");
            let webhook = api.edit_webhook(&webhook_id, changes).await?;
            Ok(Some(GuiEvent::WebhookUpdated(webhook)))
        }
        BackendAction::DeleteWebhook { webhook_id } => {
            tracing::info!(webhook = %webhook_id, "deleting webhook");
            api.delete_webhook(&webhook_id).await?;
            Ok(Some(GuiEvent::WebhookDeleted { webhook_id }))
        }
        BackendAction::EditUser(changes) => {
            tracing::info!("editing user");
            let user = api.edit_user(changes).await?;
            Ok(Some(GuiEvent::UserUpdated(user)))
        }
        BackendAction::Shutdown => Ok(None),
    }
}
