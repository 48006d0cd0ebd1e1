//! Webhook settings editor state.
//!
//! Holds the name/avatar form for one webhook and turns the dirty
//! fields into a partial [`DataEditWebhook`]. Avatar uploads happen
//! before the edit so the edit can reference the uploaded id.

use crate::api::{DataEditWebhook, FieldsWebhook, PendingFile};
use crate::form::{can_submit, FormControl};
use crate::models::Webhook;

/// State of the avatar input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarInput {
    /// An existing avatar, shown from its URL.
    Url(String),
    /// No avatar (removed, or never set).
    Cleared,
    /// A newly picked file waiting to be uploaded.
    Upload(PendingFile),
}

impl AvatarInput {
    fn from_url(url: Option<&str>) -> Self {
        url.map_or(AvatarInput::Cleared, |u| AvatarInput::Url(u.to_string()))
    }
}

/// Edit form for a single webhook.
pub struct WebhookEditor {
    pub webhook: Webhook,
    pub name: FormControl<String>,
    pub avatar: FormControl<AvatarInput>,
    /// A save or delete is in flight.
    pub pending: bool,
}

impl WebhookEditor {
    pub fn new(webhook: Webhook) -> Self {
        Self {
            name: FormControl::new(webhook.name.clone()),
            avatar: FormControl::new(AvatarInput::from_url(webhook.avatar_url.as_deref())),
            webhook,
            pending: false,
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.name.is_dirty() || self.avatar.is_dirty()
    }

    pub fn can_submit(&self) -> bool {
        can_submit(self.is_dirty(), self.pending)
    }

    /// The file that must be uploaded before [`changes`](Self::changes).
    pub fn pending_upload(&self) -> Option<&PendingFile> {
        match self.avatar.value() {
            AvatarInput::Upload(file) if self.avatar.is_dirty() => Some(file),
            _ => None,
        }
    }

    /// Build the partial update from the dirty fields.
    ///
    /// `uploaded_avatar` is the media id returned for
    /// [`pending_upload`](Self::pending_upload), if there was one.
    pub fn changes(&self, uploaded_avatar: Option<String>) -> DataEditWebhook {
        let mut changes = DataEditWebhook::default();

        if self.name.is_dirty() {
            changes.name = Some(self.name.value().trim().to_string());
        }

        if self.avatar.is_dirty() {
            match self.avatar.value() {
                AvatarInput::Cleared => changes.remove.push(FieldsWebhook::Avatar),
                AvatarInput::Upload(_) => changes.avatar = uploaded_avatar,
                // switching back to some URL is not an edit the API knows about
                AvatarInput::Url(_) => {}
            }
        }

        changes
    }

    /// Restore the form to the webhook's current values.
    pub fn reset(&mut self) {
        self.name.set_value(self.webhook.name.clone());
        self.avatar
            .set_value(AvatarInput::from_url(self.webhook.avatar_url.as_deref()));
    }

    /// Adopt the server's copy after a successful save.
    pub fn saved(&mut self, webhook: Webhook) {
        self.name.rebase(webhook.name.clone());
        self.avatar
            .rebase(AvatarInput::from_url(webhook.avatar_url.as_deref()));
        self.webhook = webhook;
        self.pending = false;
    }

    pub fn url(&self, api_url: &str) -> Option<String> {
        webhook_url(api_url, &self.webhook)
    }
}

/// Execute URL of a webhook: `{api}/webhooks/{id}/{token}`.
/// `None` when the token is not known to this client.
pub fn webhook_url(api_url: &str, webhook: &Webhook) -> Option<String> {
    let token = webhook.token.as_deref()?;
    Some(format!(
        "{}/webhooks/{}/{}",
        api_url.trim_end_matches('/'),
        webhook.id,
        token
    ))
}
