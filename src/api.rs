//! Chat API seam used by the mutation backend.
//!
//! The components never talk to the network themselves: every mutation
//! goes through [`ChatApi`]. [`MemoryApi`] is an in-process implementation
//! backing the desktop binary and the tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::models::{User, UserStatus, Webhook};

/// Webhook fields that can be cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FieldsWebhook {
    Avatar,
}

/// Partial webhook update; only set fields change.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataEditWebhook {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Id of an uploaded avatar.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    pub remove: Vec<FieldsWebhook>,
}

impl DataEditWebhook {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.avatar.is_none() && self.remove.is_empty()
    }
}

/// Partial update of the current user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DataEditUser {
    /// Replaces the whole status object when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<UserStatus>,
}

/// A file picked locally and not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingFile {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[async_trait]
pub trait ChatApi: Send + Sync {
    async fn edit_webhook(&self, webhook_id: &str, changes: DataEditWebhook) -> Result<Webhook>;

    async fn delete_webhook(&self, webhook_id: &str) -> Result<()>;

    /// Upload an avatar image, returning the media id.
    async fn upload_avatar(&self, file: PendingFile) -> Result<String>;

    async fn edit_user(&self, changes: DataEditUser) -> Result<User>;
}

struct MemoryState {
    user: User,
    webhooks: HashMap<String, Webhook>,
    next_upload: u64,
    fail_next: Option<String>,
}

/// In-memory [`ChatApi`].
pub struct MemoryApi {
    media_url: String,
    state: Mutex<MemoryState>,
}

impl MemoryApi {
    pub fn new(media_url: &str, user: User, webhooks: Vec<Webhook>) -> Self {
        Self {
            media_url: media_url.trim_end_matches('/').to_string(),
            state: Mutex::new(MemoryState {
                user,
                webhooks: webhooks.into_iter().map(|w| (w.id.clone(), w)).collect(),
                next_upload: 1,
                fail_next: None,
            }),
        }
    }

    /// Make the next call fail with `reason`.
    pub fn fail_next(&self, reason: &str) {
        self.lock().fail_next = Some(reason.to_string());
    }

    pub fn webhook(&self, id: &str) -> Option<Webhook> {
        self.lock().webhooks.get(id).cloned()
    }

    pub fn user(&self) -> User {
        self.lock().user.clone()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, MemoryState> {
        // a panic while holding the lock leaves plain data behind, keep going
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn check_failure(state: &mut MemoryState) -> Result<()> {
        match state.fail_next.take() {
            Some(reason) => Err(Error::Api(reason)),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl ChatApi for MemoryApi {
    async fn edit_webhook(&self, webhook_id: &str, changes: DataEditWebhook) -> Result<Webhook> {
        let mut state = self.lock();
        Self::check_failure(&mut state)?;
        let webhook = state
            .webhooks
            .get_mut(webhook_id)
            .ok_or_else(|| Error::NotFound(format!("webhook {webhook_id}")))?;

        if let Some(name) = &changes.name {
            if name.is_empty() || name.chars().count() > 32 {
                return Err(Error::Api("webhook name must be 1-32 characters".into()));
            }
        }

        if changes.remove.contains(&FieldsWebhook::Avatar) {
            webhook.avatar_url = None;
        }
        if let Some(name) = changes.name {
            webhook.name = name;
        }
        if let Some(avatar) = changes.avatar {
            webhook.avatar_url = Some(format!("{}/avatars/{}", self.media_url, avatar));
        }
        Ok(webhook.clone())
    }

    async fn delete_webhook(&self, webhook_id: &str) -> Result<()> {
        let mut state = self.lock();
        Self::check_failure(&mut state)?;
        state
            .webhooks
            .remove(webhook_id)
            .map(|_| ())
            .ok_or_else(|| Error::NotFound(format!("webhook {webhook_id}")))
    }

    async fn upload_avatar(&self, file: PendingFile) -> Result<String> {
        let mut state = self.lock();
        Self::check_failure(&mut state)?;
        if file.bytes.is_empty() {
            return Err(Error::Api(format!("{} is empty", file.filename)));
        }
        let id = format!("upload{}", state.next_upload);
        state.next_upload += 1;
        Ok(id)
    }

    async fn edit_user(&self, changes: DataEditUser) -> Result<User> {
        let mut state = self.lock();
        Self::check_failure(&mut state)?;
        if let Some(status) = changes.status {
            state.user.status = Some(status);
        }
        Ok(state.user.clone())
    }
}
