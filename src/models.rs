//! Client-side snapshots of chat objects the components display.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Online presence shown next to a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Presence {
    Online,
    Idle,
    Focus,
    Busy,
    Invisible,
}

/// A user's custom status.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub presence: Option<Presence>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub username: String,
    pub discriminator: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub animated_avatar_url: Option<String>,
    #[serde(default)]
    pub status: Option<UserStatus>,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Display name, falling back to the username.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.username)
    }

    /// `username#discriminator`
    pub fn tag(&self) -> String {
        format!("{}#{}", self.username, self.discriminator)
    }

    /// Animated avatar when available, otherwise the static one.
    pub fn avatar(&self) -> Option<&str> {
        self.animated_avatar_url
            .as_deref()
            .or(self.avatar_url.as_deref())
    }
}

/// A channel webhook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
    pub id: String,
    pub channel_id: String,
    pub name: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
}

/// Metadata attached to an uploaded file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FileMetadata {
    File,
    Text,
    Image { width: u32, height: u32 },
    Video { width: u32, height: u32 },
    Audio,
}

/// An uploaded file (attachment, avatar, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct File {
    pub id: String,
    pub filename: String,
    #[serde(default)]
    pub size: Option<u64>,
    pub metadata: FileMetadata,
    pub original_url: String,
}

/// Kind of a message embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbedKind {
    Website,
    Image,
    Video,
    Text,
    None,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Embed {
    #[serde(rename = "type")]
    pub kind: EmbedKind,
    #[serde(default)]
    pub url: Option<String>,
}
