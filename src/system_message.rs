//! System message events as delivered by the messaging backend.
//!
//! A system message is a non-user-authored entry in a conversation that
//! records a structural event (membership change, rename, pin, call...).
//! On the wire it is a JSON object whose `type` field selects the shape
//! of the remaining fields:
//!
//! ```json
//! { "type": "user_added", "userId": "01H...", "byId": "01G..." }
//! ```
//!
//! Tags this client does not know about are kept as [`SystemMessage::Unknown`]
//! so that newer servers never break rendering of older clients.

use chrono::{DateTime, Utc};
use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;
use serde_json::{Map, Value};

/// A structural conversation event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SystemMessage {
    UserAdded { user_id: String, by_id: String },
    UserRemove { user_id: String, by_id: String },
    UserJoined { user_id: String },
    UserLeft { user_id: String },
    UserKicked { user_id: String },
    UserBanned { user_id: String },
    ChannelRenamed { by_id: String, name: String },
    ChannelDescriptionChanged { by_id: String },
    ChannelIconChanged { by_id: String },
    ChannelOwnershipChanged { from_id: String, to_id: String },
    MessagePinned { by_id: String, message_id: String },
    MessageUnpinned { by_id: String, message_id: String },
    /// `finished_at` is `None` while the call is still ongoing.
    CallStarted {
        by_id: String,
        started_at: DateTime<Utc>,
        finished_at: Option<DateTime<Utc>>,
    },
    Text { content: String },
    /// Any tag outside the set above, kept verbatim.
    Unknown { kind: String },
}

impl SystemMessage {
    /// The wire tag of this event.
    pub fn kind(&self) -> &str {
        match self {
            SystemMessage::UserAdded { .. } => "user_added",
            SystemMessage::UserRemove { .. } => "user_remove",
            SystemMessage::UserJoined { .. } => "user_joined",
            SystemMessage::UserLeft { .. } => "user_left",
            SystemMessage::UserKicked { .. } => "user_kicked",
            SystemMessage::UserBanned { .. } => "user_banned",
            SystemMessage::ChannelRenamed { .. } => "channel_renamed",
            SystemMessage::ChannelDescriptionChanged { .. } => "channel_description_changed",
            SystemMessage::ChannelIconChanged { .. } => "channel_icon_changed",
            SystemMessage::ChannelOwnershipChanged { .. } => "channel_ownership_changed",
            SystemMessage::MessagePinned { .. } => "message_pinned",
            SystemMessage::MessageUnpinned { .. } => "message_unpinned",
            SystemMessage::CallStarted { .. } => "call_started",
            SystemMessage::Text { .. } => "text",
            SystemMessage::Unknown { kind } => kind,
        }
    }

    /// Whether the tag was recognised.
    pub fn is_known(&self) -> bool {
        !matches!(self, SystemMessage::Unknown { .. })
    }

    /// Whether this is a call that has already ended.
    pub fn is_finished_call(&self) -> bool {
        matches!(
            self,
            SystemMessage::CallStarted {
                finished_at: Some(_),
                ..
            }
        )
    }
}

/// Remove `name` from the object and decode it; a missing field decodes
/// from `null` so optional fields come out as `None`.
fn field<T, E>(fields: &mut Map<String, Value>, name: &'static str) -> Result<T, E>
where
    T: DeserializeOwned,
    E: de::Error,
{
    let value = fields.remove(name).unwrap_or(Value::Null);
    serde_json::from_value(value).map_err(|e| E::custom(format_args!("field `{name}`: {e}")))
}

impl<'de> Deserialize<'de> for SystemMessage {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let mut fields = Map::<String, Value>::deserialize(deserializer)?;
        let kind = match fields.remove("type") {
            Some(Value::String(kind)) => kind,
            Some(_) => return Err(de::Error::custom("field `type` must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };
        let f = &mut fields;

        let message = match kind.as_str() {
            "user_added" => SystemMessage::UserAdded {
                user_id: field(f, "userId")?,
                by_id: field(f, "byId")?,
            },
            "user_remove" => SystemMessage::UserRemove {
                user_id: field(f, "userId")?,
                by_id: field(f, "byId")?,
            },
            "user_joined" => SystemMessage::UserJoined {
                user_id: field(f, "userId")?,
            },
            "user_left" => SystemMessage::UserLeft {
                user_id: field(f, "userId")?,
            },
            "user_kicked" => SystemMessage::UserKicked {
                user_id: field(f, "userId")?,
            },
            "user_banned" => SystemMessage::UserBanned {
                user_id: field(f, "userId")?,
            },
            "channel_renamed" => SystemMessage::ChannelRenamed {
                by_id: field(f, "byId")?,
                name: field(f, "name")?,
            },
            "channel_description_changed" => SystemMessage::ChannelDescriptionChanged {
                by_id: field(f, "byId")?,
            },
            "channel_icon_changed" => SystemMessage::ChannelIconChanged {
                by_id: field(f, "byId")?,
            },
            "channel_ownership_changed" => SystemMessage::ChannelOwnershipChanged {
                from_id: field(f, "fromId")?,
                to_id: field(f, "toId")?,
            },
            "message_pinned" => SystemMessage::MessagePinned {
                by_id: field(f, "byId")?,
                message_id: field(f, "messageId")?,
            },
            "message_unpinned" => SystemMessage::MessageUnpinned {
                by_id: field(f, "byId")?,
                message_id: field(f, "messageId")?,
            },
            "call_started" => SystemMessage::CallStarted {
                by_id: field(f, "byId")?,
                started_at: field(f, "startedAt")?,
                finished_at: field(f, "finishedAt")?,
            },
            "text" => SystemMessage::Text {
                content: field(f, "content")?,
            },
            _ => SystemMessage::Unknown { kind },
        };

        Ok(message)
    }
}
