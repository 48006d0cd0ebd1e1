//! Template strings for system messages.
//!
//! Each template is a format string with named `{placeholder}`s. The
//! renderer splits it into literal text and placeholder slots, so a
//! translation may reorder placeholders freely.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::error::Result;

/// Every translatable system message template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    UserAdded,
    UserRemoved,
    UserJoined,
    UserLeftGroup,
    UserLeftServer,
    UserKicked,
    UserBanned,
    ChannelRenamed,
    ChannelDescriptionChanged,
    ChannelIconChanged,
    ChannelOwnershipChanged,
    MessagePinned,
    MessageUnpinned,
    CallStarted,
    CallEnded,
}

impl Template {
    pub const ALL: [Template; 15] = [
        Template::UserAdded,
        Template::UserRemoved,
        Template::UserJoined,
        Template::UserLeftGroup,
        Template::UserLeftServer,
        Template::UserKicked,
        Template::UserBanned,
        Template::ChannelRenamed,
        Template::ChannelDescriptionChanged,
        Template::ChannelIconChanged,
        Template::ChannelOwnershipChanged,
        Template::MessagePinned,
        Template::MessageUnpinned,
        Template::CallStarted,
        Template::CallEnded,
    ];

    /// Key used in catalog override files.
    pub fn key(self) -> &'static str {
        match self {
            Template::UserAdded => "user_added",
            Template::UserRemoved => "user_remove",
            Template::UserJoined => "user_joined",
            Template::UserLeftGroup => "user_left_group",
            Template::UserLeftServer => "user_left_server",
            Template::UserKicked => "user_kicked",
            Template::UserBanned => "user_banned",
            Template::ChannelRenamed => "channel_renamed",
            Template::ChannelDescriptionChanged => "channel_description_changed",
            Template::ChannelIconChanged => "channel_icon_changed",
            Template::ChannelOwnershipChanged => "channel_ownership_changed",
            Template::MessagePinned => "message_pinned",
            Template::MessageUnpinned => "message_unpinned",
            Template::CallStarted => "call_started",
            Template::CallEnded => "call_ended",
        }
    }

    pub fn english(self) -> &'static str {
        match self {
            Template::UserAdded => "{user} has been added by {by}",
            Template::UserRemoved => "{user} has been removed by {by}",
            Template::UserJoined => "{user} joined the server",
            Template::UserLeftGroup => "{user} left the group",
            Template::UserLeftServer => "{user} left the server",
            Template::UserKicked => "{user} has been kicked from the server",
            Template::UserBanned => "{user} has been banned from the server",
            Template::ChannelRenamed => "{by} updated the group name to {name}",
            Template::ChannelDescriptionChanged => "{by} updated the group description",
            Template::ChannelIconChanged => "{by} updated the group icon",
            Template::ChannelOwnershipChanged => "{from} transferred group ownership to {to}",
            Template::MessagePinned => "{by} pinned {link}",
            Template::MessageUnpinned => "{by} unpinned {link}",
            Template::CallStarted => "{by} started a call",
            Template::CallEnded => "{by} started a call that lasted {duration}",
        }
    }
}

/// Template lookup with optional per-key overrides on top of English.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    overrides: HashMap<String, String>,
}

impl Catalog {
    pub fn english() -> Self {
        Self::default()
    }

    /// Parse an override file of the form `{"user_added": "..."}`.
    pub fn from_json(data: &str) -> Result<Self> {
        let overrides: HashMap<String, String> = serde_json::from_str(data)?;
        Ok(Self { overrides })
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path)?;
        Self::from_json(&data)
    }

    pub fn get(&self, template: Template) -> &str {
        self.overrides
            .get(template.key())
            .map(String::as_str)
            .unwrap_or_else(|| template.english())
    }

    /// Number of templates this catalog overrides.
    pub fn override_count(&self) -> usize {
        Template::ALL
            .iter()
            .filter(|t| self.overrides.contains_key(t.key()))
            .count()
    }
}

/// A piece of a parsed template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Placeholder(&'a str),
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Split a format string into literal text and `{name}` placeholders.
/// Braces that do not enclose a valid name stay literal.
pub fn segments(format: &str) -> Vec<Segment<'_>> {
    let mut out = Vec::new();
    let mut literal_start = 0;
    let mut search = 0;

    while let Some(open) = format[search..].find('{').map(|i| search + i) {
        let Some(close) = format[open + 1..].find('}').map(|i| open + 1 + i) else {
            break;
        };
        let name = &format[open + 1..close];
        if is_placeholder_name(name) {
            if open > literal_start {
                out.push(Segment::Literal(&format[literal_start..open]));
            }
            out.push(Segment::Placeholder(name));
            literal_start = close + 1;
            search = close + 1;
        } else {
            search = open + 1;
        }
    }

    if literal_start < format.len() {
        out.push(Segment::Literal(&format[literal_start..]));
    }
    out
}
