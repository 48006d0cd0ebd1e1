//! Default node tree produced by system message rendering.
//!
//! [`DefaultRenderers`] resolves user ids through a [`Directory`] and
//! recognises links that point back into the client, so the egui layer
//! (or a test) only has to walk a flat list of [`Node`]s.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::render::Renderers;
use crate::time::{format_datetime, relative_duration, DEFAULT_DATETIME_FORMAT};

/// Label used for users the directory cannot resolve.
pub const UNKNOWN_USER: &str = "Unknown User";

/// A rendered piece of a system message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Strong(String),
    Mention { user_id: String, label: String },
    Link { href: String, label: String },
    /// `tooltip` carries the absolute time for hover and screen readers.
    Time { text: String, tooltip: String },
}

impl Node {
    /// Visible text of this node.
    pub fn text(&self) -> String {
        match self {
            Node::Text(text) | Node::Strong(text) => text.clone(),
            Node::Mention { label, .. } => format!("@{label}"),
            Node::Link { label, .. } => label.clone(),
            Node::Time { text, .. } => text.clone(),
        }
    }
}

/// Flatten nodes into a single line of text.
pub fn plain_text(nodes: &[Node]) -> String {
    nodes.iter().map(Node::text).collect()
}

/// Lookup of display names for users and channels.
pub trait Directory {
    fn user_name(&self, user_id: &str) -> Option<String>;

    fn channel_name(&self, _channel_id: &str) -> Option<String> {
        None
    }
}

/// In-memory [`Directory`] with separate user and channel tables.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NameDirectory {
    pub users: HashMap<String, String>,
    pub channels: HashMap<String, String>,
}

impl NameDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(mut self, user_id: &str, name: &str) -> Self {
        self.users.insert(user_id.to_string(), name.to_string());
        self
    }

    pub fn with_channel(mut self, channel_id: &str, name: &str) -> Self {
        self.channels.insert(channel_id.to_string(), name.to_string());
        self
    }
}

impl Directory for NameDirectory {
    fn user_name(&self, user_id: &str) -> Option<String> {
        self.users.get(user_id).cloned()
    }

    fn channel_name(&self, channel_id: &str) -> Option<String> {
        self.channels.get(channel_id).cloned()
    }
}

/// A link into the client: `/server/{s}/channel/{c}/{m}` or `/channel/{c}/{m}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageLink {
    pub server_id: Option<String>,
    pub channel_id: String,
    pub message_id: String,
}

static MESSAGE_LINK_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:/server/(?P<server>[^/?#]+))?/channel/(?P<channel>[^/?#]+)/(?P<message>[^/?#]+)/?$")
        .expect("message link pattern is valid")
});

/// Parse `href` as a message link on `origin`.
pub fn parse_message_link(origin: &str, href: &str) -> Option<MessageLink> {
    let path = href.strip_prefix(origin)?;
    let caps = MESSAGE_LINK_RE.captures(path)?;
    Some(MessageLink {
        server_id: caps.name("server").map(|m| m.as_str().to_string()),
        channel_id: caps["channel"].to_string(),
        message_id: caps["message"].to_string(),
    })
}

/// [`Renderers`] implementation producing [`Node`]s.
pub struct DefaultRenderers<'a> {
    directory: &'a dyn Directory,
    origin: &'a str,
    datetime_format: &'a str,
}

impl<'a> DefaultRenderers<'a> {
    pub fn new(directory: &'a dyn Directory, origin: &'a str) -> Self {
        Self {
            directory,
            origin,
            datetime_format: DEFAULT_DATETIME_FORMAT,
        }
    }

    pub fn with_datetime_format(mut self, pattern: &'a str) -> Self {
        self.datetime_format = pattern;
        self
    }
}

impl Renderers for DefaultRenderers<'_> {
    type Node = Node;

    fn text(&self, text: &str) -> Node {
        Node::Text(text.to_string())
    }

    fn strong(&self, text: &str) -> Node {
        Node::Strong(text.to_string())
    }

    fn user_mention(&self, user_id: &str) -> Node {
        Node::Mention {
            user_id: user_id.to_string(),
            label: self
                .directory
                .user_name(user_id)
                .unwrap_or_else(|| UNKNOWN_USER.to_string()),
        }
    }

    fn anchor(&self, href: &str) -> Node {
        let label = match parse_message_link(self.origin, href) {
            Some(link) => {
                let channel = self
                    .directory
                    .channel_name(&link.channel_id)
                    .unwrap_or_else(|| "unknown-channel".to_string());
                format!("#{channel} › message")
            }
            None => href.to_string(),
        };
        Node::Link {
            href: href.to_string(),
            label,
        }
    }

    fn relative_time(&self, value: DateTime<Utc>, reference: DateTime<Utc>) -> Node {
        Node::Time {
            text: relative_duration(value, reference),
            tooltip: format_datetime(value, self.datetime_format),
        }
    }
}
