//! System message rendering.
//!
//! [`render`] maps a [`SystemMessage`] plus its surrounding
//! [`RenderContext`] to a list of nodes. How a node looks is up to the
//! caller's [`Renderers`]: the dispatch here only decides which template
//! applies and which references go through which primitive.
//!
//! Rendering is pure: no I/O, no logging, and identical inputs always
//! produce identical output.

use chrono::{DateTime, Utc};

use crate::i18n::{segments, Catalog, Segment, Template};
use crate::system_message::SystemMessage;

/// Primitives a host supplies to turn references into displayable nodes.
pub trait Renderers {
    type Node: Clone;

    fn text(&self, text: &str) -> Self::Node;

    fn strong(&self, text: &str) -> Self::Node;

    /// A clickable reference to a user.
    fn user_mention(&self, user_id: &str) -> Self::Node;

    fn anchor(&self, href: &str) -> Self::Node;

    /// Distance from `reference` to `value`; the absolute `value` is
    /// expected as tooltip/accessible text.
    fn relative_time(&self, value: DateTime<Utc>, reference: DateTime<Utc>) -> Self::Node;
}

/// Where the message is being shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderContext {
    /// Server channel (as opposed to a group or direct conversation).
    pub is_server: bool,
    pub server_id: Option<String>,
    pub channel_id: String,
    /// Web origin used to build message links, without trailing slash.
    pub origin: String,
}

impl RenderContext {
    /// Deep link to a message in the current channel.
    pub fn message_link(&self, message_id: &str) -> String {
        let server = self
            .server_id
            .as_deref()
            .map(|id| format!("/server/{id}"))
            .unwrap_or_default();
        format!(
            "{}{}/channel/{}/{}",
            self.origin, server, self.channel_id, message_id
        )
    }
}

/// Render a system message.
///
/// Unknown tags render as their raw tag text.
pub fn render<R: Renderers>(
    message: &SystemMessage,
    context: &RenderContext,
    catalog: &Catalog,
    renderers: &R,
) -> Vec<R::Node> {
    let mention = |id: &str| renderers.user_mention(id);

    let (template, args) = match message {
        SystemMessage::UserAdded { user_id, by_id } => (
            Template::UserAdded,
            vec![("user", mention(user_id)), ("by", mention(by_id))],
        ),
        SystemMessage::UserRemove { user_id, by_id } => (
            Template::UserRemoved,
            vec![("user", mention(user_id)), ("by", mention(by_id))],
        ),
        SystemMessage::UserJoined { user_id } => {
            (Template::UserJoined, vec![("user", mention(user_id))])
        }
        SystemMessage::UserLeft { user_id } => {
            let template = if context.is_server {
                Template::UserLeftServer
            } else {
                Template::UserLeftGroup
            };
            (template, vec![("user", mention(user_id))])
        }
        SystemMessage::UserKicked { user_id } => {
            (Template::UserKicked, vec![("user", mention(user_id))])
        }
        SystemMessage::UserBanned { user_id } => {
            (Template::UserBanned, vec![("user", mention(user_id))])
        }
        SystemMessage::ChannelRenamed { by_id, name } => (
            Template::ChannelRenamed,
            vec![("by", mention(by_id)), ("name", renderers.strong(name))],
        ),
        SystemMessage::ChannelDescriptionChanged { by_id } => {
            (Template::ChannelDescriptionChanged, vec![("by", mention(by_id))])
        }
        SystemMessage::ChannelIconChanged { by_id } => {
            (Template::ChannelIconChanged, vec![("by", mention(by_id))])
        }
        SystemMessage::ChannelOwnershipChanged { from_id, to_id } => (
            Template::ChannelOwnershipChanged,
            vec![("from", mention(from_id)), ("to", mention(to_id))],
        ),
        SystemMessage::MessagePinned { by_id, message_id } => (
            Template::MessagePinned,
            vec![
                ("by", mention(by_id)),
                ("link", renderers.anchor(&context.message_link(message_id))),
            ],
        ),
        SystemMessage::MessageUnpinned { by_id, message_id } => (
            Template::MessageUnpinned,
            vec![
                ("by", mention(by_id)),
                ("link", renderers.anchor(&context.message_link(message_id))),
            ],
        ),
        SystemMessage::CallStarted {
            by_id,
            started_at,
            finished_at,
        } => match finished_at {
            None => (Template::CallStarted, vec![("by", mention(by_id))]),
            Some(finished_at) => (
                Template::CallEnded,
                vec![
                    ("by", mention(by_id)),
                    ("duration", renderers.relative_time(*finished_at, *started_at)),
                ],
            ),
        },
        SystemMessage::Text { content } => return vec![renderers.text(content)],
        SystemMessage::Unknown { kind } => return vec![renderers.text(kind)],
    };

    fill(catalog.get(template), &args, renderers)
}

/// Interleave literal template text with the pre-rendered arguments.
/// Placeholders without an argument are kept as literal `{name}` text.
fn fill<R: Renderers>(format: &str, args: &[(&str, R::Node)], renderers: &R) -> Vec<R::Node> {
    segments(format)
        .into_iter()
        .map(|segment| match segment {
            Segment::Literal(text) => renderers.text(text),
            Segment::Placeholder(name) => args
                .iter()
                .find(|(key, _)| *key == name)
                .map(|(_, node)| node.clone())
                .unwrap_or_else(|| renderers.text(&format!("{{{name}}}"))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    /// Renders every primitive as a tagged string so tests can assert on
    /// exactly which primitive produced what.
    struct Tagged;

    impl Renderers for Tagged {
        type Node = String;

        fn text(&self, text: &str) -> String {
            text.to_string()
        }

        fn strong(&self, text: &str) -> String {
            format!("<b>{text}</b>")
        }

        fn user_mention(&self, user_id: &str) -> String {
            format!("<@{user_id}>")
        }

        fn anchor(&self, href: &str) -> String {
            format!("<a {href}>")
        }

        fn relative_time(&self, value: DateTime<Utc>, reference: DateTime<Utc>) -> String {
            format!("<t {}s>", (value - reference).num_seconds())
        }
    }

    fn group() -> RenderContext {
        RenderContext {
            is_server: false,
            server_id: None,
            channel_id: "C1".into(),
            origin: "https://app.example".into(),
        }
    }

    fn server() -> RenderContext {
        RenderContext {
            is_server: true,
            server_id: Some("S1".into()),
            ..group()
        }
    }

    fn show(message: &SystemMessage, context: &RenderContext) -> String {
        render(message, context, &Catalog::english(), &Tagged).concat()
    }

    #[test]
    fn test_user_added_mentions_in_order() {
        let msg = SystemMessage::UserAdded {
            user_id: "U1".into(),
            by_id: "U2".into(),
        };
        let nodes = render(&msg, &group(), &Catalog::english(), &Tagged);
        assert_eq!(nodes, vec!["<@U1>", " has been added by ", "<@U2>"]);
    }

    #[test]
    fn test_user_left_depends_on_context() {
        let msg = SystemMessage::UserLeft { user_id: "U1".into() };
        assert_eq!(show(&msg, &group()), "<@U1> left the group");
        assert_eq!(show(&msg, &server()), "<@U1> left the server");
    }

    #[test]
    fn test_membership_templates() {
        let cases = [
            (
                SystemMessage::UserRemove {
                    user_id: "U1".into(),
                    by_id: "U2".into(),
                },
                "<@U1> has been removed by <@U2>",
            ),
            (
                SystemMessage::UserJoined { user_id: "U1".into() },
                "<@U1> joined the server",
            ),
            (
                SystemMessage::UserKicked { user_id: "U1".into() },
                "<@U1> has been kicked from the server",
            ),
            (
                SystemMessage::UserBanned { user_id: "U1".into() },
                "<@U1> has been banned from the server",
            ),
        ];
        for (msg, expected) in cases {
            assert_eq!(show(&msg, &server()), expected);
        }
    }

    #[test]
    fn test_channel_templates() {
        let renamed = SystemMessage::ChannelRenamed {
            by_id: "U1".into(),
            name: "Lounge".into(),
        };
        assert_eq!(
            show(&renamed, &group()),
            "<@U1> updated the group name to <b>Lounge</b>"
        );

        let description = SystemMessage::ChannelDescriptionChanged { by_id: "U1".into() };
        assert_eq!(show(&description, &group()), "<@U1> updated the group description");

        let icon = SystemMessage::ChannelIconChanged { by_id: "U1".into() };
        assert_eq!(show(&icon, &group()), "<@U1> updated the group icon");

        let ownership = SystemMessage::ChannelOwnershipChanged {
            from_id: "U1".into(),
            to_id: "U2".into(),
        };
        assert_eq!(
            show(&ownership, &group()),
            "<@U1> transferred group ownership to <@U2>"
        );
    }

    #[test]
    fn test_pin_links() {
        let pinned = SystemMessage::MessagePinned {
            by_id: "U1".into(),
            message_id: "M1".into(),
        };
        assert_eq!(
            show(&pinned, &server()),
            "<@U1> pinned <a https://app.example/server/S1/channel/C1/M1>"
        );

        let unpinned = SystemMessage::MessageUnpinned {
            by_id: "U1".into(),
            message_id: "M1".into(),
        };
        assert_eq!(
            show(&unpinned, &group()),
            "<@U1> unpinned <a https://app.example/channel/C1/M1>"
        );
    }

    #[test]
    fn test_call_states() {
        let started_at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let ongoing = SystemMessage::CallStarted {
            by_id: "U1".into(),
            started_at,
            finished_at: None,
        };
        assert_eq!(show(&ongoing, &group()), "<@U1> started a call");

        let ended = SystemMessage::CallStarted {
            by_id: "U1".into(),
            started_at,
            finished_at: Some(started_at + Duration::seconds(90)),
        };
        assert_eq!(show(&ended, &group()), "<@U1> started a call that lasted <t 90s>");
    }

    #[test]
    fn test_text_is_verbatim() {
        let msg = SystemMessage::Text {
            content: "**not** {markdown}".into(),
        };
        assert_eq!(
            render(&msg, &group(), &Catalog::english(), &Tagged),
            vec!["**not** {markdown}"]
        );
    }

    #[test]
    fn test_unknown_renders_raw_tag() {
        let msg = SystemMessage::Unknown {
            kind: "some_future_type".into(),
        };
        assert_eq!(
            render(&msg, &server(), &Catalog::english(), &Tagged),
            vec!["some_future_type"]
        );
    }

    #[test]
    fn test_translation_may_reorder_placeholders() {
        let catalog = Catalog::from_json(r#"{"user_added": "{by} added {user}"}"#).unwrap();
        let msg = SystemMessage::UserAdded {
            user_id: "U1".into(),
            by_id: "U2".into(),
        };
        assert_eq!(render(&msg, &group(), &catalog, &Tagged).concat(), "<@U2> added <@U1>");
    }

    #[test]
    fn test_unmatched_placeholder_is_literal() {
        let catalog = Catalog::from_json(r#"{"user_joined": "{user} joined {where}"}"#).unwrap();
        let msg = SystemMessage::UserJoined { user_id: "U1".into() };
        assert_eq!(render(&msg, &server(), &catalog, &Tagged).concat(), "<@U1> joined {where}");
    }

    #[test]
    fn test_render_is_deterministic() {
        let msg = SystemMessage::MessagePinned {
            by_id: "U1".into(),
            message_id: "M1".into(),
        };
        let first = render(&msg, &server(), &Catalog::english(), &Tagged);
        let second = render(&msg, &server(), &Catalog::english(), &Tagged);
        assert_eq!(first, second);
    }

    #[test]
    fn test_message_link() {
        assert_eq!(server().message_link("M9"), "https://app.example/server/S1/channel/C1/M9");
        assert_eq!(group().message_link("M9"), "https://app.example/channel/C1/M9");
    }
}
