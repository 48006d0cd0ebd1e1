//! Core application state, separated from UI logic.
//!
//! `ViewState` holds the data the components display: the signed-in user,
//! the channel's webhooks, the system message feed and attachments. UI
//! code receives it as a parameter rather than owning it.

use chrono::{DateTime, Duration, Utc};
use serde_json::json;

use crate::file_info::FileInfo;
use crate::media_picker::{GifResult, PickerAction};
use crate::models::{Embed, EmbedKind, File, FileMetadata, Presence, User, UserStatus, Webhook};
use crate::node::{Directory, NameDirectory};
use crate::render::RenderContext;
use crate::system_message::SystemMessage;
use crate::ui::dialogs::Toast;

const SAMPLE_CHANNEL: &str = "01HCHANNEL0000000000000DEV";

pub struct ViewState {
    /// The signed-in user.
    pub user: User,

    /// Webhooks of the current channel, in display order.
    pub webhooks: Vec<Webhook>,

    /// Display names of users and channels.
    pub directory: NameDirectory,

    /// Where the feed is shown.
    pub context: RenderContext,

    /// System messages of the current channel.
    pub feed: Vec<SystemMessage>,

    /// Attachments shown under the feed.
    pub attachments: Vec<FileInfo>,

    /// Results offered by the GIF tab.
    pub gifs: Vec<GifResult>,

    /// Text in the composer.
    pub composer: String,

    /// Messages sent from the composer.
    pub sent: Vec<String>,

    /// Status toast messages (auto-expire).
    pub toasts: Vec<Toast>,
}

impl ViewState {
    /// A sample session against the in-memory API, anchored at `now`.
    pub fn sample(origin: &str, now: DateTime<Utc>) -> Self {
        let user = User {
            id: "01HUSER0000000000000000ME".into(),
            username: "stoat".into(),
            discriminator: "0001".into(),
            display_name: Some("Stoat".into()),
            avatar_url: None,
            animated_avatar_url: None,
            status: Some(UserStatus {
                text: Some("Reviewing pull requests".into()),
                presence: Some(Presence::Online),
            }),
            created_at: now - Duration::days(900),
        };

        let directory = NameDirectory::new()
            .with_user(&user.id, user.display_name())
            .with_user("01HUSER00000000000000ALICE", "alice")
            .with_user("01HUSER000000000000000BOB", "bob")
            .with_channel(SAMPLE_CHANNEL, "dev-chat");

        let webhooks = vec![
            Webhook {
                id: "01HWEBHOOK00000000000BUILD".into(),
                channel_id: SAMPLE_CHANNEL.into(),
                name: "Build Bot".into(),
                avatar_url: None,
                token: Some("s3cr3t-token".into()),
            },
            Webhook {
                id: "01HWEBHOOK0000000000ALERTS".into(),
                channel_id: SAMPLE_CHANNEL.into(),
                name: "Alerts".into(),
                avatar_url: None,
                token: None,
            },
        ];

        let started = now - Duration::minutes(42);
        let raw = json!([
            { "type": "user_joined", "userId": "01HUSER00000000000000ALICE" },
            { "type": "user_added", "userId": "01HUSER000000000000000BOB", "byId": "01HUSER00000000000000ALICE" },
            { "type": "channel_renamed", "byId": "01HUSER0000000000000000ME", "name": "dev-chat" },
            { "type": "channel_description_changed", "byId": "01HUSER00000000000000ALICE" },
            { "type": "message_pinned", "byId": "01HUSER000000000000000BOB", "messageId": "01HMESSAGE00000000000PINNED" },
            {
                "type": "call_started",
                "byId": "01HUSER00000000000000ALICE",
                "startedAt": started.to_rfc3339(),
                "finishedAt": (started + Duration::seconds(90)).to_rfc3339()
            },
            { "type": "call_started", "byId": "01HUSER000000000000000BOB", "startedAt": (now - Duration::minutes(3)).to_rfc3339() },
            { "type": "user_left", "userId": "01HUSER000000000000000BOB" },
            { "type": "text", "content": "Messages in this channel are now archived weekly." },
            { "type": "some_future_type" }
        ]);
        let feed = match serde_json::from_value::<Vec<SystemMessage>>(raw) {
            Ok(feed) => feed,
            Err(e) => {
                tracing::warn!(error = %e, "sample feed did not parse");
                Vec::new()
            }
        };

        let report = File {
            id: "01HFILE0000000000000REPORT".into(),
            filename: "quarterly-report.pdf".into(),
            size: Some(1_572_864),
            metadata: FileMetadata::File,
            original_url: "https://cdn.stoatusercontent.com/attachments/report".into(),
        };
        let clip = File {
            id: "01HFILE000000000000000CLIP".into(),
            filename: "standup.mp4".into(),
            size: Some(48_234_496),
            metadata: FileMetadata::Video {
                width: 1280,
                height: 720,
            },
            original_url: "https://cdn.stoatusercontent.com/attachments/clip".into(),
        };
        let website = Embed {
            kind: EmbedKind::Website,
            url: Some("https://stoat.chat".into()),
        };

        Self {
            user,
            webhooks,
            directory,
            context: RenderContext {
                is_server: true,
                server_id: Some("01HSERVER00000000000000DEV".into()),
                channel_id: SAMPLE_CHANNEL.into(),
                origin: origin.trim_end_matches('/').to_string(),
            },
            feed,
            attachments: vec![
                FileInfo::new(Some(&report), None),
                FileInfo::new(Some(&clip), None),
                FileInfo::new(None, Some(&website)),
            ],
            gifs: vec![
                GifResult {
                    title: "Stoat wave".into(),
                    url: "https://media.example/gifs/stoat-wave.gif".into(),
                },
                GifResult {
                    title: "Ship it".into(),
                    url: "https://media.example/gifs/ship-it.gif".into(),
                },
            ],
            composer: String::new(),
            sent: Vec::new(),
            toasts: Vec::new(),
        }
    }

    /// Name of the channel being viewed.
    pub fn channel_name(&self) -> String {
        self.directory
            .channel_name(&self.context.channel_id)
            .unwrap_or_else(|| "unknown-channel".to_string())
    }

    pub fn webhook(&self, id: &str) -> Option<&Webhook> {
        self.webhooks.iter().find(|w| w.id == id)
    }

    /// Replace a webhook in place after a successful save.
    pub fn update_webhook(&mut self, webhook: Webhook) {
        if let Some(existing) = self.webhooks.iter_mut().find(|w| w.id == webhook.id) {
            *existing = webhook;
        }
    }

    pub fn remove_webhook(&mut self, id: &str) {
        self.webhooks.retain(|w| w.id != id);
    }

    /// Apply a picker selection to the composer.
    pub fn apply_picker(&mut self, action: PickerAction) {
        match action {
            PickerAction::InsertText(text) => self.composer.push_str(&text),
            PickerAction::SendMessage(content) => self.sent.push(content),
        }
    }

    /// Send the composer contents, if any.
    pub fn send_composer(&mut self) {
        let content = self.composer.trim();
        if !content.is_empty() {
            self.sent.push(content.to_string());
        }
        self.composer.clear();
    }

    pub fn push_info(&mut self, text: impl Into<String>) {
        self.toasts.push(Toast::info(text));
    }

    pub fn push_error(&mut self, text: impl Into<String>) {
        self.toasts.push(Toast::error(text));
    }
}
