//! Backend loop tests against the in-memory API

use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use chrono::{TimeZone, Utc};
use crossbeam_channel::{unbounded, Receiver, Sender};

use crate::api::{DataEditUser, DataEditWebhook, FieldsWebhook, MemoryApi, PendingFile};
use crate::models::{User, UserStatus, Webhook};
use crate::protocol::{BackendAction, GuiEvent, RequestOrigin};

const TIMEOUT: Duration = Duration::from_secs(5);

fn user() -> User {
    User {
        id: "U1".into(),
        username: "stoat".into(),
        discriminator: "0001".into(),
        display_name: None,
        avatar_url: None,
        animated_avatar_url: None,
        status: None,
        created_at: Utc.with_ymd_and_hms(2021, 6, 22, 9, 5, 0).unwrap(),
    }
}

fn webhook() -> Webhook {
    Webhook {
        id: "W1".into(),
        channel_id: "C1".into(),
        name: "Builds".into(),
        avatar_url: Some("https://media.example/avatars/old".into()),
        token: Some("tok".into()),
    }
}

fn spawn(
    api: Arc<MemoryApi>,
) -> (Sender<BackendAction>, Receiver<GuiEvent>, JoinHandle<()>) {
    let (action_tx, action_rx) = unbounded::<BackendAction>();
    let (event_tx, event_rx) = unbounded::<GuiEvent>();
    let handle = std::thread::spawn(move || {
        crate::backend::run_backend(api, action_rx, event_tx);
    });
    (action_tx, event_rx, handle)
}

fn api() -> Arc<MemoryApi> {
    Arc::new(MemoryApi::new("https://media.example", user(), vec![webhook()]))
}

#[test]
fn test_shutdown_stops_loop() {
    let (action_tx, event_rx, handle) = spawn(api());

    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().unwrap();

    // no event for a shutdown
    assert!(event_rx.try_recv().is_err());
}

#[test]
fn test_dropped_sender_stops_loop() {
    let (action_tx, _event_rx, handle) = spawn(api());
    drop(action_tx);
    handle.join().unwrap();
}

#[test]
fn test_edit_webhook_uploads_avatar_first() {
    let api = api();
    let (action_tx, event_rx, handle) = spawn(api.clone());

    action_tx
        .send(BackendAction::EditWebhook {
            webhook_id: "W1".into(),
            changes: DataEditWebhook {
                name: Some("CI".into()),
                ..Default::default()
            },
            avatar: Some(PendingFile {
                filename: "icon.png".into(),
                bytes: vec![0x89, 0x50],
            }),
        })
        .unwrap();

    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::WebhookUpdated(webhook) => {
            assert_eq!(webhook.name, "CI");
            let avatar = webhook.avatar_url.unwrap();
            assert!(avatar.starts_with("https://media.example/"));
            assert_ne!(avatar, "https://media.example/avatars/old");
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(api.webhook("W1").unwrap().name, "CI");

    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().unwrap();
}

#[test]
fn test_remove_avatar() {
    let api = api();
    let (action_tx, event_rx, handle) = spawn(api.clone());

    action_tx
        .send(BackendAction::EditWebhook {
            webhook_id: "W1".into(),
            changes: DataEditWebhook {
                remove: vec![FieldsWebhook::Avatar],
                ..Default::default()
            },
            avatar: None,
        })
        .unwrap();

    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::WebhookUpdated(webhook) => assert_eq!(webhook.avatar_url, None),
        other => panic!("unexpected event {:?}", other),
    }

    drop(action_tx);
    handle.join().unwrap();
}

#[test]
fn test_delete_webhook() {
    let api = api();
    let (action_tx, event_rx, handle) = spawn(api.clone());

    action_tx
        .send(BackendAction::DeleteWebhook {
            webhook_id: "W1".into(),
        })
        .unwrap();

    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::WebhookDeleted { webhook_id } => assert_eq!(webhook_id, "W1"),
        other => panic!("unexpected event {:?}", other),
    }
    assert!(api.webhook("W1").is_none());

    // deleting again reports an error and keeps the loop alive
    action_tx
        .send(BackendAction::DeleteWebhook {
            webhook_id: "W1".into(),
        })
        .unwrap();
    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::Error { origin, .. } => {
            assert_eq!(origin, RequestOrigin::Webhook("W1".into()));
        }
        other => panic!("unexpected event {:?}", other),
    }

    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().unwrap();
}

#[test]
fn test_failure_is_reported() {
    let api = api();
    api.fail_next("service unavailable");
    let (action_tx, event_rx, handle) = spawn(api.clone());

    action_tx
        .send(BackendAction::EditUser(DataEditUser {
            status: Some(UserStatus {
                text: Some("away".into()),
                presence: None,
            }),
        }))
        .unwrap();

    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::Error { origin, message } => {
            assert_eq!(origin, RequestOrigin::Status);
            assert!(message.contains("service unavailable"));
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert_eq!(api.user().status, None);

    // the next call goes through
    action_tx
        .send(BackendAction::EditUser(DataEditUser {
            status: Some(UserStatus {
                text: Some("away".into()),
                presence: None,
            }),
        }))
        .unwrap();
    match event_rx.recv_timeout(TIMEOUT).unwrap() {
        GuiEvent::UserUpdated(user) => {
            assert_eq!(user.status.unwrap().text.as_deref(), Some("away"));
        }
        other => panic!("unexpected event {:?}", other),
    }

    action_tx.send(BackendAction::Shutdown).unwrap();
    handle.join().unwrap();
}
