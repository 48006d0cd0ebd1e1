//! Modal dialogs and windows - self-contained dialog components.
//!
//! Each dialog owns its editing state and returns `DialogAction`s
//! instead of mutating external state directly. Dialogs are stored as
//! `Option<Dialog>` in the app: `None` is closed, `Some` is open.

mod actions;
mod custom_status;
mod status_toasts;
mod webhook_editor;

pub use actions::DialogAction;
pub use custom_status::CustomStatusDialog;
pub use status_toasts::{expire_toasts, render_status_toasts, Toast, TOAST_LIFETIME};
pub use webhook_editor::WebhookEditorDialog;
