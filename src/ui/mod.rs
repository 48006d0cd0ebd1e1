//! egui rendering for the chat components.
//!
//! - `messages`: system message rows and feed
//! - `file_info`: attachment rows
//! - `user_summary`: profile card
//! - `media_picker`: GIF/emoji picker
//! - `dialogs`: custom status and webhook windows, status toasts
//! - `theme`: colors and global styling

pub mod dialogs;
pub mod file_info;
pub mod media_picker;
pub mod messages;
pub mod theme;
pub mod user_summary;
pub mod widgets;

pub use dialogs::*;
pub use file_info::render_file_info;
pub use media_picker::render_media_picker;
pub use messages::{render_nodes, render_system_feed, render_system_message, SystemMessageView};
pub use theme::Theme;
pub use user_summary::render_user_summary;
pub use widgets::render_avatar;
