//! Stoat Views library.
//!
//! Chat client view components: system message rendering, webhook and
//! status editing, attachments, profile card and the media picker.

pub mod api;
pub mod app;
pub mod backend;
pub mod config;
pub mod dialog_manager;
pub mod error;
pub mod events;
pub mod file_info;
pub mod form;
pub mod i18n;
pub mod media_picker;
pub mod models;
pub mod node;
pub mod protocol;
pub mod render;
pub mod state;
pub mod system_message;
pub mod time;
pub mod ui;
pub mod user_summary;
pub mod webhook;

#[cfg(test)]
mod backend_tests;
