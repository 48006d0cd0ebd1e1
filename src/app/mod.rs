//! Application module structure for StoatApp
//!
//! - `core`: StoatApp struct and initialization
//! - `events`: Event processing from the backend
//! - `update`: Main update loop and panels
//! - `dialogs`: Dialog rendering orchestration

pub mod core;
pub mod dialogs;
pub mod events;
pub mod update;

pub use core::StoatApp;
