//! Core StoatApp struct definition and initialization

use std::sync::Arc;
use std::thread;

use chrono::Utc;
use crossbeam_channel::{unbounded, Receiver, Sender};
use eframe::egui;

use crate::api::MemoryApi;
use crate::backend::run_backend;
use crate::config::{load_settings, save_settings, Settings};
use crate::dialog_manager::DialogManager;
use crate::i18n::Catalog;
use crate::media_picker::MediaPicker;
use crate::protocol::{BackendAction, GuiEvent};
use crate::state::ViewState;
use crate::ui::theme::{apply_app_style, Theme};

pub struct StoatApp {
    // Persisted settings
    pub settings: Settings,

    // Core state (user, webhooks, feed)
    pub state: ViewState,

    // Channels for backend communication
    pub action_tx: Sender<BackendAction>,
    pub event_rx: Receiver<GuiEvent>,

    pub theme: Theme,
    pub catalog: Catalog,

    // Dialogs - managed centrally by DialogManager
    pub dialogs: DialogManager,

    pub media_picker: MediaPicker,
}

impl StoatApp {
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let settings = load_settings();

        let state = ViewState::sample(&settings.origin, Utc::now());

        // Create channels for UI <-> Backend
        let (action_tx, action_rx) = unbounded::<BackendAction>();
        let (event_tx, event_rx) = unbounded::<GuiEvent>();

        let api = Arc::new(MemoryApi::new(
            &settings.media_url,
            state.user.clone(),
            state.webhooks.clone(),
        ));

        // Spawn the backend thread
        thread::spawn(move || {
            run_backend(api, action_rx, event_tx);
        });

        let mut app = Self {
            theme: Theme::named(&settings.theme),
            catalog: Catalog::english(),
            settings,
            state,
            action_tx,
            event_rx,
            dialogs: DialogManager::new(),
            media_picker: MediaPicker::new(),
        };

        match app.settings.catalog() {
            Ok(catalog) => {
                tracing::info!(overrides = catalog.override_count(), "loaded templates");
                app.catalog = catalog;
            }
            Err(e) => {
                tracing::warn!(error = %e, "falling back to English templates");
                app.state.push_error(format!("Could not load locale file: {e}"));
            }
        }

        app.apply_theme(&cc.egui_ctx);
        app
    }

    pub(super) fn apply_theme(&self, ctx: &egui::Context) {
        ctx.set_visuals(match self.settings.theme.as_str() {
            "light" => egui::Visuals::light(),
            _ => egui::Visuals::dark(),
        });
        apply_app_style(ctx, &self.theme);
    }

    /// Switch between the dark and light theme and persist the choice.
    pub(super) fn toggle_theme(&mut self, ctx: &egui::Context) {
        self.settings.theme = match self.settings.theme.as_str() {
            "light" => "dark".to_string(),
            _ => "light".to_string(),
        };
        self.theme = Theme::named(&self.settings.theme);
        self.apply_theme(ctx);

        if let Err(e) = save_settings(&self.settings) {
            tracing::warn!(error = %e, "failed to save settings");
            self.state.push_error(format!("Failed to save settings: {e}"));
        }
    }
}

impl Drop for StoatApp {
    fn drop(&mut self) {
        let _ = self.action_tx.send(BackendAction::Shutdown);
    }
}
