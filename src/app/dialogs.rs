//! Dialog rendering orchestration

use eframe::egui;

use super::StoatApp;
use crate::dialog_manager::backend_action;
use crate::ui;
use crate::ui::dialogs::DialogAction;

impl StoatApp {
    /// Render all dialogs and handle their actions
    pub(super) fn render_dialogs(&mut self, ctx: &egui::Context) {
        // Floating status toasts (top-right corner)
        ui::dialogs::render_status_toasts(ctx, &self.state.toasts, &self.theme);

        for action in self.dialogs.render(ctx) {
            self.handle_dialog_action(action);
        }
    }

    /// Forward dialog actions to the backend
    fn handle_dialog_action(&mut self, action: DialogAction) {
        if let DialogAction::Notify(text) = &action {
            self.state.push_info(text.clone());
        }

        if let Some(request) = backend_action(action) {
            let origin = request.origin();
            if self.action_tx.send(request).is_err() {
                tracing::error!("backend is not running");
                self.dialogs.request_failed(&origin);
                self.state.push_error("Backend is not running");
            }
        }
    }
}
