//! Main update loop and panels

use std::time::{Duration, Instant};

use eframe::egui;

use super::StoatApp;
use crate::ui;
use crate::ui::dialogs::expire_toasts;
use crate::user_summary::UserSummary;

impl eframe::App for StoatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Process backend events
        self.process_events();

        // Keep polling the backend and expiring toasts
        ctx.request_repaint_after(Duration::from_millis(100));
        expire_toasts(&mut self.state.toasts, Instant::now());

        self.render_top_bar(ctx);
        self.render_side_panel(ctx);
        self.render_composer(ctx);
        self.render_feed(ctx);

        self.render_dialogs(ctx);
    }
}

impl StoatApp {
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[2])
                    .inner_margin(egui::Margin::symmetric(12, 6)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(format!("#{}", self.state.channel_name()))
                            .strong()
                            .color(self.theme.text_primary),
                    );
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        let label = if self.settings.theme == "light" { "🌙" } else { "☀" };
                        if ui.button(label).on_hover_text(format!("Theme: {}", self.theme.name)).clicked() {
                            self.toggle_theme(ctx);
                        }
                    });
                });
            });
    }

    fn render_side_panel(&mut self, ctx: &egui::Context) {
        egui::SidePanel::left("account_panel")
            .resizable(false)
            .exact_width(300.0)
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[1])
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                let summary = UserSummary::new(&self.state.user, None, true, true);
                if ui::render_user_summary(ui, &summary, &self.state.user.id, &self.theme) {
                    self.dialogs.open_custom_status(self.state.user.status.as_ref());
                }

                ui.add_space(6.0);
                let status = self
                    .state
                    .user
                    .status
                    .as_ref()
                    .and_then(|s| s.text.as_deref())
                    .unwrap_or("No status");
                ui.label(egui::RichText::new(status).italics().color(self.theme.text_secondary));
                if ui.button("Set status").clicked() {
                    self.dialogs.open_custom_status(self.state.user.status.as_ref());
                }

                ui.add_space(12.0);
                ui.separator();
                ui.label(egui::RichText::new("WEBHOOKS").small().color(self.theme.text_muted));

                let mut opened = None;
                for webhook in &self.state.webhooks {
                    ui.horizontal(|ui| {
                        ui::render_avatar(ui, &webhook.id, 24.0);
                        if ui.selectable_label(false, &webhook.name).clicked() {
                            opened = Some(webhook.clone());
                        }
                    });
                }
                if self.state.webhooks.is_empty() {
                    ui.label(egui::RichText::new("No webhooks").color(self.theme.text_muted));
                }
                if let Some(webhook) = opened {
                    self.dialogs.open_webhook_editor(webhook, &self.settings.api_url);
                }

                ui.add_space(12.0);
                ui.separator();
                ui.label(egui::RichText::new("ATTACHMENTS").small().color(self.theme.text_muted));
                for info in &self.state.attachments {
                    ui::render_file_info(ui, info, &self.theme);
                    ui.add_space(4.0);
                }
            });
    }

    fn render_composer(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("composer")
            .frame(
                egui::Frame::new()
                    .fill(self.theme.surface[2])
                    .inner_margin(egui::Margin::symmetric(12, 8)),
            )
            .show(ctx, |ui| {
                if let Some(last) = self.state.sent.last() {
                    ui.label(
                        egui::RichText::new(format!("Last sent: {last}"))
                            .small()
                            .color(self.theme.text_muted),
                    );
                }

                let hint = format!("Message #{}", self.state.channel_name());
                ui.horizontal(|ui| {
                    let picked = ui::render_media_picker(
                        ctx,
                        ui,
                        &mut self.media_picker,
                        &self.state.gifs,
                        &self.theme,
                    );
                    if let Some(action) = picked {
                        self.state.apply_picker(action);
                    }

                    let response = ui.add(
                        egui::TextEdit::singleline(&mut self.state.composer)
                            .hint_text(hint)
                            .desired_width(f32::INFINITY),
                    );
                    if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
                        self.state.send_composer();
                        response.request_focus();
                    }
                });
            });
    }

    fn render_feed(&mut self, ctx: &egui::Context) {
        egui::CentralPanel::default()
            .frame(egui::Frame::new().fill(self.theme.surface[0]))
            .show(ctx, |ui| {
                let view = ui::SystemMessageView {
                    context: &self.state.context,
                    catalog: &self.catalog,
                    directory: &self.state.directory,
                    datetime_format: &self.settings.datetime_format,
                };
                ui::render_system_feed(ui, &view, &self.state.feed, &self.theme);
            });
    }
}
