//! Profile summary card.

use eframe::egui;

use crate::user_summary::{Banner, UserSummary};
use crate::ui::theme::{self, Theme};
use crate::ui::widgets::render_avatar;

/// Render the card. Returns `true` when the edit button was pressed.
///
/// Images are not fetched here. A card with a banner is drawn with the
/// overlay color the image would sit under, and the identicon stands in
/// for the avatar with its URL on hover.
pub fn render_user_summary(
    ui: &mut egui::Ui,
    summary: &UserSummary,
    avatar_seed: &str,
    theme: &Theme,
) -> bool {
    let mut edit_clicked = false;

    let (fill, text_color) = match &summary.banner {
        Banner::Image { overlay, .. } => (theme.banner_overlay(*overlay), egui::Color32::BLACK),
        Banner::Fill => (theme.primary_container, theme.on_primary_container),
    };

    let frame = egui::Frame::new()
        .fill(fill)
        .corner_radius(8.0)
        .inner_margin(egui::Margin::same(16));

    let response = frame.show(ui, |ui| {
        ui.horizontal(|ui| {
            let avatar = render_avatar(ui, avatar_seed, 58.0);
            if let Some(url) = &summary.avatar {
                avatar.on_hover_text(url);
            }
            ui.add_space(8.0);

            ui.vertical(|ui| {
                ui.label(
                    egui::RichText::new(&summary.display_name)
                        .text_style(theme::display_name_style())
                        .strong()
                        .color(text_color),
                );
                ui.label(
                    egui::RichText::new(&summary.tag)
                        .text_style(theme::user_tag_style())
                        .color(text_color),
                );
            });

            if summary.editable {
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✏").on_hover_text("Edit profile").clicked() {
                        edit_clicked = true;
                    }
                });
            }
        });

        if let Some(created) = &summary.created_badge {
            ui.add_space(8.0);
            ui.horizontal(|ui| {
                // line badges up with the name column
                ui.add_space(58.0 + 16.0);
                egui::Frame::new()
                    .fill(theme.accent)
                    .corner_radius(6.0)
                    .inner_margin(egui::Margin::same(6))
                    .show(ui, |ui| {
                        ui.label(egui::RichText::new("🎂").size(14.0))
                            .on_hover_text(created);
                    });
            });
        }
    });

    if let Banner::Image { url, .. } = &summary.banner {
        response.response.on_hover_text(url);
    }

    edit_clicked
}
