//! Attachment row: icon, filename, size and download button.

use eframe::egui;

use crate::file_info::FileInfo;
use crate::ui::theme::Theme;

pub fn render_file_info(ui: &mut egui::Ui, info: &FileInfo, theme: &Theme) {
    ui.horizontal(|ui| {
        ui.label(egui::RichText::new(info.kind.icon()).size(24.0));

        ui.vertical(|ui| {
            if let Some(filename) = &info.filename {
                ui.label(egui::RichText::new(filename).size(14.0).color(theme.text_primary));
            }
            if let Some(size) = &info.size_label {
                ui.label(egui::RichText::new(size).small().color(theme.text_muted));
            }
        });

        if let Some((url, filename)) = &info.download {
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.hyperlink_to(egui::RichText::new("⬇").size(18.0), url)
                    .on_hover_text(format!("Download {filename}"));
            });
        }
    });
}
