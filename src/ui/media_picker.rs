//! Composer GIF/emoji buttons and the floating picker they open.

use eframe::egui;

use crate::media_picker::{
    place_top_end, search_emoji, GifResult, MediaPicker, PickerAction, PickerTab,
};
use crate::ui::theme::Theme;

const PICKER_SIZE: egui::Vec2 = egui::vec2(320.0, 260.0);

/// Render the two trigger buttons and, when open, the picker above them.
pub fn render_media_picker(
    ctx: &egui::Context,
    ui: &mut egui::Ui,
    picker: &mut MediaPicker,
    gifs: &[GifResult],
    theme: &Theme,
) -> Option<PickerAction> {
    let triggers = ui.horizontal(|ui| {
        if ui.button("GIF").clicked() {
            picker.toggle(PickerTab::Gif);
        }
        if ui.button("🙂").clicked() {
            picker.toggle(PickerTab::Emoji);
        }
    });

    let tab = picker.shown()?;
    let pos = place_top_end(triggers.response.rect, PICKER_SIZE, ctx.screen_rect());
    let mut action = None;

    egui::Area::new(egui::Id::new("media_picker"))
        .order(egui::Order::Foreground)
        .fixed_pos(pos)
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface[5])
                .corner_radius(8.0)
                .inner_margin(egui::Margin::same(8))
                .show(ui, |ui| {
                    ui.set_min_size(PICKER_SIZE - egui::vec2(16.0, 16.0));

                    ui.horizontal(|ui| {
                        for (label, choice) in [("GIFs", PickerTab::Gif), ("Emoji", PickerTab::Emoji)] {
                            if ui.selectable_label(tab == choice, label).clicked() {
                                picker.select(choice);
                            }
                        }
                    });
                    ui.separator();

                    let tab = picker.shown().unwrap_or(tab);
                    action = match tab {
                        PickerTab::Emoji => render_emoji_tab(ui, picker),
                        PickerTab::Gif => render_gif_tab(ui, picker, gifs, theme),
                    };
                });
        });

    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        picker.close();
    }

    action
}

fn render_emoji_tab(ui: &mut egui::Ui, picker: &mut MediaPicker) -> Option<PickerAction> {
    ui.add(egui::TextEdit::singleline(&mut picker.emoji_query).hint_text("Search emoji"));
    ui.add_space(4.0);

    let mut chosen = None;
    ui.horizontal_wrapped(|ui| {
        for (code, emoji) in search_emoji(&picker.emoji_query) {
            let button = egui::Button::new(egui::RichText::new(emoji).size(22.0)).frame(false);
            if ui.add(button).on_hover_text(format!(":{code}:")).clicked() {
                chosen = Some(emoji);
            }
        }
    });

    chosen.map(|emoji| picker.pick_emoji(emoji))
}

fn render_gif_tab(
    ui: &mut egui::Ui,
    picker: &mut MediaPicker,
    gifs: &[GifResult],
    theme: &Theme,
) -> Option<PickerAction> {
    if gifs.is_empty() {
        ui.label(egui::RichText::new("No GIFs to show").color(theme.text_muted));
        return None;
    }

    let mut chosen = None;
    egui::ScrollArea::vertical().show(ui, |ui| {
        for gif in gifs {
            if ui.button(&gif.title).on_hover_text(&gif.url).clicked() {
                chosen = Some(gif);
            }
        }
    });

    chosen.map(|gif| picker.pick_gif(gif))
}
