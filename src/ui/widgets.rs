//! Avatar placeholder rendering.

use eframe::egui::{self, Color32};

use super::theme::{fnv1a, name_color};

/// Draw a circular identicon for `seed` (a user or webhook id).
///
/// Used wherever an avatar image is not loaded: the pattern is a 5x5
/// mirrored grid derived from the seed hash on a name-colored disc.
pub fn render_avatar(ui: &mut egui::Ui, seed: &str, size: f32) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(egui::vec2(size, size), egui::Sense::hover());

    let painter = ui.painter();
    painter.circle_filled(rect.center(), size / 2.0, name_color(seed));

    let pattern = identicon_pattern(seed);
    let fg_color = Color32::from_white_alpha(200);
    let cell_size = size / 6.0;
    let offset = cell_size * 0.5;

    for row in 0..5 {
        for col in 0..5 {
            // mirror left to right
            let pattern_col = if col < 3 { col } else { 4 - col };
            if pattern & (1 << (row * 3 + pattern_col)) == 0 {
                continue;
            }

            let cell_x = rect.left() + offset + (col as f32 * cell_size);
            let cell_y = rect.top() + offset + (row as f32 * cell_size);
            let center = egui::pos2(cell_x + cell_size / 2.0, cell_y + cell_size / 2.0);

            // clip to the circle
            if (center - rect.center()).length() < size / 2.0 - cell_size * 0.3 {
                painter.rect_filled(
                    egui::Rect::from_min_size(
                        egui::pos2(cell_x, cell_y),
                        egui::vec2(cell_size * 0.85, cell_size * 0.85),
                    ),
                    cell_size * 0.2,
                    fg_color,
                );
            }
        }
    }

    response
}

/// 15-bit pattern (3 columns x 5 rows, mirrored) with the center column seeded.
pub fn identicon_pattern(seed: &str) -> u16 {
    (fnv1a(seed) as u16 & 0x7FFF) | 0x0084
}
