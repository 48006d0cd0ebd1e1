//! Color themes and global egui styling.
//!
//! Surfaces go from `surface[0]` (app background) up to `surface[6]`
//! (dialogs and popovers). Semantic colors cover accent, success, error
//! and info; text has primary/secondary/muted levels.

use eframe::egui::{self, Color32, FontFamily, FontId, TextStyle};
use std::collections::BTreeMap;

#[derive(Clone, Debug)]
pub struct Theme {
    pub name: String,
    pub surface: [Color32; 7],
    pub accent: Color32,
    /// Fill of cards without a banner (primary container)
    pub primary_container: Color32,
    pub on_primary_container: Color32,
    pub success: Color32,
    pub error: Color32,
    pub info: Color32,
    pub text_primary: Color32,
    pub text_secondary: Color32,
    pub text_muted: Color32,
}

impl Theme {
    pub fn dark() -> Self {
        Self {
            name: "Dark".to_string(),
            surface: [
                Color32::from_rgb(10, 10, 15),    // surface_0: App background
                Color32::from_rgb(19, 19, 26),    // surface_1: Sidebar background
                Color32::from_rgb(28, 28, 38),    // surface_2: Message background
                Color32::from_rgb(37, 37, 50),    // surface_3: Hover state
                Color32::from_rgb(46, 46, 62),    // surface_4: Active selection
                Color32::from_rgb(56, 56, 74),    // surface_5: Elevated panels
                Color32::from_rgb(66, 66, 86),    // surface_6: Modals/dialogs
            ],
            accent: Color32::from_rgb(88, 101, 242),
            primary_container: Color32::from_rgb(52, 60, 140),
            on_primary_container: Color32::from_rgb(222, 224, 255),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::WHITE,
            text_secondary: Color32::from_rgb(185, 187, 190),
            text_muted: Color32::from_rgb(114, 118, 125),
        }
    }

    pub fn light() -> Self {
        Self {
            name: "Light".to_string(),
            surface: [
                Color32::from_rgb(255, 255, 255),
                Color32::from_rgb(246, 246, 247),
                Color32::from_rgb(242, 243, 245),
                Color32::from_rgb(227, 229, 232),
                Color32::from_rgb(212, 215, 220),
                Color32::from_rgb(196, 201, 208),
                Color32::from_rgb(181, 187, 196),
            ],
            accent: Color32::from_rgb(88, 101, 242),
            primary_container: Color32::from_rgb(222, 224, 255),
            on_primary_container: Color32::from_rgb(20, 24, 80),
            success: Color32::from_rgb(67, 181, 129),
            error: Color32::from_rgb(240, 71, 71),
            info: Color32::from_rgb(0, 175, 244),
            text_primary: Color32::from_rgb(6, 6, 7),
            text_secondary: Color32::from_rgb(79, 86, 96),
            text_muted: Color32::from_rgb(116, 127, 141),
        }
    }

    /// Theme by settings name; anything but "light" is dark.
    pub fn named(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            _ => Self::dark(),
        }
    }

    /// `surface[1]` at the given opacity, drawn over banner images.
    pub fn banner_overlay(&self, opacity: f32) -> Color32 {
        let [r, g, b, _] = self.surface[1].to_array();
        Color32::from_rgba_unmultiplied(r, g, b, (opacity.clamp(0.0, 1.0) * 255.0).round() as u8)
    }
}

const NAME_COLORS: [Color32; 16] = [
    Color32::from_rgb(231, 76, 60),   // Vibrant red
    Color32::from_rgb(46, 204, 113),  // Emerald green
    Color32::from_rgb(52, 152, 219),  // Bright blue
    Color32::from_rgb(155, 89, 182),  // Amethyst purple
    Color32::from_rgb(241, 196, 15),  // Sunflower yellow
    Color32::from_rgb(230, 126, 34),  // Carrot orange
    Color32::from_rgb(26, 188, 156),  // Turquoise
    Color32::from_rgb(236, 100, 166), // Pink
    Color32::from_rgb(142, 68, 173),  // Wisteria
    Color32::from_rgb(41, 128, 185),  // Belize blue
    Color32::from_rgb(39, 174, 96),   // Nephritis
    Color32::from_rgb(243, 156, 18),  // Orange
    Color32::from_rgb(192, 57, 43),   // Pomegranate
    Color32::from_rgb(22, 160, 133),  // Green sea
    Color32::from_rgb(211, 84, 0),    // Pumpkin
    Color32::from_rgb(102, 178, 255), // Light blue
];

/// FNV-1a hash, shared by name colors and identicons.
pub(crate) fn fnv1a(input: &str) -> u64 {
    let mut hash: u64 = 1469598103934665603u64;
    for b in input.as_bytes() {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(1099511628211u64);
    }
    hash
}

/// Stable color for a user id; the same id always gets the same color.
pub fn name_color(user_id: &str) -> Color32 {
    let idx = (fnv1a(user_id) as usize) % NAME_COLORS.len();
    NAME_COLORS[idx]
}

/// Named text style for system message rows.
pub fn system_message_style() -> TextStyle {
    TextStyle::Name("system_message".into())
}

/// Named text style for the profile card's display name.
pub fn display_name_style() -> TextStyle {
    TextStyle::Name("display_name".into())
}

/// Named text style for `username#discriminator`.
pub fn user_tag_style() -> TextStyle {
    TextStyle::Name("user_tag".into())
}

pub fn configure_text_styles() -> BTreeMap<TextStyle, FontId> {
    use FontFamily::{Monospace, Proportional};

    [
        (TextStyle::Small, FontId::new(10.0, Proportional)),
        (TextStyle::Body, FontId::new(14.0, Proportional)),
        (TextStyle::Button, FontId::new(13.0, Proportional)),
        (TextStyle::Heading, FontId::new(16.0, Proportional)),
        (TextStyle::Monospace, FontId::new(13.0, Monospace)),
        (system_message_style(), FontId::new(13.0, Proportional)),
        (display_name_style(), FontId::new(18.0, Proportional)),
        (user_tag_style(), FontId::new(14.0, Proportional)),
    ]
    .into()
}

/// Apply spacing, typography and widget styling to the egui context.
pub fn apply_app_style(ctx: &egui::Context, theme: &Theme) {
    let mut style = (*ctx.style()).clone();

    style.text_styles = configure_text_styles();

    // 8px grid
    style.spacing.item_spacing = egui::vec2(8.0, 6.0);
    style.spacing.window_margin = egui::Margin::same(12);
    style.spacing.button_padding = egui::vec2(10.0, 5.0);

    for widget in [
        &mut style.visuals.widgets.inactive,
        &mut style.visuals.widgets.hovered,
        &mut style.visuals.widgets.active,
    ] {
        widget.bg_stroke = egui::Stroke::NONE;
        widget.corner_radius = egui::CornerRadius::same(6);
    }
    style.visuals.widgets.inactive.weak_bg_fill = theme.surface[4];
    style.visuals.widgets.hovered.weak_bg_fill = theme.surface[5];
    style.visuals.widgets.active.weak_bg_fill = theme.accent;

    style.visuals.hyperlink_color = theme.info;
    style.visuals.selection.bg_fill = Color32::from_rgba_unmultiplied(88, 101, 242, 100);

    ctx.set_style(style);
}
