//! Status toast notifications - floating messages in top-right corner.

use std::time::{Duration, Instant};

use eframe::egui;

use crate::ui::theme::Theme;

/// How long a toast stays on screen.
pub const TOAST_LIFETIME: Duration = Duration::from_secs(4);

/// A transient notification; errors render in red.
#[derive(Debug, Clone)]
pub struct Toast {
    pub text: String,
    pub is_error: bool,
    pub created: Instant,
}

impl Toast {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
            created: Instant::now(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: true,
            created: Instant::now(),
        }
    }
}

/// Drop toasts older than [`TOAST_LIFETIME`].
pub fn expire_toasts(toasts: &mut Vec<Toast>, now: Instant) {
    toasts.retain(|t| now.saturating_duration_since(t.created) < TOAST_LIFETIME);
}

fn toast_color(toast: &Toast, theme: &Theme) -> egui::Color32 {
    if toast.is_error {
        theme.error
    } else {
        theme.success
    }
}

/// Render floating status toasts (top-right corner).
pub fn render_status_toasts(ctx: &egui::Context, toasts: &[Toast], theme: &Theme) {
    if toasts.is_empty() {
        return;
    }

    egui::Area::new(egui::Id::new("status_toast_area"))
        .anchor(egui::Align2::RIGHT_TOP, [-10.0, 50.0])
        .show(ctx, |ui| {
            egui::Frame::new()
                .fill(theme.surface[6])
                .corner_radius(6.0)
                .inner_margin(egui::Margin::symmetric(12, 8))
                .show(ui, |ui| {
                    for toast in toasts {
                        ui.label(egui::RichText::new(&toast.text).color(toast_color(toast, theme)));
                    }
                });
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expire_toasts() {
        let mut toasts = vec![Toast::info("saved"), Toast::error("failed")];
        expire_toasts(&mut toasts, Instant::now());
        assert_eq!(toasts.len(), 2);

        expire_toasts(&mut toasts, Instant::now() + TOAST_LIFETIME);
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_toast_colors_follow_theme() {
        let theme = Theme::light();
        assert_eq!(toast_color(&Toast::error("failed"), &theme), theme.error);
        assert_eq!(toast_color(&Toast::info("saved"), &theme), theme.success);
    }
}
