//! Profile summary card shown at the top of account settings.

use crate::models::User;
use crate::time::account_created;

/// Opacity of the surface overlay drawn over a banner image.
pub const BANNER_OVERLAY: f32 = 0.7;

/// Background treatment of the card.
#[derive(Debug, Clone, PartialEq)]
pub enum Banner {
    /// Banner image dimmed by a surface overlay, dark text on top.
    Image { url: String, overlay: f32 },
    /// Plain primary-container fill.
    Fill,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserSummary {
    pub avatar: Option<String>,
    pub display_name: String,
    /// `username#discriminator`
    pub tag: String,
    pub banner: Banner,
    /// Cake badge tooltip, present when badges are shown.
    pub created_badge: Option<String>,
    pub editable: bool,
}

impl UserSummary {
    pub fn new(user: &User, banner_url: Option<&str>, show_badges: bool, editable: bool) -> Self {
        Self {
            avatar: user.avatar().map(str::to_string),
            display_name: user.display_name().to_string(),
            tag: user.tag(),
            banner: match banner_url {
                Some(url) if !url.is_empty() => Banner::Image {
                    url: url.to_string(),
                    overlay: BANNER_OVERLAY,
                },
                _ => Banner::Fill,
            },
            created_badge: show_badges.then(|| account_created(user.created_at)),
            editable,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn user() -> User {
        User {
            id: "U1".into(),
            username: "insert".into(),
            discriminator: "0001".into(),
            display_name: Some("Paul".into()),
            avatar_url: None,
            animated_avatar_url: Some("https://cdn.example/a.gif".into()),
            status: None,
            created_at: Utc.with_ymd_and_hms(2020, 8, 3, 18, 30, 0).unwrap(),
        }
    }

    #[test]
    fn test_summary_fields() {
        let summary = UserSummary::new(&user(), None, false, true);
        assert_eq!(summary.display_name, "Paul");
        assert_eq!(summary.tag, "insert#0001");
        assert_eq!(summary.avatar.as_deref(), Some("https://cdn.example/a.gif"));
        assert_eq!(summary.banner, Banner::Fill);
        assert_eq!(summary.created_badge, None);
        assert!(summary.editable);
    }

    #[test]
    fn test_banner_and_badges() {
        let summary = UserSummary::new(&user(), Some("https://cdn.example/banner"), true, false);
        assert_eq!(
            summary.banner,
            Banner::Image {
                url: "https://cdn.example/banner".into(),
                overlay: BANNER_OVERLAY
            }
        );
        assert_eq!(
            summary.created_badge.as_deref(),
            Some("Account created 3rd August 2020 at 18:30")
        );
    }

    #[test]
    fn test_empty_banner_url_is_fill() {
        let summary = UserSummary::new(&user(), Some(""), false, false);
        assert_eq!(summary.banner, Banner::Fill);
    }
}
