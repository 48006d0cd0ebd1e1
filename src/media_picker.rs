//! GIF/emoji picker state and its anchored placement.

use eframe::egui::{pos2, Pos2, Rect, Vec2};

/// Gap between the trigger and the picker.
pub const PICKER_OFFSET: f32 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerTab {
    Gif,
    Emoji,
}

/// What the host should do after the user picked something.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerAction {
    /// Send a message straight away (a GIF link).
    SendMessage(String),
    /// Insert text at the composer cursor (an emoji).
    InsertText(String),
}

/// A GIF search result supplied by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GifResult {
    pub title: String,
    pub url: String,
}

pub const EMOJI: [(&str, &str); 16] = [
    ("grinning", "😀"),
    ("joy", "😂"),
    ("smile", "😄"),
    ("wink", "😉"),
    ("heart_eyes", "😍"),
    ("thinking", "🤔"),
    ("sob", "😭"),
    ("scream", "😱"),
    ("thumbsup", "👍"),
    ("thumbsdown", "👎"),
    ("clap", "👏"),
    ("pray", "🙏"),
    ("heart", "❤️"),
    ("fire", "🔥"),
    ("tada", "🎉"),
    ("eyes", "👀"),
];

/// Emoji whose shortcode contains `query`; everything for an empty query.
pub fn search_emoji(query: &str) -> Vec<(&'static str, &'static str)> {
    let query = query.trim().trim_matches(':').to_lowercase();
    EMOJI
        .iter()
        .filter(|(code, _)| code.contains(query.as_str()))
        .copied()
        .collect()
}

/// Open/closed state of the picker.
#[derive(Debug, Clone, Default)]
pub struct MediaPicker {
    show: Option<PickerTab>,
    pub emoji_query: String,
}

impl MediaPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shown(&self) -> Option<PickerTab> {
        self.show
    }

    /// Open `tab`, or close the picker if `tab` is already open.
    pub fn toggle(&mut self, tab: PickerTab) {
        self.show = if self.show == Some(tab) { None } else { Some(tab) };
    }

    /// Switch to `tab` from inside an open picker.
    pub fn select(&mut self, tab: PickerTab) {
        if self.show.is_some() {
            self.show = Some(tab);
        }
    }

    pub fn close(&mut self) {
        self.show = None;
        self.emoji_query.clear();
    }

    pub fn pick_emoji(&mut self, emoji: &str) -> PickerAction {
        self.close();
        PickerAction::InsertText(emoji.to_string())
    }

    pub fn pick_gif(&mut self, gif: &GifResult) -> PickerAction {
        self.close();
        PickerAction::SendMessage(gif.url.clone())
    }
}

/// Top-left corner for a picker of `size` anchored "top-end" to `anchor`.
///
/// The picker sits above the anchor, right edges aligned. If it would leave
/// the top of `viewport` it flips below the anchor, then it is shifted
/// horizontally to stay inside `viewport`.
pub fn place_top_end(anchor: Rect, size: Vec2, viewport: Rect) -> Pos2 {
    let mut y = anchor.top() - PICKER_OFFSET - size.y;
    if y < viewport.top() {
        y = anchor.bottom() + PICKER_OFFSET;
    }

    let x = anchor.right() - size.x;
    let max_x = (viewport.right() - size.x).max(viewport.left());
    pos2(x.clamp(viewport.left(), max_x), y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use eframe::egui::vec2;

    fn viewport() -> Rect {
        Rect::from_min_size(pos2(0.0, 0.0), vec2(800.0, 600.0))
    }

    #[test]
    fn test_toggle() {
        let mut picker = MediaPicker::new();
        assert_eq!(picker.shown(), None);

        picker.toggle(PickerTab::Gif);
        assert_eq!(picker.shown(), Some(PickerTab::Gif));

        // switching tabs keeps it open
        picker.toggle(PickerTab::Emoji);
        assert_eq!(picker.shown(), Some(PickerTab::Emoji));

        picker.toggle(PickerTab::Emoji);
        assert_eq!(picker.shown(), None);
    }

    #[test]
    fn test_select_switches_open_tab() {
        let mut picker = MediaPicker::new();
        // closed pickers stay closed
        picker.select(PickerTab::Emoji);
        assert_eq!(picker.shown(), None);

        picker.toggle(PickerTab::Gif);
        picker.select(PickerTab::Emoji);
        assert_eq!(picker.shown(), Some(PickerTab::Emoji));
        picker.select(PickerTab::Emoji);
        assert_eq!(picker.shown(), Some(PickerTab::Emoji));
    }

    #[test]
    fn test_picking_closes() {
        let mut picker = MediaPicker::new();
        picker.toggle(PickerTab::Emoji);
        picker.emoji_query = "fire".into();
        assert_eq!(picker.pick_emoji("🔥"), PickerAction::InsertText("🔥".into()));
        assert_eq!(picker.shown(), None);
        assert!(picker.emoji_query.is_empty());

        picker.toggle(PickerTab::Gif);
        let gif = GifResult {
            title: "cat".into(),
            url: "https://gifs.example/cat.gif".into(),
        };
        assert_eq!(
            picker.pick_gif(&gif),
            PickerAction::SendMessage("https://gifs.example/cat.gif".into())
        );
        assert_eq!(picker.shown(), None);
    }

    #[test]
    fn test_search_emoji() {
        assert_eq!(search_emoji("").len(), EMOJI.len());
        assert_eq!(search_emoji(":tada:"), vec![("tada", "🎉")]);
        let thumbs = search_emoji("THUMBS");
        assert_eq!(thumbs.len(), 2);
        assert!(search_emoji("zzz").is_empty());
    }

    #[test]
    fn test_place_above_anchor() {
        let anchor = Rect::from_min_size(pos2(600.0, 500.0), vec2(40.0, 30.0));
        let pos = place_top_end(anchor, vec2(300.0, 200.0), viewport());
        assert_eq!(pos, pos2(340.0, 295.0));
    }

    #[test]
    fn test_flip_below_when_no_room() {
        let anchor = Rect::from_min_size(pos2(600.0, 50.0), vec2(40.0, 30.0));
        let pos = place_top_end(anchor, vec2(300.0, 200.0), viewport());
        assert_eq!(pos.y, 85.0);
    }

    #[test]
    fn test_shift_into_viewport() {
        let anchor = Rect::from_min_size(pos2(10.0, 500.0), vec2(40.0, 30.0));
        let pos = place_top_end(anchor, vec2(300.0, 200.0), viewport());
        assert_eq!(pos.x, 0.0);
    }
}
