//! Attachment/embed summary: icon kind, label and download target.

use crate::models::{Embed, EmbedKind, File, FileMetadata};

/// Icon category for an attachment row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Image,
    Video,
    Audio,
    Text,
    File,
}

impl FileKind {
    /// Classify from a file's metadata and/or an embed. Images and videos
    /// are recognised from either source, audio and text only from files.
    pub fn classify(file: Option<&File>, embed: Option<&Embed>) -> Self {
        let metadata = file.map(|f| &f.metadata);
        let embed = embed.map(|e| e.kind);

        if matches!(metadata, Some(FileMetadata::Image { .. })) || embed == Some(EmbedKind::Image) {
            FileKind::Image
        } else if matches!(metadata, Some(FileMetadata::Video { .. }))
            || embed == Some(EmbedKind::Video)
        {
            FileKind::Video
        } else if matches!(metadata, Some(FileMetadata::Audio)) {
            FileKind::Audio
        } else if matches!(metadata, Some(FileMetadata::Text)) {
            FileKind::Text
        } else {
            FileKind::File
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            FileKind::Image => "🖼",
            FileKind::Video => "🎞",
            FileKind::Audio => "🎧",
            FileKind::Text => "📄",
            FileKind::File => "📁",
        }
    }
}

const UNITS: [&str; 5] = ["B", "kB", "MB", "GB", "TB"];

/// Human readable size using 1024-based units, e.g. `1.5 kB`.
pub fn human_file_size(bytes: u64) -> String {
    let mut unit = 0;
    let mut value = bytes as f64;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut number = format!("{value:.2}");
    if number.contains('.') {
        number = number.trim_end_matches('0').trim_end_matches('.').to_string();
    }
    format!("{number} {}", UNITS[unit])
}

/// Everything the attachment row displays.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileInfo {
    pub kind: FileKind,
    pub filename: Option<String>,
    /// Only present for non-zero sizes.
    pub size_label: Option<String>,
    /// `(url, suggested filename)` when a file can be downloaded.
    pub download: Option<(String, String)>,
}

impl FileInfo {
    pub fn new(file: Option<&File>, embed: Option<&Embed>) -> Self {
        Self {
            kind: FileKind::classify(file, embed),
            filename: file.map(|f| f.filename.clone()),
            size_label: file
                .and_then(|f| f.size)
                .filter(|size| *size > 0)
                .map(human_file_size),
            download: file.map(|f| (f.original_url.clone(), f.filename.clone())),
        }
    }
}
