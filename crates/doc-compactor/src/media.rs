//! Media URL heuristics: image-host path shrinking and video id extraction.
//!
//! All helpers are total; anything that does not match a known shape is
//! returned unchanged (or `None`).

use regex::Regex;
use std::sync::LazyLock;

/// Domain of the image host whose URLs are shrunk.
pub const MEDIA_HOST: &str = "cloudinary.com";

const VIDEO_WATCH_URL: &str = "https://www.youtube.com/watch?v=";

static MEDIA_URL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^https?://(?:[^/?#@]+\.)?cloudinary\.com(?::\d+)?(/[^?#]*)").expect("media url regex")
});

static UPLOAD_PATH_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"/upload/(.+)$").expect("upload path regex"));

static SCHEME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").expect("scheme regex"));

static VIDEO_ID_RES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        Regex::new(r"(?:youtube\.com/watch\?v=|youtu\.be/|youtube\.com/embed/)([A-Za-z0-9_-]{11})")
            .expect("video url regex"),
        Regex::new(r"^([A-Za-z0-9_-]{11})$").expect("bare video id regex"),
    ]
});

static START_OFFSET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[?&]t=(\d+)").expect("start offset regex"));

/// Reduce a media-host URL to the part after `/upload/`.
pub fn shrink_media_path(url: &str) -> &str {
    let Some(path) = MEDIA_URL_RE.captures(url).and_then(|cap| cap.get(1)) else {
        return url;
    };
    match UPLOAD_PATH_RE.captures(path.as_str()).and_then(|cap| cap.get(1)) {
        Some(suffix) => &url[path.start() + suffix.start()..path.start() + suffix.end()],
        None => url,
    }
}

/// Rebuild an absolute media URL from a shrunk path.
///
/// Paths that already carry a scheme, or are absolute (`/`, `//`), are
/// returned as-is.
pub fn restore_media_url(path: &str, provider_id: &str) -> String {
    if path.is_empty() {
        return String::new();
    }
    if SCHEME_RE.is_match(path) || path.starts_with('/') {
        return path.to_string();
    }
    format!("https://res.{MEDIA_HOST}/{provider_id}/image/upload/{path}")
}

/// The 11-character video id from a watch, short-link, or embed URL, or a
/// bare id.
pub fn extract_video_id(url: &str) -> Option<&str> {
    VIDEO_ID_RES
        .iter()
        .find_map(|re| re.captures(url).and_then(|cap| cap.get(1)))
        .map(|m| m.as_str())
}

/// Start offset in seconds from a `t=` query parameter.
pub fn extract_start_offset(url: &str) -> Option<u64> {
    START_OFFSET_RE
        .captures(url)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Canonical watch URL; the offset is appended only when positive.
pub fn build_video_url(video_id: &str, start_offset: Option<u64>) -> String {
    if video_id.is_empty() {
        return String::new();
    }
    match start_offset {
        Some(secs) if secs > 0 => format!("{VIDEO_WATCH_URL}{video_id}&t={secs}s"),
        _ => format!("{VIDEO_WATCH_URL}{video_id}"),
    }
}
