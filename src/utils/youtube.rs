//! YouTube URL parsing.
//!
//! Videos are submitted as a YouTube URL; the 11-character video id and the
//! thumbnail URL are derived from it.

use regex::Regex;
use std::borrow::Cow;
use std::sync::LazyLock;
use url::Url;
use validator::ValidationError;

/// Compiled regex for YouTube video ids.
static VIDEO_ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]{11}$").expect("valid video id regex"));

/// Errors that can occur while extracting a video id.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum YoutubeUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Not a YouTube URL")]
    NotYoutube,

    #[error("URL does not contain a video id")]
    MissingVideoId,
}

/// Extracts the video id from a YouTube URL.
///
/// # Supported Forms
///
/// - `https://www.youtube.com/watch?v=<id>`
/// - `https://m.youtube.com/watch?v=<id>&t=42`
/// - `https://youtu.be/<id>`
/// - `https://www.youtube.com/embed/<id>`
/// - `https://www.youtube.com/shorts/<id>`
/// - `https://www.youtube.com/live/<id>`
/// - `https://www.youtube-nocookie.com/embed/<id>`
///
/// # Errors
///
/// Returns [`YoutubeUrlError::InvalidFormat`] for malformed URLs.
/// Returns [`YoutubeUrlError::NotYoutube`] for other hosts or non-HTTP(S) schemes.
/// Returns [`YoutubeUrlError::MissingVideoId`] if no well-formed id is found.
pub fn extract_video_id(input: &str) -> Result<String, YoutubeUrlError> {
    let url = Url::parse(input.trim())
        .map_err(|e| YoutubeUrlError::InvalidFormat(e.to_string()))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(YoutubeUrlError::NotYoutube);
    }

    let host = url
        .host_str()
        .map(|h| h.to_ascii_lowercase())
        .ok_or(YoutubeUrlError::NotYoutube)?;
    let host = host
        .strip_prefix("www.")
        .or_else(|| host.strip_prefix("m."))
        .or_else(|| host.strip_prefix("music."))
        .unwrap_or(host.as_str());

    let mut segments = url.path_segments().into_iter().flatten().filter(|s| !s.is_empty());

    let candidate: Option<Cow<'_, str>> = match host {
        "youtu.be" => segments.next().map(Cow::Borrowed),
        "youtube.com" | "youtube-nocookie.com" => match segments.next() {
            Some("watch") => url
                .query_pairs()
                .find(|(k, _)| k == "v")
                .map(|(_, v)| v),
            Some("embed" | "shorts" | "live" | "v") => segments.next().map(Cow::Borrowed),
            _ => None,
        },
        _ => return Err(YoutubeUrlError::NotYoutube),
    };

    match candidate {
        Some(id) if VIDEO_ID_REGEX.is_match(&id) => Ok(id.into_owned()),
        _ => Err(YoutubeUrlError::MissingVideoId),
    }
}

/// Thumbnail image for a video id.
pub fn thumbnail_url(video_id: &str) -> String {
    format!("https://img.youtube.com/vi/{video_id}/hqdefault.jpg")
}

/// `validator` adapter for `youtube_url` fields.
pub fn validate_youtube_url(value: &str) -> Result<(), ValidationError> {
    extract_video_id(value).map(|_| ()).map_err(|e| {
        let mut err = ValidationError::new("youtube_url");
        err.message = Some(Cow::Owned(format!("Enter a valid YouTube URL. {e}.")));
        err
    })
}
