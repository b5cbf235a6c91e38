// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! Shared normalization rules applied by every source adapter: media
//! classification, URL filtering, stable-id derivation, and title
//! truncation. Adapters do the upstream-specific field extraction and
//! then run their raw candidates through these rules.

use sha2::{Digest, Sha256};

/// Display-safety bound on titles.
pub const MAX_TITLE_LEN: usize = 100;

/// Placeholder used when an upstream item carries no title.
pub const UNTITLED: &str = "Untitled";

/// Hex length of the content-hash id fallback.
const ID_HASH_LEN: usize = 12;

const VIDEO_EXTENSIONS: [&str; 3] = [".mp4", ".webm", ".gifv"];
const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".webp", ".gif"];

/// Whether `.gif` URLs count as video at a given call site.
///
/// Feeds that serve short clips as gifs (the meme-api shape) classify
/// them as video; Reddit-style feeds keep gifs as images.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GifPolicy {
    Image,
    Video,
}

/// Outcome of classifying one raw item's media.
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub url: String,
    pub is_video: bool,
}

/// Classify a raw item's media URL, applying the video/image rules.
///
/// Returns `None` when the item has no displayable media and must be
/// dropped: a video-flagged item without a resolvable direct video URL,
/// or a non-video item whose URL lacks a recognized image extension
/// (link posts, text posts, galleries).
///
/// `direct_video_url` is the upstream's explicit direct media reference
/// (Reddit's `fallback_url`); when present on a video-flagged item it
/// wins over the post URL. `.gifv` URLs are rewritten to their `.mp4`
/// equivalent.
pub fn classify_media(
    url: &str,
    flagged_video: bool,
    direct_video_url: Option<&str>,
    gif_policy: GifPolicy,
) -> Option<Media> {
    if url.is_empty() {
        return None;
    }

    if flagged_video {
        if let Some(direct) = direct_video_url {
            if has_video_extension(direct) {
                return Some(Media {
                    url: rewrite_gifv(direct),
                    is_video: true,
                });
            }
        }
        // Flagged video with no resolvable direct URL: demote and fall
        // through to the extension rules rather than emit a broken
        // video entry.
    }

    let lower = url.to_ascii_lowercase();

    if has_video_extension(url) {
        return Some(Media {
            url: rewrite_gifv(url),
            is_video: true,
        });
    }

    if gif_policy == GifPolicy::Video && lower.ends_with(".gif") {
        return Some(Media {
            url: url.to_string(),
            is_video: true,
        });
    }

    if IMAGE_EXTENSIONS.iter().any(|ext| lower.ends_with(ext)) {
        return Some(Media {
            url: url.to_string(),
            is_video: false,
        });
    }

    None
}

fn has_video_extension(url: &str) -> bool {
    let lower = url.to_ascii_lowercase();
    VIDEO_EXTENSIONS.iter().any(|ext| lower.ends_with(ext))
}

/// Rewrite a `.gifv` URL to its `.mp4` equivalent; other URLs pass
/// through unchanged.
pub fn rewrite_gifv(url: &str) -> String {
    if url.to_ascii_lowercase().ends_with(".gifv") {
        let stem = &url[..url.len() - ".gifv".len()];
        format!("{stem}.mp4")
    } else {
        url.to_string()
    }
}

/// Truncate a title to [`MAX_TITLE_LEN`] characters, substituting
/// [`UNTITLED`] when missing or empty.
pub fn normalize_title(raw: Option<&str>) -> String {
    let title = match raw {
        Some(t) if !t.trim().is_empty() => t.trim(),
        _ => return UNTITLED.to_string(),
    };
    title.chars().take(MAX_TITLE_LEN).collect()
}

/// Derive a stable candidate id.
///
/// Prefers the upstream's own identifier, prefixed with the source key;
/// falls back to a truncated SHA-256 of the media URL, which is short
/// and collision-resistant enough for within-response dedup.
pub fn derive_id(prefix: &str, native_id: Option<&str>, media_url: &str) -> String {
    match native_id {
        Some(native) if !native.is_empty() => format!("{prefix}_{native}"),
        _ => {
            let digest = Sha256::digest(media_url.as_bytes());
            let hash = hex::encode(digest);
            format!("{prefix}_{}", &hash[..ID_HASH_LEN])
        }
    }
}
