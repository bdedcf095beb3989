//! Turns the raw `/videos` payload into [`Video`] records and a
//! [`PaginationInfo`].
//!
//! The payload is only loosely structured, so nothing in here fails hard: a
//! payload without the expected envelope yields an empty page, a raw item
//! with missing sections is skipped, and a field of the wrong type is treated
//! as absent.

use crate::models::{PaginationInfo, Video};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

/// Thumbnail resolutions, best first.
const THUMBNAIL_PREFERENCE: [&str; 5] = ["maxres", "standard", "high", "medium", "default"];

/// Counts arrive as strings from the YouTube API but as numbers from some
/// mirrors.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCount {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl RawCount {
    fn value(&self) -> Option<u64> {
        match self {
            RawCount::Integer(n) => Some(*n),
            RawCount::Float(f) => whole_count(*f),
            RawCount::Text(s) => {
                let s = s.trim();
                s.parse::<u64>()
                    .ok()
                    .or_else(|| s.parse::<f64>().ok().and_then(whole_count))
            }
        }
    }
}

fn whole_count(value: f64) -> Option<u64> {
    (value.is_finite() && value >= 0.0).then(|| value.trunc() as u64)
}

/// Reads `key` of `section` as `T`; a missing key or a value of the wrong type
/// gives `None` instead of rejecting the whole item.
fn field<T: DeserializeOwned>(section: &Value, key: &str) -> Option<T> {
    section.get(key).and_then(|v| T::deserialize(v).ok())
}

/// Text fields also accept numbers, which are rendered as written.
fn text_field(section: &Value, key: &str) -> Option<String> {
    match section.get(key)? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

/// A required section: present and not `null`.
fn section<'a>(items: &'a Value, key: &str) -> Option<&'a Value> {
    items.get(key).filter(|v| !v.is_null())
}

/// Normalizes a raw API response. Returns an empty list and no pagination when
/// the envelope is not recognized.
pub fn normalize(raw: &Value) -> (Vec<Video>, Option<PaginationInfo>) {
    let succeeded = raw.get("success").and_then(Value::as_bool) == Some(true);
    let payload = raw.get("data");
    let items = payload.and_then(|d| d.get("data")).and_then(Value::as_array);

    let (Some(payload), Some(items), true) = (payload, items, succeeded) else {
        log::error!("Invalid API response structure: {}", raw);
        return (Vec::new(), None);
    };

    let pagination = pagination_info(payload);

    let videos: Vec<Video> = items.iter().filter_map(map_video).collect();
    if videos.len() < items.len() {
        log::warn!(
            "Skipped {} of {} videos with an unexpected structure",
            items.len() - videos.len(),
            items.len()
        );
    }

    (videos, Some(pagination))
}

fn pagination_info(payload: &Value) -> PaginationInfo {
    let page_field = |key: &str| {
        payload
            .get(key)
            .and_then(Value::as_u64)
            .and_then(|n| u32::try_from(n).ok())
    };
    let current_page = page_field("page");

    // `previousPage`/`nextPage` are plain flags on some deployments; a set
    // flag points at the neighbouring page.
    let neighbour = |key: &str, step: fn(u32) -> u32| match payload.get(key) {
        Some(Value::Bool(true)) => Some(step(current_page.unwrap_or(1))),
        _ => page_field(key),
    };

    PaginationInfo {
        current_page,
        total_pages: page_field("totalPages"),
        previous_page: neighbour("previousPage", |page: u32| page.saturating_sub(1)),
        next_page: neighbour("nextPage", |page: u32| page.saturating_add(1)),
        total_items: payload.get("totalItems").and_then(Value::as_u64),
    }
}

/// Maps a single raw entry, or `None` if it lacks an id or one of the required
/// sections. Individual fields are read leniently.
fn map_video(raw: &Value) -> Option<Video> {
    let Some(items) = raw.get("items").filter(|v| v.is_object()) else {
        log::error!("Invalid video object structure: {}", raw);
        return None;
    };

    let (Some(id), Some(snippet), Some(content_details), Some(statistics)) = (
        text_field(items, "id"),
        section(items, "snippet"),
        section(items, "contentDetails"),
        section(items, "statistics"),
    ) else {
        log::error!("Invalid video object structure: {}", raw);
        return None;
    };

    let count = |key: &str| field::<RawCount>(statistics, key).and_then(|c| c.value());

    Some(Video {
        id,
        title: text_field(snippet, "title").unwrap_or_default(),
        channel_id: text_field(snippet, "channelId").unwrap_or_default(),
        channel_title: text_field(snippet, "channelTitle").unwrap_or_default(),
        published_at: field(snippet, "publishedAt"),
        thumbnail: snippet
            .get("thumbnails")
            .and_then(Value::as_object)
            .and_then(best_thumbnail),
        duration: field(content_details, "duration"),
        view_count: count("viewCount"),
        like_count: count("likeCount"),
    })
}

fn best_thumbnail(thumbnails: &serde_json::Map<String, Value>) -> Option<String> {
    THUMBNAIL_PREFERENCE.iter().find_map(|key| {
        thumbnails
            .get(*key)
            .and_then(|t| t.get("url"))
            .and_then(Value::as_str)
            .filter(|url| !url.is_empty())
            .map(str::to_string)
    })
}
