use serde::{Deserialize, Serialize};

/// A video as shown in the gallery, produced by the normalizer.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub channel_id: String,
    pub channel_title: String,
    pub published_at: Option<String>,
    pub thumbnail: Option<String>,
    pub duration: Option<String>,
    pub view_count: Option<u64>,
    pub like_count: Option<u64>,
}

/// Pagination summary of one fetched page. Fields are passed through from the
/// API untouched, so any of them may be missing.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub struct PaginationInfo {
    pub current_page: Option<u32>,
    pub total_pages: Option<u32>,
    pub previous_page: Option<u32>,
    pub next_page: Option<u32>,
    pub total_items: Option<u64>,
}

/// One slot of the pagination bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageSlot {
    Page(u32),
    Ellipsis,
}

#[derive(Debug, Deserialize)]
pub struct ErrorResponse {
    pub message: Option<String>,
}
