//! Session state of the gallery page.
//!
//! All writes go through [`GalleryAction`]s dispatched to a Yew reducer, so the
//! loaded video list has exactly one owner. Every fetch carries a request id
//! and only the newest request may update the list.

use crate::gallery::filter::filter_videos;
use crate::models::{PaginationInfo, Video};
use std::rc::Rc;
use yew::Reducible;

#[derive(Debug, Clone, PartialEq)]
pub enum LoadStatus {
    Idle,
    Loading,
    Ready,
    Failed { message: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryState {
    pub videos: Rc<Vec<Video>>,
    pub pagination: Option<PaginationInfo>,
    pub status: LoadStatus,
    /// Page of the most recent request, used by the retry button.
    pub page: u32,
    pub query: String,
    latest_request: u64,
}

pub enum GalleryAction {
    FetchStarted {
        request: u64,
        page: u32,
    },
    FetchSucceeded {
        request: u64,
        videos: Vec<Video>,
        pagination: Option<PaginationInfo>,
    },
    FetchFailed {
        request: u64,
        message: String,
    },
    QueryChanged(String),
}

impl GalleryState {
    pub fn new(page: u32, query: String) -> Self {
        Self {
            videos: Rc::new(Vec::new()),
            pagination: None,
            status: LoadStatus::Idle,
            page: page.max(1),
            query,
            latest_request: 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.status == LoadStatus::Loading
    }

    pub fn error(&self) -> Option<&str> {
        match &self.status {
            LoadStatus::Failed { message } => Some(message),
            _ => None,
        }
    }

    /// The loaded videos narrowed down by the current search query.
    pub fn visible_videos(&self) -> Vec<Video> {
        filter_videos(&self.videos, &self.query)
    }

    fn is_stale(&self, request: u64) -> bool {
        request < self.latest_request
    }
}

impl Default for GalleryState {
    fn default() -> Self {
        Self::new(1, String::new())
    }
}

impl Reducible for GalleryState {
    type Action = GalleryAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            GalleryAction::FetchStarted { request, page } => {
                if self.is_stale(request) {
                    return self;
                }
                let mut next = (*self).clone();
                next.latest_request = request;
                next.page = page.max(1);
                next.status = LoadStatus::Loading;
                Rc::new(next)
            }
            GalleryAction::FetchSucceeded {
                request,
                videos,
                pagination,
            } => {
                if self.is_stale(request) {
                    log::debug!(
                        "Dropping response of request {} (latest is {})",
                        request,
                        self.latest_request
                    );
                    return self;
                }
                let mut next = (*self).clone();
                next.videos = Rc::new(videos);
                next.pagination = pagination;
                next.status = LoadStatus::Ready;
                Rc::new(next)
            }
            GalleryAction::FetchFailed { request, message } => {
                if self.is_stale(request) {
                    log::debug!(
                        "Dropping failure of request {} (latest is {})",
                        request,
                        self.latest_request
                    );
                    return self;
                }
                let mut next = (*self).clone();
                next.status = LoadStatus::Failed { message };
                Rc::new(next)
            }
            GalleryAction::QueryChanged(query) => {
                if query == self.query {
                    return self;
                }
                let mut next = (*self).clone();
                next.query = query;
                Rc::new(next)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            channel_title: "Channel".to_string(),
            ..Default::default()
        }
    }

    fn loaded(videos: Vec<Video>) -> Rc<GalleryState> {
        Rc::new(GalleryState::default())
            .reduce(GalleryAction::FetchStarted { request: 1, page: 1 })
            .reduce(GalleryAction::FetchSucceeded {
                request: 1,
                videos,
                pagination: Some(PaginationInfo {
                    current_page: Some(1),
                    total_pages: Some(3),
                    ..Default::default()
                }),
            })
    }

    #[test]
    fn test_successful_fetch_replaces_videos() {
        let state = loaded(vec![video("a", "Alpha"), video("b", "Beta")]);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.videos.len(), 2);

        let state = state
            .reduce(GalleryAction::FetchStarted { request: 2, page: 2 })
            .reduce(GalleryAction::FetchSucceeded {
                request: 2,
                videos: vec![video("c", "Gamma")],
                pagination: None,
            });
        assert_eq!(state.page, 2);
        assert_eq!(state.videos.as_slice(), &[video("c", "Gamma")]);
        assert_eq!(state.pagination, None);
    }

    #[test]
    fn test_failed_fetch_keeps_previous_videos() {
        let before = loaded(vec![video("a", "Alpha")]);
        let videos_before = before.videos.clone();

        let loading = before.reduce(GalleryAction::FetchStarted { request: 2, page: 2 });
        assert!(loading.is_loading());
        assert_eq!(loading.videos, videos_before);

        let failed = loading.reduce(GalleryAction::FetchFailed {
            request: 2,
            message: "Network error".to_string(),
        });
        assert_eq!(failed.error(), Some("Network error"));
        assert_eq!(failed.videos, videos_before);
        assert_eq!(failed.page, 2);
    }

    #[test]
    fn test_failed_first_fetch_leaves_empty_state() {
        let state = Rc::new(GalleryState::default())
            .reduce(GalleryAction::FetchStarted { request: 1, page: 1 })
            .reduce(GalleryAction::FetchFailed {
                request: 1,
                message: "boom".to_string(),
            });
        assert!(state.videos.is_empty());
        assert_eq!(state.error(), Some("boom"));
    }

    #[test]
    fn test_stale_responses_are_ignored() {
        let state = loaded(vec![video("a", "Alpha")])
            .reduce(GalleryAction::FetchStarted { request: 2, page: 2 })
            .reduce(GalleryAction::FetchStarted { request: 3, page: 3 });

        // Request 3 resolves first, then the older request 2 arrives.
        let state = state
            .reduce(GalleryAction::FetchSucceeded {
                request: 3,
                videos: vec![video("page3", "Third page")],
                pagination: None,
            })
            .reduce(GalleryAction::FetchSucceeded {
                request: 2,
                videos: vec![video("page2", "Second page")],
                pagination: None,
            })
            .reduce(GalleryAction::FetchFailed {
                request: 2,
                message: "late".to_string(),
            });

        assert_eq!(state.page, 3);
        assert_eq!(state.status, LoadStatus::Ready);
        assert_eq!(state.videos.as_slice(), &[video("page3", "Third page")]);
    }

    #[test]
    fn test_query_only_changes_the_visible_view() {
        let state = loaded(vec![video("a", "Rust talk"), video("b", "Cooking")]);
        let stored = state.videos.clone();

        let state = state.reduce(GalleryAction::QueryChanged("rust".to_string()));
        assert_eq!(state.visible_videos(), vec![video("a", "Rust talk")]);
        assert_eq!(state.videos, stored);

        let state = state.reduce(GalleryAction::QueryChanged("  ".to_string()));
        assert_eq!(state.visible_videos(), *stored);
    }
}
