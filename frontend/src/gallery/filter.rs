use crate::models::Video;

/// Videos whose title or channel name contains `query`, ignoring case and
/// surrounding whitespace. A blank query keeps every video.
pub fn filter_videos(videos: &[Video], query: &str) -> Vec<Video> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return videos.to_vec();
    }

    videos
        .iter()
        .filter(|video| {
            video.title.to_lowercase().contains(&query)
                || video.channel_title.to_lowercase().contains(&query)
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn video(id: &str, title: &str, channel_title: &str) -> Video {
        Video {
            id: id.to_string(),
            title: title.to_string(),
            channel_title: channel_title.to_string(),
            ..Default::default()
        }
    }

    fn library() -> Vec<Video> {
        vec![
            video("1", "Learn Rust in 10 minutes", "Code Channel"),
            video("2", "Cooking pasta", "Kitchen Corner"),
            video("3", "Async deep dive", "RustConf"),
            video("4", "Morning jazz", "Lofi Beats"),
        ]
    }

    fn ids(videos: &[Video]) -> Vec<&str> {
        videos.iter().map(|v| v.id.as_str()).collect()
    }

    #[test]
    fn test_matches_title_or_channel_case_insensitively() {
        let videos = library();
        assert_eq!(ids(&filter_videos(&videos, "rust")), vec!["1", "3"]);
        assert_eq!(ids(&filter_videos(&videos, "  KITCHEN ")), vec!["2"]);
        assert!(filter_videos(&videos, "nothing like this").is_empty());
    }

    #[test]
    fn test_blank_query_returns_everything() {
        let videos = library();
        assert_eq!(filter_videos(&videos, ""), videos);
        assert_eq!(filter_videos(&videos, "   \t"), videos);
    }

    #[test]
    fn test_filter_is_idempotent_and_leaves_source_alone() {
        let videos = library();
        let snapshot = videos.clone();

        let once = filter_videos(&videos, "rust");
        let twice = filter_videos(&once, "rust");

        assert_eq!(once, twice);
        assert_eq!(videos, snapshot);
    }
}
