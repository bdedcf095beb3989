use crate::env_variable_utils::API_BASE_URL;
use crate::errors::FetchError;
use crate::gallery::normalize::normalize;
use crate::gallery::state::{GalleryAction, GalleryState};
use crate::models::ErrorResponse;
use gloo_net::http::Request;
use serde_json::Value;
use yew::functional::UseReducerDispatcher;

pub fn videos_url(base_url: &str, page: u32) -> String {
    format!("{}/videos?page={}", base_url.trim_end_matches('/'), page)
}

/// Fetches one page of raw video data. Anything but a successful envelope is
/// returned as an error, so callers never normalize a failed response.
pub async fn fetch_page(page: u32) -> Result<Value, FetchError> {
    let url = videos_url(&*API_BASE_URL, page);
    log::debug!("GET {}", url);

    let response = Request::get(&url).send().await?;
    let status = response.status();
    let body = response.text().await?;

    if !response.ok() {
        let message = serde_json::from_str::<ErrorResponse>(&body)
            .ok()
            .and_then(|e| e.message);
        return Err(match message {
            Some(message) => FetchError::Api(message),
            None => FetchError::Http { status, body },
        });
    }

    parse_envelope(&body)
}

/// Parses a response body and checks the `success` flag of its envelope.
pub fn parse_envelope(body: &str) -> Result<Value, FetchError> {
    let raw: Value = serde_json::from_str(body).map_err(|e| FetchError::Parse(e.to_string()))?;

    if raw.get("success").and_then(Value::as_bool) == Some(true) {
        Ok(raw)
    } else {
        let message = raw
            .get("message")
            .and_then(Value::as_str)
            .unwrap_or("Unknown error");
        Err(FetchError::Api(message.to_string()))
    }
}

/// Loads `page` and feeds the outcome into the gallery state.
pub async fn load_page(page: u32, request: u64, gallery: UseReducerDispatcher<GalleryState>) {
    gallery.dispatch(GalleryAction::FetchStarted { request, page });

    match fetch_page(page).await {
        Ok(raw) => {
            let (videos, pagination) = normalize(&raw);
            log::info!("Loaded {} videos for page {}", videos.len(), page);
            gallery.dispatch(GalleryAction::FetchSucceeded {
                request,
                videos,
                pagination,
            });
        }
        Err(e) => {
            log::error!("Error fetching videos: {}", e);
            gallery.dispatch(GalleryAction::FetchFailed {
                request,
                message: e.to_string(),
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_videos_url() {
        assert_eq!(
            videos_url("https://api.example.com/youtube", 3),
            "https://api.example.com/youtube/videos?page=3"
        );
        assert_eq!(
            videos_url("https://api.example.com/youtube/", 1),
            "https://api.example.com/youtube/videos?page=1"
        );
    }

    #[test]
    fn test_parse_envelope_accepts_success() {
        let raw = parse_envelope(r#"{"success": true, "data": {"data": []}}"#).unwrap();
        assert_eq!(raw["data"]["data"], serde_json::json!([]));
    }

    #[test]
    fn test_parse_envelope_reports_api_failure() {
        let err = parse_envelope(r#"{"success": false, "message": "Rate limited"}"#).unwrap_err();
        assert!(matches!(err, FetchError::Api(ref m) if m == "Rate limited"));
        assert_eq!(err.to_string(), "API request failed: Rate limited");

        let err = parse_envelope(r#"{"data": {}}"#).unwrap_err();
        assert_eq!(err.to_string(), "API request failed: Unknown error");
    }

    #[test]
    fn test_parse_envelope_rejects_invalid_json() {
        let err = parse_envelope("<html>Bad gateway</html>").unwrap_err();
        assert!(matches!(err, FetchError::Parse(_)));
    }
}
