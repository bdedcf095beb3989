use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("Network error: {0}")]
    Network(#[from] gloo_net::Error),
    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },
    #[error("Failed to parse response: {0}")]
    Parse(String),
    #[error("API request failed: {0}")]
    Api(String),
}
