pub mod app;
pub mod config;
pub mod error;
pub mod journal;
pub mod output;
pub mod provider;
pub mod transcript;
pub mod youtube;

use serde::{Deserialize, Serialize};
use url::Url;

pub use error::{ProviderError, TranscriptError, UrlError};

/// A single captioned segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub text: String,
    pub start: f64,
    pub duration: f64,
}

/// The record written to the output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TranscriptResult {
    pub video_id: String,
    pub language: String,
    pub is_generated: bool,
    pub text: String,
}

fn host_matches(host: &str, domain: &str) -> bool {
    host == domain || host.ends_with(&format!(".{domain}"))
}

/// Extract the video ID from a youtu.be or youtube.com URL
pub fn extract_video_id(input: &str) -> Result<String, UrlError> {
    let input = input.trim();
    let url = Url::parse(input).map_err(|_| UrlError::InvalidUrl(input.to_string()))?;
    let host = url.host_str().unwrap_or("").to_ascii_lowercase();

    if host_matches(&host, "youtu.be") {
        let id = url.path().trim_matches('/');
        if id.is_empty() {
            return Err(UrlError::MissingVideoId(input.to_string()));
        }
        return Ok(id.to_string());
    }

    if host_matches(&host, "youtube.com") {
        return url
            .query_pairs()
            .find(|(k, v)| k == "v" && !v.is_empty())
            .map(|(_, v)| v.into_owned())
            .ok_or_else(|| UrlError::MissingParameter("v".to_string()));
    }

    Err(UrlError::InvalidUrl(input.to_string()))
}
