use thiserror::Error;

/// Why a URL could not be turned into a video ID
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UrlError {
    #[error("invalid YouTube URL format: {0}")]
    InvalidUrl(String),

    #[error("YouTube URL is missing the '{0}' query parameter")]
    MissingParameter(String),

    #[error("short YouTube URL has no video ID in its path: {0}")]
    MissingVideoId(String),
}

/// Errors raised by a transcript provider
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("transcripts are disabled for video {0}")]
    TranscriptsDisabled(String),

    #[error("video {video_id} is unavailable: {reason}")]
    VideoUnavailable { video_id: String, reason: String },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("unexpected response from YouTube: {0}")]
    Parse(String),
}

/// Hard failures of the transcript retrieval path
#[derive(Error, Debug)]
pub enum TranscriptError {
    #[error("no transcript available for video {video_id}")]
    NoTranscriptAvailable {
        video_id: String,
        #[source]
        source: Option<ProviderError>,
    },

    #[error("transcript lookup failed for video {video_id}")]
    LookupFailed {
        video_id: String,
        #[source]
        source: ProviderError,
    },

    #[error("failed to fetch {language_code} transcript for video {video_id}")]
    FetchFailed {
        video_id: String,
        language_code: String,
        #[source]
        source: ProviderError,
    },
}

/// Render an error with its full `source()` chain, one cause per line
pub fn error_chain(err: &dyn std::error::Error) -> String {
    let mut out = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        out.push_str("\n  caused by: ");
        out.push_str(&cause.to_string());
        source = cause.source();
    }
    out
}
