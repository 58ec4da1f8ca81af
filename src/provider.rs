use crate::{ProviderError, Segment};

/// One transcript a provider offers for a video
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptHandle {
    /// Human-readable language name, e.g. "English (auto-generated)"
    pub language: String,
    pub language_code: String,
    pub is_generated: bool,
    pub base_url: String,
}

impl TranscriptHandle {
    pub fn kind(&self) -> &'static str {
        if self.is_generated { "auto-generated" } else { "manual" }
    }
}

/// Source of transcripts for a video
#[allow(async_fn_in_trait)]
pub trait TranscriptProvider {
    /// List every transcript available for the video, in the provider's order
    async fn list_transcripts(&self, video_id: &str) -> Result<Vec<TranscriptHandle>, ProviderError>;

    /// Download the timed fragments of a transcript returned by `list_transcripts`
    async fn fetch(&self, handle: &TranscriptHandle) -> Result<Vec<Segment>, ProviderError>;
}
