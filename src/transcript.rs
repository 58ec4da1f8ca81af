use log::debug;

use crate::error::error_chain;
use crate::journal::Journal;
use crate::provider::{TranscriptHandle, TranscriptProvider};
use crate::{ProviderError, Segment, TranscriptError, TranscriptResult};

/// Terminal state of a retrieval attempt
#[derive(Debug)]
pub enum Outcome {
    Found(TranscriptResult),
    /// The chosen transcript had no fragments; nothing to save
    Empty,
    Failed(TranscriptError),
}

impl Outcome {
    pub fn into_result(self) -> Option<TranscriptResult> {
        match self {
            Outcome::Found(result) => Some(result),
            Outcome::Empty | Outcome::Failed(_) => None,
        }
    }
}

pub fn find_manual<'a>(handles: &'a [TranscriptHandle], lang: &str) -> Option<&'a TranscriptHandle> {
    handles.iter().find(|h| !h.is_generated && h.language_code == lang)
}

pub fn find_generated<'a>(handles: &'a [TranscriptHandle], lang: &str) -> Option<&'a TranscriptHandle> {
    handles.iter().find(|h| h.is_generated && h.language_code == lang)
}

/// Pick a manual transcript in `lang`, else a generated one in `lang`, else the first listed
pub fn select_transcript<'a>(handles: &'a [TranscriptHandle], lang: &str) -> Option<&'a TranscriptHandle> {
    find_manual(handles, lang)
        .or_else(|| find_generated(handles, lang))
        .or_else(|| handles.first())
}

/// Join fragment texts in order with single spaces
pub fn join_segments(segments: &[Segment]) -> String {
    segments.iter().map(|s| s.text.as_str()).collect::<Vec<_>>().join(" ")
}

/// List, select and fetch the transcript for `video_id`, logging each step
pub async fn retrieve<P, J>(provider: &P, journal: &mut J, video_id: &str, lang: &str) -> Outcome
where
    P: TranscriptProvider,
    J: Journal,
{
    let handles = match provider.list_transcripts(video_id).await {
        Ok(handles) => handles,
        Err(source) => {
            let err = match source {
                ProviderError::TranscriptsDisabled(_) => TranscriptError::NoTranscriptAvailable {
                    video_id: video_id.to_string(),
                    source: Some(source),
                },
                source => TranscriptError::LookupFailed {
                    video_id: video_id.to_string(),
                    source,
                },
            };
            return fail(journal, lang, err);
        }
    };
    debug!("Provider listed {} transcripts for {video_id}", handles.len());

    let Some(handle) = select_transcript(&handles, lang) else {
        let err = TranscriptError::NoTranscriptAvailable {
            video_id: video_id.to_string(),
            source: None,
        };
        return fail(journal, lang, err);
    };

    journal.record(&format!(
        "✅ Found transcript in {} ({})",
        handle.language,
        handle.kind()
    ));

    let segments = match provider.fetch(handle).await {
        Ok(segments) => segments,
        Err(source) => {
            let err = TranscriptError::FetchFailed {
                video_id: video_id.to_string(),
                language_code: handle.language_code.clone(),
                source,
            };
            return fail(journal, lang, err);
        }
    };

    if segments.is_empty() {
        journal.record("⚠️ Transcript fetch returned empty.");
        return Outcome::Empty;
    }

    Outcome::Found(TranscriptResult {
        video_id: video_id.to_string(),
        language: handle.language_code.clone(),
        is_generated: handle.is_generated,
        text: join_segments(&segments),
    })
}

fn fail<J: Journal>(journal: &mut J, lang: &str, err: TranscriptError) -> Outcome {
    let message = match &err {
        TranscriptError::NoTranscriptAvailable { .. } => {
            format!("❌ No transcript available in language '{lang}'.")
        }
        TranscriptError::LookupFailed { .. } => format!("❌ Error while fetching transcript: {err}"),
        TranscriptError::FetchFailed { .. } => {
            format!("❌ Failed to fetch actual transcript content: {err}")
        }
    };
    journal.record(&message);
    journal.record(&error_chain(&err));
    Outcome::Failed(err)
}
