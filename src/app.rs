use std::path::PathBuf;

use eyre::{Result, WrapErr};
use log::debug;

use crate::config::{self, Config, Input};
use crate::journal::Journal;
use crate::provider::TranscriptProvider;
use crate::transcript;
use crate::{extract_video_id, output};

/// Locations of the files a run reads and writes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub config: PathBuf,
    pub input: PathBuf,
    pub output: PathBuf,
    pub log: PathBuf,
}

impl Default for Paths {
    fn default() -> Self {
        Self {
            config: PathBuf::from(config::CONFIG_FILE),
            input: PathBuf::from(config::INPUT_FILE),
            output: PathBuf::from(config::OUTPUT_FILE),
            log: PathBuf::from(config::LOG_FILE),
        }
    }
}

/// How a run ended when it did not hit a fatal error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Saved,
    MissingUrl,
    NotRetrieved,
}

/// Load config and input, fetch the transcript and write it to `paths.output`
pub async fn run<P, J>(paths: &Paths, provider: &P, journal: &mut J) -> Result<RunStatus>
where
    P: TranscriptProvider,
    J: Journal,
{
    let config = Config::load(&paths.config)?;
    let input = Input::load(&paths.input)?;
    debug!("Requested language: {}", config.lang);

    let Some(url) = input.url() else {
        journal.record(&format!("❌ No URL provided in {}", paths.input.display()));
        return Ok(RunStatus::MissingUrl);
    };

    let video_id = match extract_video_id(url) {
        Ok(id) => id,
        Err(e) => {
            journal.record(&format!("❌ {e}"));
            return Err(e).wrap_err_with(|| format!("could not extract video ID from {url}"));
        }
    };
    debug!("Video ID: {video_id}");

    let outcome = transcript::retrieve(provider, journal, &video_id, &config.lang).await;
    let Some(result) = outcome.into_result() else {
        journal.record("⚠️ Transcript could not be retrieved.");
        return Ok(RunStatus::NotRetrieved);
    };

    if let Err(e) = output::save(&paths.output, &result) {
        journal.record(&format!("❌ {e:#}"));
        return Err(e);
    }
    journal.record(&format!("✅ Transcript saved to {}", paths.output.display()));
    Ok(RunStatus::Saved)
}
