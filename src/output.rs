use std::path::Path;

use eyre::{Result, WrapErr};
use log::debug;

use crate::TranscriptResult;

/// Render a result as indented JSON
pub fn render_json(result: &TranscriptResult) -> Result<String> {
    Ok(serde_json::to_string_pretty(result)?)
}

/// Write a result to `path`, replacing any previous output
pub fn save(path: &Path, result: &TranscriptResult) -> Result<()> {
    std::fs::write(path, render_json(result)?).wrap_err_with(|| format!("could not write {}", path.display()))?;
    debug!("Wrote transcript for {} to {}", result.video_id, path.display());
    Ok(())
}

pub fn load(path: &Path) -> Result<TranscriptResult> {
    let data = std::fs::read_to_string(path).wrap_err_with(|| format!("could not read {}", path.display()))?;
    let result = serde_json::from_str(&data).wrap_err_with(|| format!("could not parse {}", path.display()))?;
    Ok(result)
}
