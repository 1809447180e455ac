//! Export serializer — snapshots a sequence into the storyline document.
//!
//! The JSON shape produced here is the compatibility surface consumers of
//! exported storylines depend on; field names and the 1-based `sequence`
//! numbering are fixed.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::schema::prompt::Prompt;

/// Storyline title used when no category is active.
pub const DEFAULT_STORYLINE_TITLE: &str = "My New Video Project";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// One exported record, corresponding to one sequence entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShotRecord {
    /// 1-based position within the storyline.
    pub sequence: usize,
    pub title: String,
    pub prompt_text: String,
    pub image_ref: String,
    pub mood: String,
    pub shot_type: String,
    pub category: String,
    pub tags: Vec<String>,
}

/// The versioned export document: a title, a stamp, and the ordered shots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorylineExport {
    pub storyline_title: String,
    /// ISO 8601, millisecond precision, `Z` suffix.
    pub export_date: String,
    pub total_shots: usize,
    pub shots: Vec<ShotRecord>,
}

impl StorylineExport {
    /// Snapshot a sequence, stamped with the current time.
    pub fn from_sequence(sequence: &[Prompt], title: &str) -> Self {
        Self::from_sequence_at(sequence, title, Utc::now())
    }

    /// Snapshot a sequence with an explicit stamp. Useful wherever the
    /// export date must be reproducible.
    pub fn from_sequence_at(sequence: &[Prompt], title: &str, at: DateTime<Utc>) -> Self {
        let shots = sequence
            .iter()
            .enumerate()
            .map(|(index, prompt)| ShotRecord {
                sequence: index + 1,
                title: prompt.title.clone(),
                prompt_text: prompt.prompt_text.clone(),
                image_ref: prompt.image_ref.clone(),
                mood: prompt.mood.clone(),
                shot_type: prompt.shot_type.clone(),
                category: prompt.category.clone(),
                tags: prompt.tags.clone(),
            })
            .collect::<Vec<_>>();

        Self {
            storyline_title: title.to_string(),
            export_date: at.to_rfc3339_opts(SecondsFormat::Millis, true),
            total_shots: shots.len(),
            shots,
        }
    }

    /// Pretty-printed JSON, as written to disk.
    pub fn to_json(&self) -> Result<String, ExportError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Deliver the document to a file. A failure here leaves all in-memory
    /// state intact; retrying the export is always valid.
    pub fn write_to_file(&self, path: &Path) -> Result<(), ExportError> {
        std::fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

/// File name for a persisted export: `storyline_<millisecond-epoch>.json`.
pub fn export_filename(at: DateTime<Utc>) -> String {
    format!("storyline_{}.json", at.timestamp_millis())
}
