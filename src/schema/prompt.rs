use serde::{Deserialize, Serialize};
use std::fmt;

/// Newtype wrapper for prompt IDs. Identity is the only field the
/// collections treat as unique.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PromptId(pub String);

impl PromptId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PromptId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PromptId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// A prompt is one catalog entry: a reusable instruction text paired with
/// a reference image and display metadata.
///
/// Prompts are immutable once loaded — the store moves them between
/// collections but never rewrites their fields. Field names serialize in
/// camelCase so catalog files and the export document share one spelling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prompt {
    pub id: PromptId,
    pub title: String,
    pub prompt_text: String,
    pub image_ref: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub mood: String,
    pub category: String,
    pub shot_type: String,
    pub created_at: String,
}

impl Prompt {
    /// Returns true if this prompt carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }

    /// Exact string equality on the category label.
    pub fn in_category(&self, category: &str) -> bool {
        self.category == category
    }
}
