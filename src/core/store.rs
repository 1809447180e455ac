//! The storyline store — session state and every transition over it.
//!
//! Three ordered collections live here: the catalog (all prompts loaded for
//! the session), the curated set (prompts approved by swiping right), and
//! the sequence (the final storyline order). A prompt is in at most one of
//! curated set and sequence at any observable point; transfers between them
//! are single synchronous methods, so no caller can see a half-applied move.

use crate::core::export::{StorylineExport, DEFAULT_STORYLINE_TITLE};
use crate::schema::prompt::{Prompt, PromptId};

/// The session state container. All mutation goes through these methods;
/// there are no ambient globals. Normal misuse — removing an absent
/// identity, reordering with bad indices, swiping past the end — is a
/// silent no-op, never a panic.
#[derive(Debug, Clone, Default)]
pub struct StorylineStore {
    prompts: Vec<Prompt>,
    curated: Vec<Prompt>,
    sequence: Vec<Prompt>,
    active_category: Option<String>,
    cursor: usize,
}

impl StorylineStore {
    pub fn new() -> Self {
        Self::default()
    }

    // --- Catalog ---

    /// Wholesale catalog replacement. The catalog is otherwise immutable
    /// for the session.
    pub fn set_all_prompts(&mut self, prompts: Vec<Prompt>) {
        self.prompts = prompts;
    }

    pub fn all_prompts(&self) -> &[Prompt] {
        &self.prompts
    }

    // --- Selection filter ---

    /// Set (or clear) the active category and restart the swipe flow at the
    /// head of the newly filtered view. The cursor reset is part of the same
    /// transition so a stale index can never point past the new view.
    pub fn set_active_category(&mut self, category: Option<&str>) {
        self.active_category = category.map(|c| c.to_string());
        self.cursor = 0;
    }

    pub fn active_category(&self) -> Option<&str> {
        self.active_category.as_deref()
    }

    /// The catalog filtered by the active category, in catalog order.
    ///
    /// Recomputed on every read — never cached — so it cannot go stale
    /// against the catalog or the filter. No active category means the
    /// catalog verbatim.
    pub fn filtered_prompts(&self) -> Vec<&Prompt> {
        match self.active_category.as_deref() {
            Some(category) => self
                .prompts
                .iter()
                .filter(|p| p.in_category(category))
                .collect(),
            None => self.prompts.iter().collect(),
        }
    }

    // --- Swipe cursor ---

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The prompt currently presented, or `None` once the view is exhausted.
    pub fn current_prompt(&self) -> Option<&Prompt> {
        self.filtered_prompts().get(self.cursor).copied()
    }

    /// True once the cursor has run past the filtered view.
    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.filtered_prompts().len()
    }

    /// Move the cursor forward by exactly one. Never clamps: callers check
    /// exhaustion before presenting, and an over-run cursor simply yields
    /// no current prompt.
    pub fn advance(&mut self) {
        self.cursor += 1;
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    /// Skip the current prompt.
    pub fn swipe_left(&mut self) {
        self.advance();
    }

    /// Approve the current prompt into the curated set, then advance.
    /// On an exhausted view the curated set is left untouched.
    pub fn swipe_right(&mut self) {
        if let Some(prompt) = self.current_prompt().cloned() {
            self.add_to_curated(prompt);
        }
        self.advance();
    }

    // --- Curated set ---

    pub fn curated(&self) -> &[Prompt] {
        &self.curated
    }

    /// Append a prompt to the curated set tail. Rejected (no-op) when the
    /// identity is already held by the curated set or the sequence, so the
    /// cross-collection invariant survives out-of-order calls.
    pub fn add_to_curated(&mut self, prompt: Prompt) {
        if self.holds_identity(&prompt.id) {
            return;
        }
        self.curated.push(prompt);
    }

    /// Remove the curated entry with this identity, if any. Relative order
    /// of the remaining entries is preserved.
    pub fn remove_from_curated(&mut self, id: &PromptId) {
        if let Some(pos) = self.curated.iter().position(|p| &p.id == id) {
            self.curated.remove(pos);
        }
    }

    // --- Sequence ---

    pub fn sequence(&self) -> &[Prompt] {
        &self.sequence
    }

    /// Transfer a curated prompt to the sequence tail, as one transition.
    /// An identity not currently in the curated set is rejected (no-op):
    /// the curated set is the only entry path into the sequence.
    pub fn move_to_sequence(&mut self, id: &PromptId) {
        if let Some(pos) = self.curated.iter().position(|p| &p.id == id) {
            let prompt = self.curated.remove(pos);
            self.sequence.push(prompt);
        }
    }

    /// Remove a sequence entry and return it to the curated set tail (not
    /// its prior position), as one transition. No-op when the identity is
    /// not sequenced, leaving both collections untouched.
    pub fn remove_from_sequence(&mut self, id: &PromptId) {
        if let Some(pos) = self.sequence.iter().position(|p| &p.id == id) {
            let prompt = self.sequence.remove(pos);
            self.curated.push(prompt);
        }
    }

    /// Move the sequence entry at `from` so it lands at `to` in the
    /// resulting list — a single-element move, not a swap. Out-of-range
    /// indices are a no-op rather than a corruption.
    pub fn reorder_sequence(&mut self, from: usize, to: usize) {
        let len = self.sequence.len();
        if from >= len || to >= len || from == to {
            return;
        }
        let prompt = self.sequence.remove(from);
        self.sequence.insert(to, prompt);
    }

    // --- Session ---

    /// Start over: clear the curated set, the sequence, the cursor, and the
    /// active category. The loaded catalog is kept.
    pub fn reset_session(&mut self) {
        self.curated.clear();
        self.sequence.clear();
        self.active_category = None;
        self.cursor = 0;
    }

    // --- Export ---

    /// Snapshot the sequence into an export document. Read-only: nothing in
    /// the store changes. The title is the active category name when one is
    /// set, else the stock default.
    pub fn export(&self) -> StorylineExport {
        let title = self
            .active_category
            .clone()
            .unwrap_or_else(|| DEFAULT_STORYLINE_TITLE.to_string());
        StorylineExport::from_sequence(&self.sequence, &title)
    }

    /// Snapshot the sequence under an explicit title.
    pub fn export_as(&self, title: &str) -> StorylineExport {
        StorylineExport::from_sequence(&self.sequence, title)
    }

    fn holds_identity(&self, id: &PromptId) -> bool {
        self.curated.iter().any(|p| &p.id == id) || self.sequence.iter().any(|p| &p.id == id)
    }
}
