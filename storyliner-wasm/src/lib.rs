//! WASM bindings for storyliner — powers the browser swipe-and-sequence UI.

use wasm_bindgen::prelude::*;

use storyliner::core::catalog::{parse_catalog, parse_categories};
use storyliner::core::store::StorylineStore;
use storyliner::schema::category::CategoryRegistry;
use storyliner::schema::prompt::{Prompt, PromptId};

// ---------------------------------------------------------------------------
// Embedded demo data — compiled into the WASM binary
// ---------------------------------------------------------------------------
mod data {
    pub const DEMO_CATALOG: &str = include_str!("../../catalog_data/demo/catalog.ron");
    pub const DEMO_CATEGORIES: &str = include_str!("../../catalog_data/demo/categories.ron");
}

// ---------------------------------------------------------------------------
// JSON helper types for communication across the WASM boundary
// ---------------------------------------------------------------------------
#[derive(serde::Serialize)]
struct CardInfo<'a> {
    id: &'a str,
    title: &'a str,
    prompt_text: &'a str,
    image_ref: &'a str,
    mood: &'a str,
    shot_type: &'a str,
    tags: &'a [String],
}

#[derive(serde::Serialize)]
struct ProgressInfo {
    reviewed: usize,
    total: usize,
    exhausted: bool,
}

fn card_json(prompt: &Prompt) -> Result<String, JsError> {
    let info = CardInfo {
        id: prompt.id.as_str(),
        title: &prompt.title,
        prompt_text: &prompt.prompt_text,
        image_ref: &prompt.image_ref,
        mood: &prompt.mood,
        shot_type: &prompt.shot_type,
        tags: &prompt.tags,
    };
    serde_json::to_string(&info).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

fn cards_json(prompts: &[Prompt]) -> Result<String, JsError> {
    let infos: Vec<CardInfo<'_>> = prompts
        .iter()
        .map(|p| CardInfo {
            id: p.id.as_str(),
            title: &p.title,
            prompt_text: &p.prompt_text,
            image_ref: &p.image_ref,
            mood: &p.mood,
            shot_type: &p.shot_type,
            tags: &p.tags,
        })
        .collect();
    serde_json::to_string(&infos).map_err(|e| JsError::new(&format!("Serialization error: {e}")))
}

// ---------------------------------------------------------------------------
// StorylineSession — the main exported struct
// ---------------------------------------------------------------------------
#[wasm_bindgen]
pub struct StorylineSession {
    store: StorylineStore,
    registry: CategoryRegistry,
}

#[wasm_bindgen]
impl StorylineSession {
    /// Create a session preloaded with the embedded demo catalog.
    #[wasm_bindgen(constructor)]
    pub fn new() -> Result<StorylineSession, JsError> {
        let prompts = parse_catalog(data::DEMO_CATALOG)
            .map_err(|e| JsError::new(&format!("Catalog parse error: {e}")))?;
        let registry = parse_categories(data::DEMO_CATEGORIES)
            .map_err(|e| JsError::new(&format!("Category parse error: {e}")))?;

        let mut store = StorylineStore::new();
        store.set_all_prompts(prompts);

        Ok(StorylineSession { store, registry })
    }

    /// Replace the catalog with prompts parsed from a JSON array using the
    /// catalog field spelling (`promptText`, `imageRef`, `shotType`, ...).
    pub fn load_catalog_json(&mut self, json: &str) -> Result<(), JsError> {
        let prompts: Vec<Prompt> = serde_json::from_str(json)
            .map_err(|e| JsError::new(&format!("Invalid catalog JSON: {e}")))?;
        self.store.set_all_prompts(prompts);
        Ok(())
    }

    /// JSON array of `{id, name, description}` category records.
    pub fn categories(&self) -> Result<String, JsError> {
        let categories: Vec<_> = self.registry.iter().collect();
        serde_json::to_string(&categories)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    /// Select a category by name; the swipe flow restarts at the head.
    pub fn select_category(&mut self, name: &str) {
        self.store.set_active_category(Some(name));
    }

    /// Clear the category filter; the swipe flow restarts over the catalog.
    pub fn clear_category(&mut self) {
        self.store.set_active_category(None);
    }

    /// The current card as JSON, or `null` once the view is exhausted.
    pub fn current_card(&self) -> Result<String, JsError> {
        match self.store.current_prompt() {
            Some(prompt) => card_json(prompt),
            None => Ok("null".to_string()),
        }
    }

    /// `{reviewed, total, exhausted}` for the progress indicator.
    pub fn progress(&self) -> Result<String, JsError> {
        let total = self.store.filtered_prompts().len();
        let info = ProgressInfo {
            reviewed: self.store.cursor().min(total),
            total,
            exhausted: self.store.is_exhausted(),
        };
        serde_json::to_string(&info)
            .map_err(|e| JsError::new(&format!("Serialization error: {e}")))
    }

    pub fn swipe_left(&mut self) {
        self.store.swipe_left();
    }

    pub fn swipe_right(&mut self) {
        self.store.swipe_right();
    }

    /// The curated tray as a JSON array of cards.
    pub fn tray(&self) -> Result<String, JsError> {
        cards_json(self.store.curated())
    }

    /// The storyline canvas as a JSON array of cards, in order.
    pub fn canvas(&self) -> Result<String, JsError> {
        cards_json(self.store.sequence())
    }

    pub fn move_to_sequence(&mut self, id: &str) {
        self.store.move_to_sequence(&PromptId::from(id));
    }

    pub fn remove_from_sequence(&mut self, id: &str) {
        self.store.remove_from_sequence(&PromptId::from(id));
    }

    pub fn reorder_sequence(&mut self, from: usize, to: usize) {
        self.store.reorder_sequence(from, to);
    }

    /// The export document as JSON, ready for download by the host page.
    pub fn export(&self) -> Result<String, JsError> {
        self.store
            .export()
            .to_json()
            .map_err(|e| JsError::new(&format!("Export error: {e}")))
    }

    /// Clear tray, canvas, cursor, and category selection; keep the catalog.
    pub fn reset(&mut self) {
        self.store.reset_session();
    }
}
