//! Catalog loading — RON files supplying prompts and the category registry.
//!
//! The store accepts whatever it is handed; presence-level validation lives
//! here, on the loading side, where malformed input can still be reported.

use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

use crate::schema::category::{Category, CategoryRegistry};
use crate::schema::prompt::{Prompt, PromptId};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Parse a catalog from RON source: a list of prompt records.
pub fn parse_catalog(input: &str) -> Result<Vec<Prompt>, CatalogError> {
    Ok(ron::from_str(input)?)
}

/// Load a catalog from a RON file.
pub fn load_catalog(path: &Path) -> Result<Vec<Prompt>, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    parse_catalog(&contents)
}

/// Parse a category registry from RON source: a list of category records,
/// in registration order.
pub fn parse_categories(input: &str) -> Result<CategoryRegistry, CatalogError> {
    let entries: Vec<Category> = ron::from_str(input)?;
    let mut registry = CategoryRegistry::new();
    for entry in entries {
        registry.register(entry);
    }
    Ok(registry)
}

/// Load a category registry from a RON file.
pub fn load_categories(path: &Path) -> Result<CategoryRegistry, CatalogError> {
    let contents = std::fs::read_to_string(path)?;
    parse_categories(&contents)
}

/// Identities that appear more than once, in first-appearance order.
pub fn duplicate_ids(prompts: &[Prompt]) -> Vec<PromptId> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    let mut duplicates = Vec::new();
    for prompt in prompts {
        if !seen.insert(&prompt.id) && reported.insert(&prompt.id) {
            duplicates.push(prompt.id.clone());
        }
    }
    duplicates
}

/// Category labels present in a catalog, in first-appearance order.
pub fn distinct_categories(prompts: &[Prompt]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut categories = Vec::new();
    for prompt in prompts {
        if seen.insert(prompt.category.as_str()) {
            categories.push(prompt.category.clone());
        }
    }
    categories
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_RON: &str = r#"[
        (
            id: "bhajan-001",
            title: "Temple Dawn",
            promptText: "A temple courtyard at first light",
            imageRef: "https://img.example/bhajan-001.jpg",
            tags: ["devotional", "sunrise"],
            mood: "serene",
            category: "Bhajans",
            shotType: "wide",
            createdAt: "2024-03-01T09:00:00Z",
        ),
        (
            id: "cartoon-001",
            title: "Rooftop Chase",
            promptText: "A cartoon fox leaping across rooftops",
            imageRef: "https://img.example/cartoon-001.jpg",
            tags: ["action"],
            mood: "playful",
            category: "Cartoons",
            shotType: "tracking",
            createdAt: "2024-03-02T10:00:00Z",
        ),
    ]"#;

    #[test]
    fn parse_catalog_from_ron() {
        let prompts = parse_catalog(CATALOG_RON).unwrap();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].id, PromptId::new("bhajan-001"));
        assert_eq!(prompts[1].category, "Cartoons");
        assert!(prompts[0].has_tag("sunrise"));
    }

    #[test]
    fn parse_catalog_rejects_malformed_input() {
        assert!(parse_catalog("not ron at all [").is_err());
    }

    #[test]
    fn parse_categories_from_ron() {
        let src = r#"[
            (id: "bhajans", name: "Bhajans", description: "Devotional music videos"),
            (id: "cartoons", name: "Cartoons", description: "Animated stories"),
        ]"#;
        let registry = parse_categories(src).unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get("bhajans").unwrap().name, "Bhajans");
    }

    #[test]
    fn duplicate_ids_reported_once() {
        let mut prompts = parse_catalog(CATALOG_RON).unwrap();
        prompts.push(prompts[0].clone());
        prompts.push(prompts[0].clone());
        let dups = duplicate_ids(&prompts);
        assert_eq!(dups, vec![PromptId::new("bhajan-001")]);
    }

    #[test]
    fn no_duplicates_in_clean_catalog() {
        let prompts = parse_catalog(CATALOG_RON).unwrap();
        assert!(duplicate_ids(&prompts).is_empty());
    }

    #[test]
    fn distinct_categories_in_first_appearance_order() {
        let mut prompts = parse_catalog(CATALOG_RON).unwrap();
        prompts.push(prompts[0].clone());
        let categories = distinct_categories(&prompts);
        assert_eq!(categories, vec!["Bhajans", "Cartoons"]);
    }
}
