use serde::{Deserialize, Serialize};

/// A selectable category used to parameterize the swipe flow's filter.
///
/// The store itself only consumes the bare `name` string; the rest of the
/// record exists for presentation layers listing what can be selected.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub description: String,
}

/// Ordered registry of selectable categories.
#[derive(Debug, Clone, Default)]
pub struct CategoryRegistry {
    categories: Vec<Category>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self {
            categories: Vec::new(),
        }
    }

    /// Add a category, replacing any existing entry with the same id.
    pub fn register(&mut self, category: Category) {
        if let Some(existing) = self.categories.iter_mut().find(|c| c.id == category.id) {
            *existing = category;
        } else {
            self.categories.push(category);
        }
    }

    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn by_name(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// The stock category set shipped with the product.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for (id, name, description) in [
            ("bhajans", "Bhajans", "Devotional music videos"),
            ("cartoons", "Cartoons", "Animated stories"),
            ("jewelry", "Jewelry", "Product showcases"),
            ("skincare", "Skincare", "Beauty & wellness content"),
            (
                "traditional-clothes",
                "Indian Traditional Clothes",
                "Fashion & cultural wear",
            ),
            ("music-videos", "Music Videos", "Musical performances"),
        ] {
            registry.register(Category {
                id: id.to_string(),
                name: name.to_string(),
                description: description.to_string(),
            });
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_has_six_categories() {
        let registry = CategoryRegistry::builtin();
        assert_eq!(registry.len(), 6);
        assert!(registry.get("bhajans").is_some());
        assert!(registry.get("music-videos").is_some());
    }

    #[test]
    fn lookup_by_name() {
        let registry = CategoryRegistry::builtin();
        let cat = registry.by_name("Indian Traditional Clothes").unwrap();
        assert_eq!(cat.id, "traditional-clothes");
    }

    #[test]
    fn register_replaces_same_id() {
        let mut registry = CategoryRegistry::new();
        registry.register(Category {
            id: "bhajans".to_string(),
            name: "Bhajans".to_string(),
            description: "old".to_string(),
        });
        registry.register(Category {
            id: "bhajans".to_string(),
            name: "Bhajans".to_string(),
            description: "new".to_string(),
        });
        assert_eq!(registry.len(), 1);
        assert_eq!(registry.get("bhajans").unwrap().description, "new");
    }

    #[test]
    fn iteration_preserves_registration_order() {
        let registry = CategoryRegistry::builtin();
        let ids: Vec<&str> = registry.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids[0], "bhajans");
        assert_eq!(ids[5], "music-videos");
    }

    #[test]
    fn empty_registry() {
        let registry = CategoryRegistry::new();
        assert!(registry.is_empty());
        assert!(registry.get("anything").is_none());
        assert!(registry.by_name("anything").is_none());
    }
}
