//! Global state management

use dioxus::prelude::*;

use crate::types::{Category, Resource};

/// Client-side category filter applied to the fetched collection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn label(&self) -> &'static str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub fn matches(&self, resource: &Resource) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => resource.category == *category,
        }
    }

    pub fn variants() -> &'static [CategoryFilter] {
        &[
            CategoryFilter::All,
            CategoryFilter::Only(Category::Jobs),
            CategoryFilter::Only(Category::Education),
            CategoryFilter::Only(Category::Songs),
            CategoryFilter::Only(Category::Politics),
            CategoryFilter::Only(Category::Ideas),
            CategoryFilter::Only(Category::Cost),
        ]
    }
}

/// Add-resource modal open/closed state, shared through context.
#[derive(Clone, Copy)]
pub struct AddModalState {
    pub is_open: Signal<bool>,
}

impl AddModalState {
    pub fn new() -> Self {
        Self {
            is_open: Signal::new(false),
        }
    }

    pub fn open(&self) {
        let mut is_open = self.is_open;
        is_open.set(true);
    }

    pub fn close(&self) {
        let mut is_open = self.is_open;
        is_open.set(false);
    }
}

/// Hook to access the modal state from any component under the shell.
pub fn use_add_modal() -> AddModalState {
    use_context::<AddModalState>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ResourceKind;

    fn resource(category: Category) -> Resource {
        Resource {
            id: 1,
            kind: ResourceKind::Note,
            title: "t".to_string(),
            content: "c".to_string(),
            category,
            created_at: "2024-01-01T00:00:00+00:00".to_string(),
            last_apply_date: None,
        }
    }

    #[test]
    fn test_all_matches_everything() {
        for category in Category::variants() {
            assert!(CategoryFilter::All.matches(&resource(*category)));
        }
    }

    #[test]
    fn test_only_matches_exact_category() {
        let filter = CategoryFilter::Only(Category::Songs);
        assert!(filter.matches(&resource(Category::Songs)));
        assert!(!filter.matches(&resource(Category::Jobs)));
    }

    #[test]
    fn test_variants_cover_every_category() {
        // One chip per category plus All.
        assert_eq!(
            CategoryFilter::variants().len(),
            Category::variants().len() + 1
        );
    }
}
