//! Type definitions for the `resources` table rows
//!
//! These mirror the columns of the Supabase `resources` table.

use serde::{Deserialize, Serialize};

/// What kind of thing a resource is. Chosen once at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Image,
    Link,
    Note,
}

impl ResourceKind {
    pub fn label(&self) -> &'static str {
        match self {
            ResourceKind::Image => "Image",
            ResourceKind::Link => "Link",
            ResourceKind::Note => "Note",
        }
    }

    /// Label shown on the modal's type-picker buttons.
    pub fn picker_label(&self) -> &'static str {
        match self {
            ResourceKind::Image => "Upload Image",
            ResourceKind::Link => "Paste Link",
            ResourceKind::Note => "Write Note",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ResourceKind::Image => "\u{1F5BC}",  // 🖼
            ResourceKind::Link => "\u{1F517}",   // 🔗
            ResourceKind::Note => "\u{1F4DD}",   // 📝
        }
    }

    pub fn variants() -> &'static [ResourceKind] {
        &[ResourceKind::Image, ResourceKind::Link, ResourceKind::Note]
    }
}

/// Closed set of categories a resource is filed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Jobs,
    Education,
    Songs,
    Politics,
    Ideas,
    Cost,
}

impl Category {
    pub fn label(&self) -> &'static str {
        match self {
            Category::Jobs => "Jobs",
            Category::Education => "Education",
            Category::Songs => "Songs",
            Category::Politics => "Politics",
            Category::Ideas => "Ideas",
            Category::Cost => "Cost",
        }
    }

    pub fn from_label(label: &str) -> Option<Category> {
        Category::variants().iter().copied().find(|c| c.label() == label)
    }

    pub fn variants() -> &'static [Category] {
        &[
            Category::Jobs,
            Category::Education,
            Category::Songs,
            Category::Politics,
            Category::Ideas,
            Category::Cost,
        ]
    }
}

/// A saved resource row. `id` and `created_at` are assigned by the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Resource {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub content: String,
    pub category: Category,
    pub created_at: String,
    pub last_apply_date: Option<String>,
}

/// Insert payload: everything the client supplies for a new row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewResource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    pub content: String,
    pub category: Category,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_apply_date: Option<String>,
}
