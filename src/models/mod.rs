use serde::{Deserialize, Serialize};

pub(crate) const DEFAULT_CATEGORY_COLOR: &str = "#3498db";

fn default_color() -> String {
    DEFAULT_CATEGORY_COLOR.to_string()
}

/// A genre. Parent of zero or more bands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Category {
    pub id: i64,
    pub name: String,
    #[serde(default = "default_color")]
    pub color: String,
}

/// A band, always filed under exactly one genre.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Note {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub category_id: i64,

    /// Denormalized copy embedded by the backend. Read-only.
    #[serde(default)]
    pub category: Option<Category>,

    #[serde(default)]
    pub created_at: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct CategoryPayload {
    pub name: String,
    pub color: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub(crate) struct NotePayload {
    pub title: String,
    pub content: String,
    pub category_id: i64,
}
