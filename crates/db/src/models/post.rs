//! Post entity model and draft DTO.

use blogpad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `posts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
pub struct Post {
    pub id: DbId,
    pub title: String,
    pub content: String,
    pub category: String,
    /// Stored as `TEXT[]`; order is preserved exactly as written.
    pub tags: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Post {
    /// Overwrite every mutable field with the draft's values.
    ///
    /// This is a full replace: empty draft fields clear the post's fields.
    pub fn apply(&mut self, draft: PostDraft) {
        self.title = draft.title;
        self.content = draft.content;
        self.category = draft.category;
        self.tags = draft.tags;
    }
}

/// Caller-supplied post fields for create and replace.
///
/// Fields omitted from the JSON body deserialize to empty values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PostDraft {
    pub title: String,
    pub content: String,
    pub category: String,
    pub tags: Vec<String>,
}
