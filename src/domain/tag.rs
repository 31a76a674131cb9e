use serde::{Deserialize, Serialize};

use crate::domain::content_type::ContentType;
use crate::pagination::Pagination;

/// Free-form label that can be attached to any record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTag {
    pub label: String,
}

impl NewTag {
    /// Construct a new tag payload with a trimmed label.
    pub fn new(label: impl Into<String>) -> Self {
        let label = label.into().trim().to_string();
        Self { label }
    }
}

/// Association of a tag with a `(content type, object id)` pair.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TaggedItem {
    pub id: i32,
    pub tag_id: i32,
    pub content_type: ContentType,
    pub object_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTaggedItem {
    pub tag_id: i32,
    pub content_type: ContentType,
    pub object_id: i32,
}

/// Query definition used to list tags.
#[derive(Debug, Clone, Default)]
pub struct TagListQuery {
    /// Optional case-insensitive substring search on the label.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl TagListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
