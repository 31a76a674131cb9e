use serde::{Deserialize, Serialize};

use crate::domain::content_type::ContentType;

/// A user's like of an arbitrary record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LikedItem {
    pub id: i32,
    pub user_id: i32,
    pub content_type: ContentType,
    pub object_id: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewLikedItem {
    pub user_id: i32,
    pub content_type: ContentType,
    pub object_id: i32,
}
