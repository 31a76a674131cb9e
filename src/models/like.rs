use diesel::prelude::*;

use crate::domain::content_type::UnknownContentType;
use crate::domain::like::{LikedItem as DomainLikedItem, NewLikedItem as DomainNewLikedItem};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::liked_items)]
pub struct LikedItem {
    pub id: i32,
    pub user_id: i32,
    pub content_type: String,
    pub object_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::liked_items)]
pub struct NewLikedItem<'a> {
    pub user_id: i32,
    pub content_type: &'a str,
    pub object_id: i32,
}

impl TryFrom<LikedItem> for DomainLikedItem {
    type Error = UnknownContentType;

    fn try_from(value: LikedItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            user_id: value.user_id,
            content_type: value.content_type.parse()?,
            object_id: value.object_id,
        })
    }
}

impl<'a> From<&'a DomainNewLikedItem> for NewLikedItem<'a> {
    fn from(value: &'a DomainNewLikedItem) -> Self {
        Self {
            user_id: value.user_id,
            content_type: value.content_type.as_str(),
            object_id: value.object_id,
        }
    }
}
