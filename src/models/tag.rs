use diesel::prelude::*;

use crate::domain::content_type::UnknownContentType;
use crate::domain::tag::{
    NewTag as DomainNewTag, NewTaggedItem as DomainNewTaggedItem, Tag as DomainTag,
    TaggedItem as DomainTaggedItem,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::tags)]
pub struct Tag {
    pub id: i32,
    pub label: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::tagged_items)]
#[diesel(belongs_to(Tag, foreign_key = tag_id))]
pub struct TaggedItem {
    pub id: i32,
    pub tag_id: i32,
    pub content_type: String,
    pub object_id: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tags)]
pub struct NewTag<'a> {
    pub label: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::tagged_items)]
pub struct NewTaggedItem<'a> {
    pub tag_id: i32,
    pub content_type: &'a str,
    pub object_id: i32,
}

impl From<Tag> for DomainTag {
    fn from(value: Tag) -> Self {
        Self {
            id: value.id,
            label: value.label,
        }
    }
}

impl TryFrom<TaggedItem> for DomainTaggedItem {
    type Error = UnknownContentType;

    fn try_from(value: TaggedItem) -> Result<Self, Self::Error> {
        Ok(Self {
            id: value.id,
            tag_id: value.tag_id,
            content_type: value.content_type.parse()?,
            object_id: value.object_id,
        })
    }
}

impl<'a> From<&'a DomainNewTag> for NewTag<'a> {
    fn from(value: &'a DomainNewTag) -> Self {
        Self {
            label: value.label.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewTaggedItem> for NewTaggedItem<'a> {
    fn from(value: &'a DomainNewTaggedItem) -> Self {
        Self {
            tag_id: value.tag_id,
            content_type: value.content_type.as_str(),
            object_id: value.object_id,
        }
    }
}
