use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::collection::{NewCollection, UpdateCollection};
use crate::forms::sanitize_inline_text;

const TITLE_MAX_LEN: u64 = 255;

pub type CollectionFormResult<T> = Result<T, CollectionFormError>;

#[derive(Debug, Error)]
pub enum CollectionFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("collection title cannot be empty")]
    EmptyTitle,
}

/// Payload for `POST /collections`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCollectionForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    #[validate(range(min = 1))]
    pub featured_product_id: Option<i32>,
}

impl AddCollectionForm {
    pub fn into_new_collection(self) -> CollectionFormResult<NewCollection> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(CollectionFormError::EmptyTitle);
        }

        let mut collection = NewCollection::new(title);
        if let Some(product_id) = self.featured_product_id {
            collection = collection.with_featured_product_id(product_id);
        }

        Ok(collection)
    }
}

/// Payload for `PATCH /collections/{id}`.
///
/// `featured_product_id` distinguishes a missing key (keep) from an explicit
/// `null` (clear).
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCollectionForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "present_or_null")]
    pub featured_product_id: Option<Option<i32>>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<i32>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<i32>::deserialize(deserializer).map(Some)
}

impl EditCollectionForm {
    pub fn into_update_collection(self) -> CollectionFormResult<UpdateCollection> {
        self.validate()?;

        let mut updates = UpdateCollection::new();

        if let Some(title) = self.title {
            let sanitized = sanitize_inline_text(&title);
            if sanitized.is_empty() {
                return Err(CollectionFormError::EmptyTitle);
            }
            updates = updates.title(sanitized);
        }

        if let Some(featured) = self.featured_product_id {
            updates = updates.featured_product_id(featured);
        }

        Ok(updates)
    }
}
