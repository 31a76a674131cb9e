use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::tag::NewTag;
use crate::forms::sanitize_inline_text;

/// Maximum allowed length for a tag label.
const LABEL_MAX_LEN: u64 = 255;

/// Result type returned by the tag form helpers.
pub type TagFormResult<T> = Result<T, TagFormError>;

/// Errors that can occur while processing tag forms.
#[derive(Debug, Error)]
pub enum TagFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// The provided label is empty after sanitization.
    #[error("tag label cannot be empty")]
    EmptyLabel,
}

/// Payload for `POST /tags`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddTagForm {
    #[validate(length(min = 1, max = LABEL_MAX_LEN))]
    pub label: String,
}

impl AddTagForm {
    /// Validates and sanitizes the payload into a domain `NewTag`.
    pub fn into_new_tag(self) -> TagFormResult<NewTag> {
        self.validate()?;

        let label = sanitize_inline_text(&self.label);
        if label.is_empty() {
            return Err(TagFormError::EmptyLabel);
        }

        Ok(NewTag::new(label))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_tag_form_converts_successfully() {
        let form = AddTagForm {
            label: "  Organic   Produce ".to_string(),
        };

        let tag = form.into_new_tag().expect("expected success");

        assert_eq!(tag.label, "Organic Produce");
    }

    #[test]
    fn add_tag_form_rejects_whitespace_label() {
        let form = AddTagForm {
            label: "   ".to_string(),
        };

        assert!(matches!(form.into_new_tag(), Err(TagFormError::EmptyLabel)));
    }

    #[test]
    fn add_tag_form_enforces_length() {
        let form = AddTagForm {
            label: "x".repeat(256),
        };

        assert!(matches!(form.into_new_tag(), Err(TagFormError::Validation(_))));
    }
}
