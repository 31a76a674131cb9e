use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::review::{NewReview, UpdateReview};
use crate::forms::{sanitize_inline_text, sanitize_multiline_text};

const NAME_MAX_LEN: u64 = 255;

pub type ReviewFormResult<T> = Result<T, ReviewFormError>;

#[derive(Debug, Error)]
pub enum ReviewFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("reviewer name cannot be empty")]
    EmptyName,
    #[error("review text cannot be empty")]
    EmptyDescription,
}

/// Payload for `POST /products/{id}/reviews`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddReviewForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: String,
    #[validate(length(min = 1))]
    pub description: String,
    /// Defaults to today.
    pub date: Option<NaiveDate>,
}

impl AddReviewForm {
    pub fn into_new_review(self, product_id: i32) -> ReviewFormResult<NewReview> {
        self.validate()?;

        let name = sanitize_inline_text(&self.name);
        if name.is_empty() {
            return Err(ReviewFormError::EmptyName);
        }

        let description = sanitize_multiline_text(&self.description);
        if description.is_empty() {
            return Err(ReviewFormError::EmptyDescription);
        }

        let mut review = NewReview::new(product_id, name, description);
        if let Some(date) = self.date {
            review = review.with_date(date);
        }

        Ok(review)
    }
}

/// Payload for `PATCH /products/{id}/reviews/{review_id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditReviewForm {
    #[validate(length(min = 1, max = NAME_MAX_LEN))]
    pub name: Option<String>,
    #[validate(length(min = 1))]
    pub description: Option<String>,
    pub date: Option<NaiveDate>,
}

impl EditReviewForm {
    pub fn into_update_review(self) -> ReviewFormResult<UpdateReview> {
        self.validate()?;

        let name = match self.name {
            Some(name) => {
                let sanitized = sanitize_inline_text(&name);
                if sanitized.is_empty() {
                    return Err(ReviewFormError::EmptyName);
                }
                Some(sanitized)
            }
            None => None,
        };

        let description = match self.description {
            Some(description) => {
                let sanitized = sanitize_multiline_text(&description);
                if sanitized.is_empty() {
                    return Err(ReviewFormError::EmptyDescription);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdateReview {
            name,
            description,
            date: self.date,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_review_form_keeps_explicit_date() {
        let date = NaiveDate::from_ymd_opt(2024, 2, 29).expect("valid date");
        let form = AddReviewForm {
            name: " Ann ".to_string(),
            description: "Great\n\n\nvalue".to_string(),
            date: Some(date),
        };

        let review = form.into_new_review(9).expect("expected success");

        assert_eq!(review.product_id, 9);
        assert_eq!(review.name, "Ann");
        assert_eq!(review.description, "Great\n\nvalue");
        assert_eq!(review.date, date);
    }

    #[test]
    fn edit_review_form_rejects_blank_description() {
        let form = EditReviewForm {
            description: Some("  \n ".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            form.into_update_review(),
            Err(ReviewFormError::EmptyDescription)
        ));
    }
}
