use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::promotion::{MAX_DISCOUNT_PERCENT, NewPromotion, UpdatePromotion};
use crate::forms::sanitize_inline_text;

const DESCRIPTION_MAX_LEN: u64 = 255;

pub type PromotionFormResult<T> = Result<T, PromotionFormError>;

#[derive(Debug, Error)]
pub enum PromotionFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("promotion description cannot be empty")]
    EmptyDescription,
}

/// Payload for `POST /promotions`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddPromotionForm {
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: String,
    /// Percentage off.
    #[validate(range(min = 0.0, max = MAX_DISCOUNT_PERCENT))]
    pub discount: f64,
}

impl AddPromotionForm {
    pub fn into_new_promotion(self) -> PromotionFormResult<NewPromotion> {
        self.validate()?;

        let description = sanitize_inline_text(&self.description);
        if description.is_empty() {
            return Err(PromotionFormError::EmptyDescription);
        }

        Ok(NewPromotion::new(description, self.discount))
    }
}

/// Payload for `PATCH /promotions/{id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditPromotionForm {
    #[validate(length(min = 1, max = DESCRIPTION_MAX_LEN))]
    pub description: Option<String>,
    #[validate(range(min = 0.0, max = MAX_DISCOUNT_PERCENT))]
    pub discount: Option<f64>,
}

impl EditPromotionForm {
    pub fn into_update_promotion(self) -> PromotionFormResult<UpdatePromotion> {
        self.validate()?;

        let description = match self.description {
            Some(description) => {
                let sanitized = sanitize_inline_text(&description);
                if sanitized.is_empty() {
                    return Err(PromotionFormError::EmptyDescription);
                }
                Some(sanitized)
            }
            None => None,
        };

        Ok(UpdatePromotion {
            description,
            discount: self.discount,
        })
    }
}
