use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::address::{NewAddress, UpdateAddress};
use crate::forms::sanitize_inline_text;

const FIELD_MAX_LEN: u64 = 255;

pub type AddressFormResult<T> = Result<T, AddressFormError>;

#[derive(Debug, Error)]
pub enum AddressFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
}

fn required(value: &str, field: &'static str) -> AddressFormResult<String> {
    let sanitized = sanitize_inline_text(value);
    if sanitized.is_empty() {
        return Err(AddressFormError::EmptyField(field));
    }
    Ok(sanitized)
}

/// Payload for `POST /customers/{id}/addresses`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddAddressForm {
    #[validate(length(min = 1, max = FIELD_MAX_LEN))]
    pub street: String,
    #[validate(length(min = 1, max = FIELD_MAX_LEN))]
    pub city: String,
}

impl AddAddressForm {
    pub fn into_new_address(self, customer_id: i32) -> AddressFormResult<NewAddress> {
        self.validate()?;

        Ok(NewAddress::new(
            customer_id,
            required(&self.street, "street")?,
            required(&self.city, "city")?,
        ))
    }
}

/// Payload for `PATCH /customers/{id}/addresses/{address_id}`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditAddressForm {
    #[validate(length(min = 1, max = FIELD_MAX_LEN))]
    pub street: Option<String>,
    #[validate(length(min = 1, max = FIELD_MAX_LEN))]
    pub city: Option<String>,
}

impl EditAddressForm {
    pub fn into_update_address(self) -> AddressFormResult<UpdateAddress> {
        self.validate()?;

        Ok(UpdateAddress {
            street: self
                .street
                .map(|street| required(&street, "street"))
                .transpose()?,
            city: self.city.map(|city| required(&city, "city")).transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_address_form_sanitizes_fields() {
        let form = AddAddressForm {
            street: "  12   Baker  Street ".to_string(),
            city: "London\t".to_string(),
        };

        let address = form.into_new_address(4).expect("expected address");

        assert_eq!(address, NewAddress::new(4, "12 Baker Street", "London"));
    }

    #[test]
    fn address_forms_reject_blank_fields() {
        let form = AddAddressForm {
            street: "1 Main St".to_string(),
            city: "   ".to_string(),
        };
        assert!(matches!(
            form.into_new_address(1),
            Err(AddressFormError::EmptyField("city"))
        ));

        let form = EditAddressForm {
            street: Some(String::new()),
            ..Default::default()
        };
        assert!(matches!(
            form.into_update_address(),
            Err(AddressFormError::Validation(_))
        ));
    }
}
