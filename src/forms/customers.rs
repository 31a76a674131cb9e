use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::customer::{Membership, NewCustomer, UpdateCustomer};
use crate::forms::sanitize_inline_text;

const PHONE_MAX_LEN: u64 = 255;

pub type CustomerFormResult<T> = Result<T, CustomerFormError>;

#[derive(Debug, Error)]
pub enum CustomerFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("phone cannot be empty")]
    EmptyPhone,
    #[error("{0}")]
    InvalidMembership(String),
}

/// Payload for `POST /customers`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddCustomerForm {
    #[validate(range(min = 1))]
    pub user_id: i32,
    #[validate(length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    /// Defaults to bronze.
    pub membership: Option<String>,
}

impl AddCustomerForm {
    pub fn into_new_customer(self) -> CustomerFormResult<NewCustomer> {
        self.validate()?;

        let phone = sanitize_inline_text(&self.phone);
        if phone.is_empty() {
            return Err(CustomerFormError::EmptyPhone);
        }

        let mut customer = NewCustomer::new(self.user_id, phone);

        if let Some(birth_date) = self.birth_date {
            customer = customer.with_birth_date(birth_date);
        }

        if let Some(membership) = self.membership.as_deref() {
            customer = customer.with_membership(parse_membership(membership)?);
        }

        Ok(customer)
    }
}

/// Payload for `PATCH /customers/{id}` and `PUT /customers/me`.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditCustomerForm {
    #[validate(length(min = 1, max = PHONE_MAX_LEN))]
    pub phone: Option<String>,
    /// An explicit `null` clears the stored birth date.
    #[serde(default, deserialize_with = "present_or_null")]
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<String>,
}

fn present_or_null<'de, D>(deserializer: D) -> Result<Option<Option<NaiveDate>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<NaiveDate>::deserialize(deserializer).map(Some)
}

impl EditCustomerForm {
    pub fn into_update_customer(self) -> CustomerFormResult<UpdateCustomer> {
        self.validate()?;

        let phone = match self.phone {
            Some(phone) => {
                let sanitized = sanitize_inline_text(&phone);
                if sanitized.is_empty() {
                    return Err(CustomerFormError::EmptyPhone);
                }
                Some(sanitized)
            }
            None => None,
        };

        let membership = self
            .membership
            .as_deref()
            .map(parse_membership)
            .transpose()?;

        Ok(UpdateCustomer {
            phone,
            birth_date: self.birth_date,
            membership,
        })
    }
}

fn parse_membership(value: &str) -> CustomerFormResult<Membership> {
    value.parse().map_err(CustomerFormError::InvalidMembership)
}
