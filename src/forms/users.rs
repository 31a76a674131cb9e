use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::user::NewUser;
use crate::forms::sanitize_inline_text;

const USERNAME_MAX_LEN: u64 = 150;
const NAME_MAX_LEN: u64 = 150;

pub type UserFormResult<T> = Result<T, UserFormError>;

#[derive(Debug, Error)]
pub enum UserFormError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("username may only contain letters, digits and @/./+/-/_")]
    InvalidUsername,
}

/// Payload for `POST /users`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddUserForm {
    #[validate(length(min = 1, max = USERNAME_MAX_LEN))]
    pub username: String,
    #[validate(email)]
    pub email: String,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub first_name: String,
    #[serde(default)]
    #[validate(length(max = NAME_MAX_LEN))]
    pub last_name: String,
}

impl AddUserForm {
    pub fn into_new_user(self) -> UserFormResult<NewUser> {
        self.validate()?;

        let username = self.username.trim();
        let allowed = |ch: char| ch.is_alphanumeric() || "@.+-_".contains(ch);
        if username.is_empty() || !username.chars().all(allowed) {
            return Err(UserFormError::InvalidUsername);
        }

        Ok(NewUser::new(username, self.email.trim()).with_name(
            sanitize_inline_text(&self.first_name),
            sanitize_inline_text(&self.last_name),
        ))
    }
}
