use crate::domain::user::User;
use crate::forms::users::AddUserForm;
use crate::repository::{UserReader, UserWriter};
use crate::services::{ServiceError, ServiceResult};

/// Registers a user account; duplicate usernames conflict.
pub fn create_user<R>(repo: &R, form: AddUserForm) -> ServiceResult<User>
where
    R: UserWriter + ?Sized,
{
    let new_user = form
        .into_new_user()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.create_user(&new_user).map_err(ServiceError::from)
}

pub fn load_user<R>(repo: &R, user_id: i32) -> ServiceResult<User>
where
    R: UserReader + ?Sized,
{
    repo.get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
