use serde::Serialize;

use crate::domain::content_type::ContentType;
use crate::domain::like::{LikedItem, NewLikedItem};
use crate::repository::{LikeReader, LikeWriter, UserReader};
use crate::services::{ServiceError, ServiceResult, parse_content_type};

/// Like counter for one object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LikesView {
    pub content_type: ContentType,
    pub object_id: i32,
    pub likes: usize,
}

pub fn count_likes<R>(repo: &R, content_type: &str, object_id: i32) -> ServiceResult<LikesView>
where
    R: LikeReader + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    let likes = repo
        .count_likes(content_type, object_id)
        .map_err(ServiceError::from)?;

    Ok(LikesView {
        content_type,
        object_id,
        likes,
    })
}

/// Records that the user likes the object. Liking twice keeps one record.
pub fn like_object<R>(
    repo: &R,
    user_id: i32,
    content_type: &str,
    object_id: i32,
) -> ServiceResult<LikedItem>
where
    R: LikeWriter + UserReader + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    if repo
        .get_user_by_id(user_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::Validation(format!(
            "No user with the ID {user_id} was found."
        )));
    }

    repo.like_object(&NewLikedItem {
        user_id,
        content_type,
        object_id,
    })
    .map_err(ServiceError::from)
}

pub fn unlike_object<R>(
    repo: &R,
    user_id: i32,
    content_type: &str,
    object_id: i32,
) -> ServiceResult<()>
where
    R: LikeWriter + ?Sized,
{
    let content_type = parse_content_type(content_type)?;

    repo.unlike_object(user_id, content_type, object_id)
        .map_err(ServiceError::from)
}
