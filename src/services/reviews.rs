use crate::domain::review::Review;
use crate::forms::reviews::{AddReviewForm, EditReviewForm};
use crate::repository::{ProductReader, ReviewReader, ReviewWriter};
use crate::services::products::ensure_product_exists;
use crate::services::{ServiceError, ServiceResult};

pub fn load_reviews<R>(repo: &R, product_id: i32) -> ServiceResult<Vec<Review>>
where
    R: ProductReader + ReviewReader + ?Sized,
{
    ensure_product_exists(repo, product_id)?;
    repo.list_reviews(product_id).map_err(ServiceError::from)
}

pub fn load_review<R>(repo: &R, product_id: i32, review_id: i32) -> ServiceResult<Review>
where
    R: ReviewReader + ?Sized,
{
    repo.get_review(product_id, review_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_review<R>(repo: &R, product_id: i32, form: AddReviewForm) -> ServiceResult<Review>
where
    R: ProductReader + ReviewWriter + ?Sized,
{
    let new_review = form
        .into_new_review(product_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_product_exists(repo, product_id)?;

    repo.create_review(&new_review).map_err(ServiceError::from)
}

pub fn modify_review<R>(
    repo: &R,
    product_id: i32,
    review_id: i32,
    form: EditReviewForm,
) -> ServiceResult<Review>
where
    R: ReviewWriter + ?Sized,
{
    let updates = form
        .into_update_review()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_review(product_id, review_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_review<R>(repo: &R, product_id: i32, review_id: i32) -> ServiceResult<()>
where
    R: ReviewWriter + ?Sized,
{
    repo.delete_review(product_id, review_id)
        .map_err(ServiceError::from)
}
