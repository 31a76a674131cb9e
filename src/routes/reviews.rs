use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::reviews::{AddReviewForm, EditReviewForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::reviews;

#[get("/products/{product_id}/reviews")]
pub async fn list_reviews(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match reviews::load_reviews(repo.get_ref(), product_id.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list reviews"),
    }
}

#[post("/products/{product_id}/reviews")]
pub async fn add_review(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddReviewForm>,
) -> impl Responder {
    match reviews::create_review(repo.get_ref(), product_id.into_inner(), form.into_inner()) {
        Ok(review) => HttpResponse::Created().json(review),
        Err(err) => error_response(err, "create review"),
    }
}

#[get("/products/{product_id}/reviews/{review_id}")]
pub async fn show_review(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (product_id, review_id) = path.into_inner();
    match reviews::load_review(repo.get_ref(), product_id, review_id) {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(err) => error_response(err, "load review"),
    }
}

#[patch("/products/{product_id}/reviews/{review_id}")]
pub async fn edit_review(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditReviewForm>,
) -> impl Responder {
    let (product_id, review_id) = path.into_inner();
    match reviews::modify_review(repo.get_ref(), product_id, review_id, form.into_inner()) {
        Ok(review) => HttpResponse::Ok().json(review),
        Err(err) => error_response(err, "update review"),
    }
}

#[delete("/products/{product_id}/reviews/{review_id}")]
pub async fn delete_review(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (product_id, review_id) = path.into_inner();
    match reviews::remove_review(repo.get_ref(), product_id, review_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete review"),
    }
}
