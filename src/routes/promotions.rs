use actix_web::{HttpResponse, Responder, delete, get, patch, post, put, web};

use crate::forms::promotions::{AddPromotionForm, EditPromotionForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::promotions;

#[get("/promotions")]
pub async fn list_promotions(repo: web::Data<DieselRepository>) -> impl Responder {
    match promotions::load_promotions(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list promotions"),
    }
}

#[post("/promotions")]
pub async fn add_promotion(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddPromotionForm>,
) -> impl Responder {
    match promotions::create_promotion(repo.get_ref(), form.into_inner()) {
        Ok(promotion) => HttpResponse::Created().json(promotion),
        Err(err) => error_response(err, "create promotion"),
    }
}

#[get("/promotions/{promotion_id}")]
pub async fn show_promotion(
    promotion_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match promotions::load_promotion(repo.get_ref(), promotion_id.into_inner()) {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(err) => error_response(err, "load promotion"),
    }
}

#[patch("/promotions/{promotion_id}")]
pub async fn edit_promotion(
    promotion_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditPromotionForm>,
) -> impl Responder {
    match promotions::modify_promotion(repo.get_ref(), promotion_id.into_inner(), form.into_inner())
    {
        Ok(promotion) => HttpResponse::Ok().json(promotion),
        Err(err) => error_response(err, "update promotion"),
    }
}

#[delete("/promotions/{promotion_id}")]
pub async fn delete_promotion(
    promotion_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match promotions::remove_promotion(repo.get_ref(), promotion_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete promotion"),
    }
}

#[get("/products/{product_id}/promotions")]
pub async fn list_product_promotions(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match promotions::load_product_promotions(repo.get_ref(), product_id.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list product promotions"),
    }
}

#[put("/products/{product_id}/promotions/{promotion_id}")]
pub async fn attach_promotion(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (product_id, promotion_id) = path.into_inner();
    match promotions::attach_promotion(repo.get_ref(), product_id, promotion_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "attach promotion"),
    }
}

#[delete("/products/{product_id}/promotions/{promotion_id}")]
pub async fn detach_promotion(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (product_id, promotion_id) = path.into_inner();
    match promotions::detach_promotion(repo.get_ref(), product_id, promotion_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "detach promotion"),
    }
}
