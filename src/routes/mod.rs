//! JSON handlers mounted under `/api/v1`.

use std::future::{Ready, ready};

use actix_web::dev::Payload;
use actix_web::error::InternalError;
use actix_web::{FromRequest, HttpRequest, HttpResponse, web};
use serde_json::json;

use crate::services::ServiceError;

pub mod addresses;
pub mod carts;
pub mod collections;
pub mod customers;
pub mod likes;
pub mod orders;
pub mod product_images;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod tags;
pub mod users;

/// Header carrying the id of the user authenticated by the gateway.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// Id of the calling user taken from [`USER_ID_HEADER`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub i32);

impl FromRequest for CurrentUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let user_id = req
            .headers()
            .get(USER_ID_HEADER)
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.trim().parse::<i32>().ok());

        ready(match user_id {
            Some(id) => Ok(CurrentUser(id)),
            None => {
                let response = HttpResponse::Unauthorized()
                    .json(json!({ "error": "Authentication credentials were not provided." }));
                Err(InternalError::from_response("missing caller identity", response).into())
            }
        })
    }
}

/// Turns a service failure into the JSON response clients expect.
///
/// `action` names the failed operation in the log line written for internal errors.
pub fn error_response(err: ServiceError, action: &str) -> HttpResponse {
    match err {
        ServiceError::NotFound => {
            HttpResponse::NotFound().json(json!({ "error": "Not found." }))
        }
        ServiceError::Conflict => HttpResponse::Conflict()
            .json(json!({ "error": "A record with the same unique value already exists." })),
        ServiceError::Form(message) | ServiceError::Validation(message) => {
            HttpResponse::BadRequest().json(json!({ "error": message }))
        }
        ServiceError::NotAllowed(message) => {
            HttpResponse::MethodNotAllowed().json(json!({ "error": message }))
        }
        ServiceError::Internal(message) => {
            log::error!("Failed to {action}: {message}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

fn json_error_handler(
    err: actix_web::error::JsonPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

fn query_error_handler(
    err: actix_web::error::QueryPayloadError,
    _req: &HttpRequest,
) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    InternalError::from_response(err, response).into()
}

/// Registers every endpoint under `/api/v1`.
///
/// Literal segments such as `/customers/me` and `/orders/all` are registered
/// ahead of their `{id}` siblings.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .app_data(web::QueryConfig::default().error_handler(query_error_handler))
            .service(products::list_products)
            .service(products::add_product)
            .service(products::upload_products)
            .service(products::show_product)
            .service(products::edit_product)
            .service(products::delete_product)
            .service(reviews::list_reviews)
            .service(reviews::add_review)
            .service(reviews::show_review)
            .service(reviews::edit_review)
            .service(reviews::delete_review)
            .service(product_images::list_product_images)
            .service(product_images::upload_product_image)
            .service(product_images::show_product_image)
            .service(product_images::delete_product_image)
            .service(promotions::list_product_promotions)
            .service(promotions::attach_promotion)
            .service(promotions::detach_promotion)
            .service(promotions::list_promotions)
            .service(promotions::add_promotion)
            .service(promotions::show_promotion)
            .service(promotions::edit_promotion)
            .service(promotions::delete_promotion)
            .service(collections::list_collections)
            .service(collections::add_collection)
            .service(collections::show_collection)
            .service(collections::edit_collection)
            .service(collections::delete_collection)
            .service(carts::add_cart)
            .service(carts::show_cart)
            .service(carts::delete_cart)
            .service(carts::list_cart_items)
            .service(carts::add_cart_item)
            .service(carts::show_cart_item)
            .service(carts::edit_cart_item)
            .service(carts::delete_cart_item)
            .service(users::add_user)
            .service(users::show_user)
            .service(customers::list_customers)
            .service(customers::add_customer)
            .service(customers::show_current_customer)
            .service(customers::edit_current_customer)
            .service(customers::show_customer)
            .service(customers::edit_customer)
            .service(addresses::list_addresses)
            .service(addresses::add_address)
            .service(addresses::show_address)
            .service(addresses::edit_address)
            .service(addresses::delete_address)
            .service(orders::list_orders)
            .service(orders::add_order)
            .service(orders::list_all_orders)
            .service(orders::show_order)
            .service(orders::edit_order)
            .service(orders::delete_order)
            .service(tags::list_tags)
            .service(tags::add_tag)
            .service(tags::delete_tag)
            .service(tags::list_object_tags)
            .service(tags::tag_object)
            .service(tags::untag_object)
            .service(likes::show_likes)
            .service(likes::like_object)
            .service(likes::unlike_object),
    );
}
