use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::carts::{AddCartItemForm, UpdateCartItemForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::carts;

/// Opens an anonymous cart; the returned id is the client's only handle on it.
#[post("/carts")]
pub async fn add_cart(repo: web::Data<DieselRepository>) -> impl Responder {
    match carts::create_cart(repo.get_ref()) {
        Ok(cart) => HttpResponse::Created().json(cart),
        Err(err) => error_response(err, "create cart"),
    }
}

#[get("/carts/{cart_id}")]
pub async fn show_cart(
    cart_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match carts::load_cart(repo.get_ref(), &cart_id) {
        Ok(cart) => HttpResponse::Ok().json(cart),
        Err(err) => error_response(err, "load cart"),
    }
}

#[delete("/carts/{cart_id}")]
pub async fn delete_cart(
    cart_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match carts::remove_cart(repo.get_ref(), &cart_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete cart"),
    }
}

#[get("/carts/{cart_id}/items")]
pub async fn list_cart_items(
    cart_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match carts::list_cart_items(repo.get_ref(), &cart_id) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list cart items"),
    }
}

/// Adds a product to the cart, merging with an existing line for the same product.
#[post("/carts/{cart_id}/items")]
pub async fn add_cart_item(
    cart_id: web::Path<String>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCartItemForm>,
) -> impl Responder {
    match carts::add_cart_item(repo.get_ref(), &cart_id, form.into_inner()) {
        Ok(item) => HttpResponse::Created().json(item),
        Err(err) => error_response(err, "add cart item"),
    }
}

#[get("/carts/{cart_id}/items/{item_id}")]
pub async fn show_cart_item(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (cart_id, item_id) = path.into_inner();
    match carts::load_cart_item(repo.get_ref(), &cart_id, item_id) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, "load cart item"),
    }
}

#[patch("/carts/{cart_id}/items/{item_id}")]
pub async fn edit_cart_item(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateCartItemForm>,
) -> impl Responder {
    let (cart_id, item_id) = path.into_inner();
    match carts::modify_cart_item(repo.get_ref(), &cart_id, item_id, form.into_inner()) {
        Ok(item) => HttpResponse::Ok().json(item),
        Err(err) => error_response(err, "update cart item"),
    }
}

#[delete("/carts/{cart_id}/items/{item_id}")]
pub async fn delete_cart_item(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (cart_id, item_id) = path.into_inner();
    match carts::remove_cart_item(repo.get_ref(), &cart_id, item_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete cart item"),
    }
}
