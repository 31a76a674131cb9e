use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::orders::{CreateOrderForm, UpdateOrderForm};
use crate::repository::DieselRepository;
use crate::routes::{CurrentUser, error_response};
use crate::services::notifications::OrderNotifier;
use crate::services::orders;

/// Orders placed by the calling user.
#[get("/orders")]
pub async fn list_orders(
    params: web::Query<orders::OrdersQuery>,
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::load_orders(repo.get_ref(), user.0, params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list orders"),
    }
}

/// Checks out the cart named in the body.
#[post("/orders")]
pub async fn add_order(
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
    notifier: web::Data<OrderNotifier>,
    form: web::Json<CreateOrderForm>,
) -> impl Responder {
    match orders::place_order(
        repo.get_ref(),
        notifier.get_ref(),
        user.0,
        form.into_inner(),
    ) {
        Ok(order) => HttpResponse::Created().json(order),
        Err(err) => error_response(err, "place order"),
    }
}

#[get("/orders/all")]
pub async fn list_all_orders(
    params: web::Query<orders::OrdersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::load_all_orders(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list all orders"),
    }
}

#[get("/orders/{order_id}")]
pub async fn show_order(
    order_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::load_order(repo.get_ref(), order_id.into_inner()) {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response(err, "load order"),
    }
}

#[patch("/orders/{order_id}")]
pub async fn edit_order(
    order_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<UpdateOrderForm>,
) -> impl Responder {
    match orders::modify_payment_status(repo.get_ref(), order_id.into_inner(), form.into_inner())
    {
        Ok(order) => HttpResponse::Ok().json(order),
        Err(err) => error_response(err, "update order"),
    }
}

#[delete("/orders/{order_id}")]
pub async fn delete_order(
    order_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match orders::remove_order(repo.get_ref(), order_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete order"),
    }
}
