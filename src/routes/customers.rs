use actix_web::{HttpResponse, Responder, get, patch, post, put, web};

use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::repository::DieselRepository;
use crate::routes::{CurrentUser, error_response};
use crate::services::customers;

#[get("/customers")]
pub async fn list_customers(
    params: web::Query<customers::CustomersQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers::load_customers(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list customers"),
    }
}

#[post("/customers")]
pub async fn add_customer(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCustomerForm>,
) -> impl Responder {
    match customers::create_customer(repo.get_ref(), form.into_inner()) {
        Ok(customer) => HttpResponse::Created().json(customer),
        Err(err) => error_response(err, "create customer"),
    }
}

#[get("/customers/me")]
pub async fn show_current_customer(
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers::load_current_customer(repo.get_ref(), user.0) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err, "load current customer"),
    }
}

#[put("/customers/me")]
pub async fn edit_current_customer(
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCustomerForm>,
) -> impl Responder {
    match customers::modify_current_customer(repo.get_ref(), user.0, form.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err, "update current customer"),
    }
}

#[get("/customers/{customer_id}")]
pub async fn show_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match customers::load_customer(repo.get_ref(), customer_id.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err, "load customer"),
    }
}

#[patch("/customers/{customer_id}")]
pub async fn edit_customer(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCustomerForm>,
) -> impl Responder {
    match customers::modify_customer(repo.get_ref(), customer_id.into_inner(), form.into_inner()) {
        Ok(customer) => HttpResponse::Ok().json(customer),
        Err(err) => error_response(err, "update customer"),
    }
}
