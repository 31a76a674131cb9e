use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::addresses::{AddAddressForm, EditAddressForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::addresses;

#[get("/customers/{customer_id}/addresses")]
pub async fn list_addresses(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match addresses::load_addresses(repo.get_ref(), customer_id.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list addresses"),
    }
}

#[post("/customers/{customer_id}/addresses")]
pub async fn add_address(
    customer_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<AddAddressForm>,
) -> impl Responder {
    match addresses::create_address(repo.get_ref(), customer_id.into_inner(), form.into_inner()) {
        Ok(address) => HttpResponse::Created().json(address),
        Err(err) => error_response(err, "create address"),
    }
}

#[get("/customers/{customer_id}/addresses/{address_id}")]
pub async fn show_address(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (customer_id, address_id) = path.into_inner();
    match addresses::load_address(repo.get_ref(), customer_id, address_id) {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(err) => error_response(err, "load address"),
    }
}

#[patch("/customers/{customer_id}/addresses/{address_id}")]
pub async fn edit_address(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditAddressForm>,
) -> impl Responder {
    let (customer_id, address_id) = path.into_inner();
    match addresses::modify_address(repo.get_ref(), customer_id, address_id, form.into_inner()) {
        Ok(address) => HttpResponse::Ok().json(address),
        Err(err) => error_response(err, "update address"),
    }
}

#[delete("/customers/{customer_id}/addresses/{address_id}")]
pub async fn delete_address(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (customer_id, address_id) = path.into_inner();
    match addresses::remove_address(repo.get_ref(), customer_id, address_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete address"),
    }
}
