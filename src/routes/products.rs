use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};
use serde_json::json;

use crate::forms::products::{AddProductForm, EditProductForm, UploadProductsForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::products;

#[get("/products")]
pub async fn list_products(
    params: web::Query<products::ProductsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_products(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list products"),
    }
}

#[post("/products")]
pub async fn add_product(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddProductForm>,
) -> impl Responder {
    match products::create_product(repo.get_ref(), form.into_inner()) {
        Ok(product) => HttpResponse::Created().json(product),
        Err(err) => error_response(err, "create product"),
    }
}

/// Bulk import from a CSV file sent in the `csv` multipart field.
#[post("/products/upload")]
pub async fn upload_products(
    repo: web::Data<DieselRepository>,
    MultipartForm(form): MultipartForm<UploadProductsForm>,
) -> impl Responder {
    match products::import_products(repo.get_ref(), form) {
        Ok(created) => HttpResponse::Created().json(json!({ "created": created })),
        Err(err) => error_response(err, "import products"),
    }
}

#[get("/products/{product_id}")]
pub async fn show_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::load_product(repo.get_ref(), product_id.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "load product"),
    }
}

#[patch("/products/{product_id}")]
pub async fn edit_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditProductForm>,
) -> impl Responder {
    match products::modify_product(repo.get_ref(), product_id.into_inner(), form.into_inner()) {
        Ok(product) => HttpResponse::Ok().json(product),
        Err(err) => error_response(err, "update product"),
    }
}

#[delete("/products/{product_id}")]
pub async fn delete_product(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match products::remove_product(repo.get_ref(), product_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete product"),
    }
}
