use actix_multipart::form::MultipartForm;
use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::product_images::UploadProductImageForm;
use crate::media::MediaStore;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::product_images;

#[get("/products/{product_id}/images")]
pub async fn list_product_images(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match product_images::load_product_images(repo.get_ref(), product_id.into_inner()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list product images"),
    }
}

/// Upload one image sent in the `image` multipart field.
#[post("/products/{product_id}/images")]
pub async fn upload_product_image(
    product_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    media: web::Data<MediaStore>,
    MultipartForm(form): MultipartForm<UploadProductImageForm>,
) -> impl Responder {
    match product_images::upload_product_image(
        repo.get_ref(),
        media.get_ref(),
        product_id.into_inner(),
        form,
    ) {
        Ok(image) => HttpResponse::Created().json(image),
        Err(err) => error_response(err, "upload product image"),
    }
}

#[get("/products/{product_id}/images/{image_id}")]
pub async fn show_product_image(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (product_id, image_id) = path.into_inner();
    match product_images::load_product_image(repo.get_ref(), product_id, image_id) {
        Ok(image) => HttpResponse::Ok().json(image),
        Err(err) => error_response(err, "load product image"),
    }
}

#[delete("/products/{product_id}/images/{image_id}")]
pub async fn delete_product_image(
    path: web::Path<(i32, i32)>,
    repo: web::Data<DieselRepository>,
    media: web::Data<MediaStore>,
) -> impl Responder {
    let (product_id, image_id) = path.into_inner();
    match product_images::remove_product_image(repo.get_ref(), media.get_ref(), product_id, image_id)
    {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete product image"),
    }
}
