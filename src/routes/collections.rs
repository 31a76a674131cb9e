use actix_web::{HttpResponse, Responder, delete, get, patch, post, web};

use crate::forms::collections::{AddCollectionForm, EditCollectionForm};
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::collections;

#[get("/collections")]
pub async fn list_collections(repo: web::Data<DieselRepository>) -> impl Responder {
    match collections::load_collections(repo.get_ref()) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list collections"),
    }
}

#[post("/collections")]
pub async fn add_collection(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddCollectionForm>,
) -> impl Responder {
    match collections::create_collection(repo.get_ref(), form.into_inner()) {
        Ok(collection) => HttpResponse::Created().json(collection),
        Err(err) => error_response(err, "create collection"),
    }
}

#[get("/collections/{collection_id}")]
pub async fn show_collection(
    collection_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match collections::load_collection(repo.get_ref(), collection_id.into_inner()) {
        Ok(collection) => HttpResponse::Ok().json(collection),
        Err(err) => error_response(err, "load collection"),
    }
}

#[patch("/collections/{collection_id}")]
pub async fn edit_collection(
    collection_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
    form: web::Json<EditCollectionForm>,
) -> impl Responder {
    match collections::modify_collection(
        repo.get_ref(),
        collection_id.into_inner(),
        form.into_inner(),
    ) {
        Ok(collection) => HttpResponse::Ok().json(collection),
        Err(err) => error_response(err, "update collection"),
    }
}

#[delete("/collections/{collection_id}")]
pub async fn delete_collection(
    collection_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match collections::remove_collection(repo.get_ref(), collection_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete collection"),
    }
}
