use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::forms::tags::AddTagForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::tags;

#[get("/tags")]
pub async fn list_tags(
    params: web::Query<tags::TagsQuery>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tags::load_tags(repo.get_ref(), params.into_inner()) {
        Ok(page) => HttpResponse::Ok().json(page),
        Err(err) => error_response(err, "list tags"),
    }
}

#[post("/tags")]
pub async fn add_tag(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddTagForm>,
) -> impl Responder {
    match tags::create_tag(repo.get_ref(), form.into_inner()) {
        Ok(tag) => HttpResponse::Created().json(tag),
        Err(err) => error_response(err, "create tag"),
    }
}

#[delete("/tags/{tag_id}")]
pub async fn delete_tag(
    tag_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match tags::remove_tag(repo.get_ref(), tag_id.into_inner()) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "delete tag"),
    }
}

#[get("/tagged/{content_type}/{object_id}")]
pub async fn list_object_tags(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id) = path.into_inner();
    match tags::load_tags_for(repo.get_ref(), &content_type, object_id) {
        Ok(items) => HttpResponse::Ok().json(items),
        Err(err) => error_response(err, "list object tags"),
    }
}

#[post("/tagged/{content_type}/{object_id}/{tag_id}")]
pub async fn tag_object(
    path: web::Path<(String, i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id, tag_id) = path.into_inner();
    match tags::tag_object(repo.get_ref(), tag_id, &content_type, object_id) {
        Ok(tagged) => HttpResponse::Created().json(tagged),
        Err(err) => error_response(err, "tag object"),
    }
}

#[delete("/tagged/{content_type}/{object_id}/{tag_id}")]
pub async fn untag_object(
    path: web::Path<(String, i32, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id, tag_id) = path.into_inner();
    match tags::untag_object(repo.get_ref(), tag_id, &content_type, object_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "untag object"),
    }
}
