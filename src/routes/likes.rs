use actix_web::{HttpResponse, Responder, delete, get, post, web};

use crate::repository::DieselRepository;
use crate::routes::{CurrentUser, error_response};
use crate::services::likes;

#[get("/likes/{content_type}/{object_id}")]
pub async fn show_likes(
    path: web::Path<(String, i32)>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id) = path.into_inner();
    match likes::count_likes(repo.get_ref(), &content_type, object_id) {
        Ok(view) => HttpResponse::Ok().json(view),
        Err(err) => error_response(err, "count likes"),
    }
}

#[post("/likes/{content_type}/{object_id}")]
pub async fn like_object(
    path: web::Path<(String, i32)>,
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id) = path.into_inner();
    match likes::like_object(repo.get_ref(), user.0, &content_type, object_id) {
        Ok(liked) => HttpResponse::Created().json(liked),
        Err(err) => error_response(err, "like object"),
    }
}

#[delete("/likes/{content_type}/{object_id}")]
pub async fn unlike_object(
    path: web::Path<(String, i32)>,
    user: CurrentUser,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    let (content_type, object_id) = path.into_inner();
    match likes::unlike_object(repo.get_ref(), user.0, &content_type, object_id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => error_response(err, "unlike object"),
    }
}
