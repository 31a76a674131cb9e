use actix_web::{HttpResponse, Responder, get, post, web};

use crate::forms::users::AddUserForm;
use crate::repository::DieselRepository;
use crate::routes::error_response;
use crate::services::users;

#[post("/users")]
pub async fn add_user(
    repo: web::Data<DieselRepository>,
    form: web::Json<AddUserForm>,
) -> impl Responder {
    match users::create_user(repo.get_ref(), form.into_inner()) {
        Ok(user) => HttpResponse::Created().json(user),
        Err(err) => error_response(err, "create user"),
    }
}

#[get("/users/{user_id}")]
pub async fn show_user(
    user_id: web::Path<i32>,
    repo: web::Data<DieselRepository>,
) -> impl Responder {
    match users::load_user(repo.get_ref(), user_id.into_inner()) {
        Ok(user) => HttpResponse::Ok().json(user),
        Err(err) => error_response(err, "load user"),
    }
}
