use actix_web::{HttpResponse, Responder, get, web};

use crate::repository::DieselRepository;
use crate::services::people as people_service;

#[get("/people")]
pub async fn list_people(repo: web::Data<DieselRepository>) -> impl Responder {
    match people_service::list_people(repo.get_ref()) {
        Ok(people) => HttpResponse::Ok().json(people),
        Err(err) => {
            log::error!("Failed to list people: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}
