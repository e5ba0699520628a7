use actix_web::{get, web, Responder};
use collegehub_lib::core::exams;

use super::{parse_id, AppState};

#[get("/api/exams")]
pub async fn list_exams(state: web::Data<AppState>) -> impl Responder {
    state.respond(exams::list_exams(state.storage()).await)
}

#[get("/api/exams/{id}")]
pub async fn exam(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => exams::get_exam(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}
