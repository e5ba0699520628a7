use actix_web::{get, web, Responder};
use collegehub_lib::{
    core::comparison,
    error::CollegeHubError,
    parsers::{non_empty, parse_id_list},
};
use serde::Deserialize;

use super::{parse_id, AppState};

#[derive(Deserialize)]
pub struct CompareParams {
    pub ids: Option<String>,
}

/**
 * Compare colleges side by side
 *
 * # Arguments
 * @param query: web::Query<CompareParams> - Comma separated college ids, e.g. `ids=1,3`
 *
 * # Returns
 * @return HttpResponse - The comparison table, 400 for a bad selection or 404 for an unknown college
 */
#[get("/api/compare")]
pub async fn compare(state: web::Data<AppState>, query: web::Query<CompareParams>) -> impl Responder {
    let ids = match non_empty(query.ids.as_deref()) {
        Some(raw) => parse_id_list(raw),
        None => Err(CollegeHubError::Validation("ids are required".to_string())),
    };
    let result = match ids {
        Ok(ids) => comparison::compare_colleges(state.storage(), &ids).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

#[get("/api/comparisons/{id}")]
pub async fn saved(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => comparison::get_saved_comparison(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}
