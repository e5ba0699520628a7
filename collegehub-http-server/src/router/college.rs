use actix_web::{get, web, Responder};
use collegehub_lib::{
    core::colleges::{self, CollegeQuery, CollegeQueryParams},
    parsers::parse_score,
};
use serde::Deserialize;

use super::{parse_id, AppState};

#[derive(Deserialize)]
pub struct PredictParams {
    pub score: Option<String>,
}

/**
 * List colleges matching the query filters, one page at a time
 *
 * # Arguments
 * @param query: web::Query<CollegeQueryParams> - The raw filter, sort and paging parameters
 *
 * # Returns
 * @return HttpResponse - `{ data, total, limit, offset }`, or 400 for malformed parameters
 */
#[get("/api/colleges")]
pub async fn list_colleges(
    state: web::Data<AppState>,
    query: web::Query<CollegeQueryParams>,
) -> impl Responder {
    let result = match CollegeQuery::try_from(query.into_inner()) {
        Ok(query) => colleges::get_colleges(state.storage(), &query).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

/**
 * Colleges whose admission cutoff is within reach of a score
 *
 * # Arguments
 * @param query: web::Query<PredictParams> - The `score` parameter
 *
 * # Returns
 * @return HttpResponse - Up to ten colleges, or 400 for a missing or malformed score
 */
#[get("/api/colleges/predict")]
pub async fn predict(state: web::Data<AppState>, query: web::Query<PredictParams>) -> impl Responder {
    let result = match parse_score(query.score.as_deref()) {
        Ok(score) => colleges::predict_colleges(state.storage(), score).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

#[get("/api/colleges/{id}")]
pub async fn college(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => colleges::get_college(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

#[get("/api/colleges/{id}/similar")]
pub async fn similar(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => colleges::get_similar_colleges(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

#[get("/api/colleges/{id}/reviews")]
pub async fn reviews(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => colleges::get_college_reviews(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}

#[get("/api/colleges/{id}/courses")]
pub async fn courses(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let result = match parse_id(&path) {
        Ok(id) => colleges::get_college_courses(state.storage(), id).await,
        Err(e) => Err(e),
    };
    state.respond(result)
}
