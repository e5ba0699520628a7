use std::sync::Arc;

use actix_cors::Cors;
use actix_web::{get, http::header, web, HttpResponse, Responder};
use chrono::Utc;
use collegehub_database::Storage;
use collegehub_lib::{
    error::{CollegeHubError, Result},
    parsers::parse_param,
};
use serde::Serialize;
use serde_json::json;

/// A test service over freshly seeded in-memory storage.
#[cfg(test)]
macro_rules! test_app {
    () => {{
        let storage = collegehub_database::MemStorage::new();
        collegehub_database::seed(&storage).await.unwrap();
        let state = actix_web::web::Data::new($crate::router::AppState::new(
            std::sync::Arc::new(storage),
            false,
        ));
        actix_web::test::init_service(
            actix_web::App::new()
                .app_data(state)
                .configure($crate::router::configure)
                .default_service(actix_web::web::route().to($crate::router::not_found)),
        )
        .await
    }};
}

pub mod college;
pub mod comparison;
pub mod exam;

/// Shared by every worker.
pub struct AppState {
    pub storage: Arc<dyn Storage>,
    /// Expose internal error text in 500 responses.
    pub development: bool,
}

impl AppState {
    pub fn new(storage: Arc<dyn Storage>, development: bool) -> Self {
        AppState {
            storage,
            development,
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /**
     * Turn an operation result into a JSON response
     *
     * # Arguments
     * @param result: Result<T> - The outcome of the operation
     *
     * # Returns
     * @return HttpResponse - 200 with the value, or the mapped error response
     */
    pub fn respond<T: Serialize>(&self, result: Result<T>) -> HttpResponse {
        match result {
            Ok(value) => HttpResponse::Ok().json(value),
            Err(e) => self.error_response(e),
        }
    }

    fn error_response(&self, error: CollegeHubError) -> HttpResponse {
        match error {
            CollegeHubError::Validation(message) => {
                HttpResponse::BadRequest().json(json!({ "message": message }))
            }
            CollegeHubError::NotFound(message) => {
                HttpResponse::NotFound().json(json!({ "message": message }))
            }
            other => {
                log::error!("Request failed: {}", other);
                let message = if self.development {
                    other.to_string()
                } else {
                    "Something went wrong!".to_string()
                };
                HttpResponse::InternalServerError().json(json!({
                    "error": "Internal Server Error",
                    "message": message,
                }))
            }
        }
    }
}

pub(crate) fn parse_id(raw: &str) -> Result<i32> {
    parse_param::<i32>("id", Some(raw))?
        .ok_or_else(|| CollegeHubError::Validation("Invalid id provided".to_string()))
}

pub fn cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::AUTHORIZATION])
}

/// Registration order matters: `/api/colleges/predict` has to be matched
/// before `/api/colleges/{id}`.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(health)
        .service(college::list_colleges)
        .service(college::predict)
        .service(college::college)
        .service(college::similar)
        .service(college::reviews)
        .service(college::courses)
        .service(exam::list_exams)
        .service(exam::exam)
        .service(comparison::compare)
        .service(comparison::saved);
}

/// Return server health status
#[get("/api/health")]
pub async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

pub async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({ "error": "Not Found" }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{body::to_bytes, http::StatusCode, test as actix_test};
    use collegehub_database::MemStorage;
    use serde_json::Value;

    async fn body_json(resp: HttpResponse) -> Value {
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[actix_web::test]
    async fn health_reports_ok() {
        let app = test_app!();
        let req = actix_test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = actix_test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
        assert!(body["timestamp"].is_string());
    }

    #[actix_web::test]
    async fn unknown_route_is_json_not_found() {
        let app = test_app!();
        let req = actix_test::TestRequest::get().uri("/api/nowhere").to_request();
        let resp = actix_test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = actix_test::read_body_json(resp).await;
        assert_eq!(body["error"], "Not Found");
    }

    #[actix_web::test]
    async fn internal_errors_hide_details_outside_development() {
        let error = || CollegeHubError::Database(collegehub_database::DbErr::Custom("boom".into()));

        let production = AppState::new(Arc::new(MemStorage::new()), false);
        let resp = production.error_response(error());
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = body_json(resp).await;
        assert_eq!(body["error"], "Internal Server Error");
        assert_eq!(body["message"], "Something went wrong!");

        let development = AppState::new(Arc::new(MemStorage::new()), true);
        let body = body_json(development.error_response(error())).await;
        assert!(body["message"].as_str().unwrap_or_default().contains("boom"));
    }

    #[actix_web::test]
    async fn validation_and_not_found_carry_a_message() {
        let state = AppState::new(Arc::new(MemStorage::new()), false);
        let resp = state.respond::<()>(Err(CollegeHubError::Validation("Invalid id provided".into())));
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(resp).await["message"], "Invalid id provided");

        let resp = state.respond::<()>(Err(CollegeHubError::NotFound("College not found".into())));
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(resp).await["message"], "College not found");
    }

    #[test]
    fn path_ids_must_be_integers() {
        assert_eq!(parse_id("42").unwrap(), 42);
        assert!(matches!(parse_id("abc"), Err(CollegeHubError::Validation(_))));
    }
}
