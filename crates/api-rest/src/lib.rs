//! # API REST
//!
//! REST API implementation for the hospital patient service.
//!
//! Handles:
//! - HTTP endpoints with axum (`/`, `/health`, `/patient/...`)
//! - OpenAPI/Swagger documentation
//! - REST-specific concerns (JSON envelopes, CORS, request tracing)
//!
//! Uses `api-shared` for request/response types and `hospital-core` for persistence.

#![warn(rust_2018_idioms)]

pub mod error;
pub mod handlers;

use axum::{routing::get, Router};
use hospital_core::PatientService;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub use error::ApiError;

/// Application state for the REST API server
///
/// Holds the persistence adapter. The store handle inside it is created once at startup and
/// shared by every request.
#[derive(Clone, Debug)]
pub struct AppState {
    pub patients: PatientService,
}

impl AppState {
    pub fn new(patients: PatientService) -> Self {
        Self { patients }
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        handlers::read_root,
        handlers::health,
        handlers::add_patient_data,
        handlers::get_all_patient_data,
        handlers::get_patient_data,
        handlers::update_patient_data,
        handlers::delete_patient_data,
    ),
    components(schemas(
        api_shared::WelcomeRes,
        api_shared::HealthRes,
        api_shared::CreatePatientReq,
        api_shared::UpdatePatientReq,
        api_shared::PatientRes,
        api_shared::PatientResponse,
        api_shared::PatientListResponse,
        api_shared::MessageResponse,
        api_shared::ErrorResponse,
    )),
    tags((name = "Patient", description = "Patient records"))
)]
pub struct ApiDoc;

/// Builds the application router.
///
/// `/patient` and `/patient/` are both routed to the collection handlers.
pub fn router(state: AppState) -> Router {
    use handlers::*;

    Router::new()
        .route("/", get(read_root))
        .route("/health", get(health))
        .route("/patient", get(get_all_patient_data).post(add_patient_data))
        .route("/patient/", get(get_all_patient_data).post(add_patient_data))
        .route(
            "/patient/:id",
            get(get_patient_data)
                .put(update_patient_data)
                .delete(delete_patient_data),
        )
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
