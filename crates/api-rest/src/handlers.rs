//! Route handlers.
//!
//! Every `/patient` handler answers with one of the uniform envelopes from `api-shared`.
//! Envelopes go out on HTTP 200; the envelope `code` carries the outcome. Only rejected bodies
//! and store failures change the HTTP status (see [`ApiError`]).

use crate::{error::ApiError, AppState};
use api_shared::{
    CreatePatientReq, ErrorResponse, HealthRes, HealthService, MessageResponse,
    PatientListResponse, PatientRes, PatientResponse, UpdatePatientReq, WelcomeRes,
};
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Json, Response},
};

pub const WELCOME_MESSAGE: &str = "Welcome to Hospital!";

pub const PATIENT_ADDED: &str = "Patient added Successfully";
pub const PATIENTS_RETRIEVED: &str = "Patients data retrived successfully";
pub const EMPTY_LIST: &str = "Empty list returned";
pub const PATIENT_RETRIEVED: &str = "Successfully retrieved patient information";
pub const PATIENT_UPDATED: &str = "Patient record updated successfully.";
pub const PATIENT_DELETED: &str = "Patient deleted successfully";

pub const LOOKUP_ERROR: &str = "Error Occurred";
pub const WRITE_ERROR: &str = "An Error Occurred";
pub const PATIENT_MISSING: &str = "Patient does not exist.";
pub const UPDATE_FAILED: &str = "Failed to update Patient record";
pub const DELETE_FAILED: &str = "Failed to delete patient record.";

/// Envelope `code` used for every failure envelope, including "not found".
pub const FAILURE_CODE: u16 = 500;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome message", body = WelcomeRes)
    )
)]
/// Root greeting.
#[axum::debug_handler]
pub async fn read_root() -> Json<WelcomeRes> {
    Json(WelcomeRes {
        message: WELCOME_MESSAGE.into(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check response", body = HealthRes)
    )
)]
/// Health check endpoint for the REST API
///
/// Used for monitoring and load balancer health checks. It does not touch the store.
#[axum::debug_handler]
pub async fn health(State(_state): State<AppState>) -> Json<HealthRes> {
    Json(HealthService::check_health())
}

#[utoipa::path(
    post,
    path = "/patient/",
    request_body = CreatePatientReq,
    responses(
        (status = 200, description = "Patient data added into DB successfully", body = PatientResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Create a new patient record
///
/// Validates the body, inserts the record and returns it with its store-assigned `id`.
///
/// # Errors
/// - `422 Unprocessable Entity` if the body is not a valid `CreatePatientReq`, including broken
///   JSON and a missing `Content-Type`; nothing is written in that case.
/// - `500 Internal Server Error` if the store fails.
#[axum::debug_handler]
pub async fn add_patient_data(
    State(state): State<AppState>,
    payload: Result<Json<CreatePatientReq>, JsonRejection>,
) -> Result<Json<PatientResponse>, ApiError> {
    let Json(req) = payload?;
    let patient = state.patients.create(req.into()).await?;
    Ok(Json(PatientResponse::new(
        PatientRes::from(patient),
        PATIENT_ADDED,
    )))
}

#[utoipa::path(
    get,
    path = "/patient/",
    responses(
        (status = 200, description = "All Patients Information", body = PatientListResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// List all patients
///
/// An empty collection is still a success; only the message changes.
#[axum::debug_handler]
pub async fn get_all_patient_data(
    State(state): State<AppState>,
) -> Result<Json<PatientListResponse>, ApiError> {
    let patients: Vec<PatientRes> = state
        .patients
        .list_all()
        .await?
        .into_iter()
        .map(PatientRes::from)
        .collect();

    let message = if patients.is_empty() {
        EMPTY_LIST
    } else {
        PATIENTS_RETRIEVED
    };
    Ok(Json(PatientListResponse::new(patients, message)))
}

#[utoipa::path(
    get,
    path = "/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier (24 hex characters)")),
    responses(
        (status = 200, description = "Patient envelope, or an error envelope with code 500 if the patient does not exist", body = PatientResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Get data of a patient by ID
///
/// Unknown and malformed identifiers both produce the "Patient does not exist." envelope.
#[axum::debug_handler]
pub async fn get_patient_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    match state.patients.get_by_id(&id).await? {
        Some(patient) => Ok(Json(PatientResponse::new(
            PatientRes::from(patient),
            PATIENT_RETRIEVED,
        ))
        .into_response()),
        None => Ok(Json(ErrorResponse::new(LOOKUP_ERROR, FAILURE_CODE, PATIENT_MISSING))
            .into_response()),
    }
}

#[utoipa::path(
    put,
    path = "/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier (24 hex characters)")),
    request_body = UpdatePatientReq,
    responses(
        (status = 200, description = "Update envelope, or an error envelope with code 500 if nothing was updated", body = MessageResponse),
        (status = 422, description = "Request body failed validation", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Partially update a patient
///
/// Only the fields present in the body are written. A body with no fields, an unknown id and a
/// malformed id all produce the "Failed to update Patient record" envelope.
#[axum::debug_handler]
pub async fn update_patient_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePatientReq>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = payload?;
    let updated = state.patients.update(&id, req.into()).await?;

    if updated {
        Ok(Json(MessageResponse::new(
            format!("Patient with ID {} updated successfully", id),
            PATIENT_UPDATED,
        ))
        .into_response())
    } else {
        Ok(Json(ErrorResponse::new(WRITE_ERROR, FAILURE_CODE, UPDATE_FAILED)).into_response())
    }
}

#[utoipa::path(
    delete,
    path = "/patient/{id}",
    params(("id" = String, Path, description = "Patient identifier (24 hex characters)")),
    responses(
        (status = 200, description = "Deletion envelope, or an error envelope with code 500 if nothing was deleted", body = MessageResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
/// Delete a patient
#[axum::debug_handler]
pub async fn delete_patient_data(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let deleted = state.patients.delete(&id).await?;

    if deleted {
        Ok(Json(MessageResponse::new(
            format!("Patient with ID {} removed successfully", id),
            PATIENT_DELETED,
        ))
        .into_response())
    } else {
        Ok(Json(ErrorResponse::new(WRITE_ERROR, FAILURE_CODE, DELETE_FAILED)).into_response())
    }
}
