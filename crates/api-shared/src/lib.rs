//! # API Shared
//!
//! Shared request and response definitions for the hospital API.
//!
//! Contains:
//! - Request schemas with validation (`CreatePatientReq`, `UpdatePatientReq`)
//! - The uniform success and error envelopes
//! - Shared services like `HealthService`
//!
//! Used by `api-rest`; every type here derives `utoipa::ToSchema` for the OpenAPI document.

pub mod envelope;
pub mod health;
pub mod schemas;

pub use envelope::{
    ErrorResponse, MessageResponse, PatientListResponse, PatientResponse, WelcomeRes,
    SUCCESS_CODE,
};
pub use health::{HealthRes, HealthService};
pub use schemas::{CreatePatientReq, PatientRes, UpdatePatientReq};
