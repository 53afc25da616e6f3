//! Uniform response envelopes.
//!
//! Success: `{ "data": [<payload>], "code": 200, "message": ... }`. The payload is always
//! wrapped in a one-element array, so a patient list becomes `data: [[...]]`.
//!
//! Error: `{ "error": ..., "code": ..., "message": ... }`.

use crate::schemas::PatientRes;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `code` carried by every success envelope.
pub const SUCCESS_CODE: u16 = 200;

/// Success envelope around a single patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientResponse {
    pub data: Vec<PatientRes>,
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "Successfully retrieved patient information")]
    pub message: String,
}

impl PatientResponse {
    pub fn new(patient: PatientRes, message: impl Into<String>) -> Self {
        Self {
            data: vec![patient],
            code: SUCCESS_CODE,
            message: message.into(),
        }
    }
}

/// Success envelope around the full patient list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientListResponse {
    pub data: Vec<Vec<PatientRes>>,
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "Patients data retrived successfully")]
    pub message: String,
}

impl PatientListResponse {
    pub fn new(patients: Vec<PatientRes>, message: impl Into<String>) -> Self {
        Self {
            data: vec![patients],
            code: SUCCESS_CODE,
            message: message.into(),
        }
    }
}

/// Success envelope whose payload is a human-readable string.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub data: Vec<String>,
    #[schema(example = 200)]
    pub code: u16,
    #[schema(example = "Patient record updated successfully.")]
    pub message: String,
}

impl MessageResponse {
    pub fn new(payload: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            data: vec![payload.into()],
            code: SUCCESS_CODE,
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = "Error Occurred")]
    pub error: String,
    #[schema(example = 500)]
    pub code: u16,
    #[schema(example = "Patient does not exist.")]
    pub message: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>, code: u16, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            code,
            message: message.into(),
        }
    }
}

/// Body of `GET /`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct WelcomeRes {
    #[schema(example = "Welcome to Hospital!")]
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn patient() -> PatientRes {
        PatientRes {
            id: "64b7f0c2e13a4c0f9a8d1e22".into(),
            fullname: "A".into(),
            email: "a@x.com".into(),
            gender: "male".into(),
            age: 30,
        }
    }

    #[test]
    fn test_patient_response_wraps_payload_in_array() {
        let body = serde_json::to_value(PatientResponse::new(patient(), "ok")).unwrap();
        assert_eq!(body["code"], 200);
        assert_eq!(body["message"], "ok");
        assert_eq!(body["data"][0]["age"], 30);
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
    }

    #[test]
    fn test_list_response_nests_the_list() {
        let body =
            serde_json::to_value(PatientListResponse::new(vec![patient(), patient()], "ok"))
                .unwrap();
        assert_eq!(body["data"].as_array().unwrap().len(), 1);
        assert_eq!(body["data"][0].as_array().unwrap().len(), 2);

        let empty = serde_json::to_value(PatientListResponse::new(vec![], "empty")).unwrap();
        assert_eq!(empty["data"], json!([[]]));
    }

    #[test]
    fn test_error_response_shape() {
        let body = serde_json::to_value(ErrorResponse::new(
            "Error Occurred",
            500,
            "Patient does not exist.",
        ))
        .unwrap();
        assert_eq!(
            body,
            json!({"error": "Error Occurred", "code": 500, "message": "Patient does not exist."})
        );
    }
}
