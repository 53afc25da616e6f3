//! Request and record schemas.
//!
//! Validation happens while deserialising: each field is one of the validated primitives from
//! `hospital-types`, so a request body that parses is a request body that is valid. Absent and
//! `null` fields of [`UpdatePatientReq`] both become `None` and are left out of the update.

use hospital_core::{EmailAddress, NewPatient, NonEmptyText, Patient, PatientAge, PatientChanges};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body of `POST /patient/`. Every field is required.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CreatePatientReq {
    #[schema(value_type = String, example = "Navanath Navaskar")]
    pub fullname: NonEmptyText,
    #[schema(value_type = String, example = "nnavaskar@gmail.com")]
    pub email: EmailAddress,
    #[schema(value_type = String, example = "male")]
    pub gender: NonEmptyText,
    #[schema(value_type = i64, minimum = 1, maximum = 99, example = 10)]
    pub age: PatientAge,
}

impl From<CreatePatientReq> for NewPatient {
    fn from(req: CreatePatientReq) -> Self {
        NewPatient {
            fullname: req.fullname,
            email: req.email,
            gender: req.gender,
            age: req.age,
        }
    }
}

/// Body of `PUT /patient/{id}`. Supply any subset of fields.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct UpdatePatientReq {
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "Navanath Navaskar")]
    pub fullname: Option<NonEmptyText>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "nnavaskar@gmail.com")]
    pub email: Option<EmailAddress>,
    #[serde(default)]
    #[schema(value_type = Option<String>, example = "male")]
    pub gender: Option<NonEmptyText>,
    #[serde(default)]
    #[schema(value_type = Option<i64>, minimum = 1, maximum = 99, example = 10)]
    pub age: Option<PatientAge>,
}

impl From<UpdatePatientReq> for PatientChanges {
    fn from(req: UpdatePatientReq) -> Self {
        PatientChanges {
            fullname: req.fullname,
            email: req.email,
            gender: req.gender,
            age: req.age,
        }
    }
}

/// A stored patient as returned in response envelopes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct PatientRes {
    #[schema(example = "64b7f0c2e13a4c0f9a8d1e22")]
    pub id: String,
    #[schema(example = "Navanath Navaskar")]
    pub fullname: String,
    #[schema(example = "nnavaskar@gmail.com")]
    pub email: String,
    #[schema(example = "male")]
    pub gender: String,
    #[schema(example = 10)]
    pub age: i64,
}

impl From<Patient> for PatientRes {
    fn from(patient: Patient) -> Self {
        PatientRes {
            id: patient.id,
            fullname: patient.fullname,
            email: patient.email,
            gender: patient.gender,
            age: patient.age,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_req_accepts_valid_body() {
        let req: CreatePatientReq = serde_json::from_str(
            r#"{"fullname":"A","email":"a@x.com","gender":"male","age":30}"#,
        )
        .unwrap();

        let new_patient = NewPatient::from(req);
        assert_eq!(new_patient.fullname.as_str(), "A");
        assert_eq!(new_patient.age.get(), 30);
    }

    #[test]
    fn test_create_req_rejects_out_of_range_age() {
        let err = serde_json::from_str::<CreatePatientReq>(
            r#"{"fullname":"A","email":"a@x.com","gender":"male","age":150}"#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("age must be less than 100"));
    }

    #[test]
    fn test_create_req_rejects_missing_field_and_bad_email() {
        assert!(serde_json::from_str::<CreatePatientReq>(
            r#"{"fullname":"A","email":"a@x.com","age":30}"#
        )
        .is_err());
        assert!(serde_json::from_str::<CreatePatientReq>(
            r#"{"fullname":"A","email":"nope","gender":"male","age":30}"#
        )
        .is_err());
    }

    #[test]
    fn test_update_req_strips_absent_and_null_fields() {
        let req: UpdatePatientReq =
            serde_json::from_str(r#"{"age": 31, "email": null}"#).unwrap();
        let changes = PatientChanges::from(req);

        assert_eq!(changes.len(), 1);
        assert_eq!(changes.age.unwrap().get(), 31);
        assert!(changes.email.is_none());
    }

    #[test]
    fn test_update_req_validates_supplied_fields() {
        assert!(serde_json::from_str::<UpdatePatientReq>(r#"{"age": 0}"#).is_err());
        assert!(serde_json::from_str::<UpdatePatientReq>(r#"{"fullname": "  "}"#).is_err());

        let empty: UpdatePatientReq = serde_json::from_str("{}").unwrap();
        assert!(PatientChanges::from(empty).is_empty());
    }
}
