//! Patient domain types.
//!
//! - [`Patient`] is the external record shape returned to callers.
//! - [`NewPatient`] carries the validated fields of a record about to be created.
//! - [`PatientChanges`] is a partial update; only `Some` fields are written.

use crate::repositories::store::PatientDocument;
use crate::{EmailAddress, NonEmptyText, PatientAge};
use serde::{Deserialize, Serialize};

/// A stored patient as seen by callers.
///
/// Fields are plain values rather than validated wrappers: records are validated on write, and
/// fields untouched by a partial update are not re-validated on read.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    /// Hex form of the store-assigned ObjectId.
    pub id: String,
    pub fullname: String,
    pub email: String,
    pub gender: String,
    pub age: i64,
}

impl From<PatientDocument> for Patient {
    fn from(doc: PatientDocument) -> Self {
        Self {
            id: doc.id.to_hex(),
            fullname: doc.fullname,
            email: doc.email,
            gender: doc.gender,
            age: doc.age,
        }
    }
}

/// All fields required to create a patient.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewPatient {
    pub fullname: NonEmptyText,
    pub email: EmailAddress,
    pub gender: NonEmptyText,
    pub age: PatientAge,
}

/// A partial update to an existing patient.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fullname: Option<NonEmptyText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<EmailAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<NonEmptyText>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<PatientAge>,
}

impl PatientChanges {
    /// True when no field is supplied.
    pub fn is_empty(&self) -> bool {
        self.fullname.is_none() && self.email.is_none() && self.gender.is_none() && self.age.is_none()
    }

    /// Number of supplied fields.
    pub fn len(&self) -> usize {
        [
            self.fullname.is_some(),
            self.email.is_some(),
            self.gender.is_some(),
            self.age.is_some(),
        ]
        .into_iter()
        .filter(|supplied| *supplied)
        .count()
    }

    /// Writes the supplied fields onto `doc`, leaving the rest untouched.
    pub fn apply_to(&self, doc: &mut PatientDocument) {
        if let Some(fullname) = &self.fullname {
            doc.fullname = fullname.as_str().to_owned();
        }
        if let Some(email) = &self.email {
            doc.email = email.as_str().to_owned();
        }
        if let Some(gender) = &self.gender {
            doc.gender = gender.as_str().to_owned();
        }
        if let Some(age) = self.age {
            doc.age = age.get();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    fn stored() -> PatientDocument {
        PatientDocument {
            id: ObjectId::new(),
            fullname: "Navanath Navaskar".into(),
            email: "nnavaskar@gmail.com".into(),
            gender: "male".into(),
            age: 10,
        }
    }

    #[test]
    fn test_patient_from_document_uses_hex_id() {
        let doc = stored();
        let id = doc.id;
        let patient = Patient::from(doc);

        assert_eq!(patient.id, id.to_hex());
        assert_eq!(patient.id.len(), 24);
        assert_eq!(patient.fullname, "Navanath Navaskar");
        assert_eq!(patient.age, 10);
    }

    #[test]
    fn test_changes_is_empty_and_len() {
        let mut changes = PatientChanges::default();
        assert!(changes.is_empty());
        assert_eq!(changes.len(), 0);

        changes.age = Some(PatientAge::new(30).unwrap());
        assert!(!changes.is_empty());
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn test_apply_to_only_touches_supplied_fields() {
        let mut doc = stored();
        let changes = PatientChanges {
            email: Some(EmailAddress::parse("new@example.org").unwrap()),
            age: Some(PatientAge::new(11).unwrap()),
            ..Default::default()
        };

        changes.apply_to(&mut doc);

        assert_eq!(doc.fullname, "Navanath Navaskar");
        assert_eq!(doc.gender, "male");
        assert_eq!(doc.email, "new@example.org");
        assert_eq!(doc.age, 11);
    }

    #[test]
    fn test_changes_deserialize_treats_null_as_absent() {
        let changes: PatientChanges =
            serde_json::from_str(r#"{"fullname": null, "gender": "female"}"#).unwrap();
        assert_eq!(changes.len(), 1);
        assert_eq!(changes.gender.unwrap().as_str(), "female");
    }
}
