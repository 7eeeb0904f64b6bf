use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use credit_core::CoreError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dto::ValidationErrors;

pub const BAD_REQUEST_TITLE: &str = "Bad Request! Check the documentation!";
pub const CONFLICT_TITLE: &str = "Conflict! Check the documentation!";
pub const INTERNAL_ERROR_TITLE: &str = "Internal Server Error! Check the documentation!";

/// Error body returned by every [`CreditApi`](super::CreditApi) operation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Error)]
#[error("{title} ({status} {exception})")]
pub struct ExceptionDetails {
    pub title: String,
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub exception: String,
    pub details: BTreeMap<String, String>,
}

impl ExceptionDetails {
    pub fn new(
        title: impl Into<String>,
        status: u16,
        exception: impl Into<String>,
        details: BTreeMap<String, String>,
    ) -> Self {
        Self {
            title: title.into(),
            timestamp: Utc::now(),
            status,
            exception: exception.into(),
            details,
        }
    }

    pub fn is_bad_request(&self) -> bool {
        self.status == 400
    }

    pub fn is_conflict(&self) -> bool {
        self.status == 409
    }

    /// First detail message, if any.
    pub fn message(&self) -> Option<&str> {
        self.details.values().next().map(String::as_str)
    }
}

impl From<CoreError> for ExceptionDetails {
    fn from(err: CoreError) -> Self {
        let (title, status) = match &err {
            CoreError::NotFound(_) | CoreError::Validation(_) | CoreError::Authorization(_) => {
                (BAD_REQUEST_TITLE, 400)
            }
            CoreError::Conflict(_) => (CONFLICT_TITLE, 409),
            CoreError::Storage(_) | CoreError::Io(_) => (INTERNAL_ERROR_TITLE, 500),
        };
        let details = BTreeMap::from([("cause".to_string(), err.to_string())]);
        Self::new(title, status, err.kind(), details)
    }
}

impl From<ValidationErrors> for ExceptionDetails {
    fn from(errors: ValidationErrors) -> Self {
        Self::new(
            BAD_REQUEST_TITLE,
            400,
            "Validation",
            errors.fields().clone(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_core_errors_to_status_codes() {
        let not_found = ExceptionDetails::from(CoreError::NotFound("Id 9 not found".into()));
        assert_eq!(not_found.status, 400);
        assert_eq!(not_found.title, BAD_REQUEST_TITLE);
        assert_eq!(not_found.exception, "NotFound");
        assert_eq!(not_found.message(), Some("Id 9 not found"));

        let conflict = ExceptionDetails::from(CoreError::Conflict("dup".into()));
        assert!(conflict.is_conflict());
        assert_eq!(conflict.title, CONFLICT_TITLE);

        let storage = ExceptionDetails::from(CoreError::Storage("disk".into()));
        assert_eq!(storage.status, 500);
    }

    #[test]
    fn validation_details_keep_field_names() {
        let mut errors = ValidationErrors::new();
        errors.add("cpf", "invalid CPF");
        errors.add("email", "invalid e-mail");

        let details = ExceptionDetails::from(errors);
        assert!(details.is_bad_request());
        assert_eq!(details.exception, "Validation");
        assert_eq!(details.details.len(), 2);
        assert_eq!(details.details["cpf"], "invalid CPF");
    }

    #[test]
    fn serializes_expected_shape() {
        let details = ExceptionDetails::from(CoreError::Authorization("Contact admin".into()));
        let json = serde_json::to_value(&details).unwrap();
        for key in ["title", "timestamp", "status", "exception", "details"] {
            assert!(json.get(key).is_some(), "missing {key}");
        }
    }
}
