use std::fmt;

use thiserror::Error;

use super::types::{FeedbackPayload, NewFeedback};

/// A single field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: &'static str,
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} {}", self.field, self.field, self.reason)
    }
}

/// Payload rejected at the service boundary. Lists every offending field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Feedback validation failed: {}", join_fields(.fields))]
pub struct ValidationError {
    pub fields: Vec<FieldError>,
}

fn join_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn required(field: &'static str, value: Option<String>, errors: &mut Vec<FieldError>) -> String {
    match value {
        Some(value) if !value.is_empty() => value,
        _ => {
            errors.push(FieldError {
                field,
                reason: "is required",
            });
            String::new()
        }
    }
}

impl TryFrom<FeedbackPayload> for NewFeedback {
    type Error = ValidationError;

    fn try_from(payload: FeedbackPayload) -> Result<Self, Self::Error> {
        let mut fields = Vec::new();
        let name = required("name", payload.name, &mut fields);
        let message = required("message", payload.message, &mut fields);

        if !fields.is_empty() {
            return Err(ValidationError { fields });
        }

        Ok(NewFeedback { name, message })
    }
}
