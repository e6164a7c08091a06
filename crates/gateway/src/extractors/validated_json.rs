//! Validated JSON extractor.

use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    Json,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use common::AppError;

/// JSON extractor that rejects malformed or invalid payloads with a 400.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value
            .validate()
            .map_err(|e| AppError::validation(first_message(&e)))?;

        Ok(ValidatedJson(value))
    }
}

/// Message of the alphabetically first failing field.
fn first_message(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .into_iter()
        .min_by(|(a, _), (b, _)| a.cmp(b))
        .and_then(|(_, errors)| errors.first())
        .and_then(|error| error.message.as_ref())
        .map(|msg| msg.to_string())
        .unwrap_or_else(|| "Validation failed".to_string())
}

/// Reject strings that are empty or whitespace only.
pub fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}
