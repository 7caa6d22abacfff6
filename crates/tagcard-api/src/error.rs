//! API error type and [`axum::response::IntoResponse`] implementation.

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use serde_json::json;
use tagcard_core::FieldViolation;
use thiserror::Error;

/// An error returned by an API handler.
#[derive(Debug, Error)]
pub enum ApiError {
  #[error("{0}")]
  NotFound(String),

  /// The body parsed but a field broke its length limit.
  #[error("invalid contact")]
  Validation(Vec<FieldViolation>),

  /// The body could not be turned into contact fields at all (missing or
  /// mistyped fields, bad JSON, wrong content type).
  #[error(transparent)]
  Body(#[from] JsonRejection),

  /// The rendered vCard does not fit on the tag, or cannot be drawn.
  #[error(transparent)]
  Payload(#[from] tagcard_ndef::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl ApiError {
  pub fn contact_not_found() -> Self { Self::NotFound("Contact not found".into()) }

  pub fn status(&self) -> StatusCode {
    match self {
      Self::NotFound(_) => StatusCode::NOT_FOUND,
      Self::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Body(rejection) => rejection.status(),
      Self::Payload(tagcard_ndef::Error::TooLarge { .. }) => StatusCode::BAD_REQUEST,
      Self::Payload(_) | Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

impl From<tagcard_core::Error> for ApiError {
  fn from(e: tagcard_core::Error) -> Self {
    match e {
      tagcard_core::Error::Validation(violations) => Self::Validation(violations),
    }
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();
    let body = match &self {
      ApiError::Validation(fields) => {
        json!({ "error": self.to_string(), "fields": fields })
      }
      ApiError::Body(rejection) => json!({ "error": rejection.body_text() }),
      ApiError::Store(e) => {
        tracing::error!(error = %e, "store failure");
        json!({ "error": self.to_string() })
      }
      _ => json!({ "error": self.to_string() }),
    };
    (status, Json(body)).into_response()
  }
}
