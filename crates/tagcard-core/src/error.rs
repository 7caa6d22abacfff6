//! Error types for `tagcard-core`.

use serde::Serialize;
use thiserror::Error;

/// A single rejected field, as reported back to API callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
  pub field:   &'static str,
  pub message: String,
}

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid contact: {}", summarize(.0))]
  Validation(Vec<FieldViolation>),
}

fn summarize(violations: &[FieldViolation]) -> String {
  violations
    .iter()
    .map(|v| format!("{}: {}", v.field, v.message))
    .collect::<Vec<_>>()
    .join("; ")
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
