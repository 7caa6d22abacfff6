//! Handlers for `/contacts` endpoints.
//!
//! | Method   | Path | Notes |
//! |----------|------|-------|
//! | `GET`    | `/contacts` | Newest first, each with its derived tag payload |
//! | `POST`   | `/contacts` | Body: [`ContactFields`]; 422 on bad fields, 400 if the payload exceeds 504 bytes |
//! | `PUT`    | `/contacts/{id}` | Same body as `POST`; 422 on bad fields, then 404 if not found, then 400 on size |
//! | `DELETE` | `/contacts/{id}` | 404 if not found |
//!
//! Writes are checked in full before anything is written, so a rejected
//! request never leaves a partial record behind.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State, rejection::JsonRejection},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tagcard_core::{
  contact::{Contact, ContactFields},
  store::ContactStore,
};
use tagcard_ndef::{VCardPayload, check_capacity};
use uuid::Uuid;

use crate::error::ApiError;

// ─── Response shape ───────────────────────────────────────────────────────────

/// A stored contact plus the tag payload derived from it on this read.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactResponse {
  pub id:           Uuid,
  pub phone_number: String,
  pub text:         String,
  pub name:         String,
  pub created_at:   DateTime<Utc>,
  pub updated_at:   DateTime<Utc>,
  /// Base64 of the vCard payload.
  pub ndef_data:    String,
  /// UTF-8 byte length of the vCard payload.
  pub data_size:    usize,
}

impl ContactResponse {
  fn new(contact: Contact, payload: VCardPayload) -> Self {
    Self {
      id:           contact.id,
      phone_number: contact.phone_number,
      text:         contact.text,
      name:         contact.name,
      created_at:   contact.created_at,
      updated_at:   contact.updated_at,
      ndef_data:    payload.payload_base64,
      data_size:    payload.size_bytes,
    }
  }
}

impl From<Contact> for ContactResponse {
  fn from(contact: Contact) -> Self {
    let payload = VCardPayload::from(&contact);
    Self::new(contact, payload)
  }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

/// Ids are UUIDs; anything else cannot name a stored contact.
pub(crate) fn parse_id(raw: &str) -> Result<Uuid, ApiError> {
  Uuid::parse_str(raw).map_err(|_| ApiError::contact_not_found())
}

/// Field limits first, then the rendered size. Returns the payload so the
/// caller does not render twice.
fn check_writable(fields: &ContactFields) -> Result<VCardPayload, ApiError> {
  fields.validate()?;
  let payload = VCardPayload::from(fields);
  check_capacity(&payload)?;
  Ok(payload)
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /contacts`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<ContactResponse>>, ApiError>
where
  S: ContactStore,
{
  let contacts = store
    .list()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(contacts.into_iter().map(ContactResponse::from).collect()))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /contacts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  body: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError>
where
  S: ContactStore,
{
  let Json(fields) = body?;
  let payload = check_writable(&fields).inspect_err(|e| {
    tracing::warn!(error = %e, "rejected new contact");
  })?;

  let contact = store
    .insert(fields)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;

  tracing::info!(id = %contact.id, size = payload.size_bytes, "created contact");
  Ok(Json(ContactResponse::new(contact, payload)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PUT /contacts/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
  body: Result<Json<ContactFields>, JsonRejection>,
) -> Result<Json<ContactResponse>, ApiError>
where
  S: ContactStore,
{
  // The body is judged on its own first: a malformed update is 422 whether
  // or not the id exists.
  let Json(fields) = body?;
  fields.validate()?;

  let id = parse_id(&id)?;
  store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;

  let payload = check_writable(&fields).inspect_err(|e| {
    tracing::warn!(%id, error = %e, "rejected contact update");
  })?;

  // The record can vanish between the lookup and the write.
  let contact = store
    .update(id, fields)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;

  tracing::info!(%id, size = payload.size_bytes, "updated contact");
  Ok(Json(ContactResponse::new(contact, payload)))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /contacts/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<Value>, ApiError>
where
  S: ContactStore,
{
  let id = parse_id(&id)?;

  let deleted = store
    .delete(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  if !deleted {
    return Err(ApiError::contact_not_found());
  }

  tracing::info!(%id, "deleted contact");
  Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
