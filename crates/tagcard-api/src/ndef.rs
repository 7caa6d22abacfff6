//! Handler for `GET /contacts/{id}/ndef` — the full record for an NFC writing
//! app, plus instructions for the person holding the tag.
//!
//! Reads never re-check the size limit: a record stored under an older limit
//! is still returned, with `nfc_215_compatible` telling the truth about it.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
};
use serde::{Deserialize, Serialize};
use tagcard_core::store::ContactStore;
use tagcard_ndef::{NFC_215_CAPACITY, NdefRecord};
use uuid::Uuid;

use crate::{contacts::parse_id, error::ApiError};

/// Apps known to write `text/vcard` records onto NTAG215 tags.
pub const RECOMMENDED_APPS: [&str; 3] = [
  "NFC Tools (Android/iOS)",
  "TagWriter by NXP (Android/iOS)",
  "NFC TagInfo (Android)",
];

pub const USAGE: &str =
  "Copy the payload data and use an NFC writing app to write to your NFC 215 tag";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Instructions {
  pub nfc_215_compatible: bool,
  pub recommended_apps:   Vec<String>,
  pub usage:              String,
}

impl Instructions {
  pub fn for_record(record: &NdefRecord) -> Self {
    Self {
      nfc_215_compatible: record.size_bytes <= NFC_215_CAPACITY,
      recommended_apps:   RECOMMENDED_APPS.iter().map(|s| s.to_string()).collect(),
      usage:              USAGE.to_string(),
    }
  }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NdefResponse {
  pub contact_id:   Uuid,
  pub ndef_record:  NdefRecord,
  pub instructions: Instructions,
}

/// `GET /contacts/{id}/ndef`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<Json<NdefResponse>, ApiError>
where
  S: ContactStore,
{
  let id = parse_id(&id)?;

  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;

  let ndef_record = NdefRecord::from(&contact);
  let instructions = Instructions::for_record(&ndef_record);
  Ok(Json(NdefResponse {
    contact_id: contact.id,
    ndef_record,
    instructions,
  }))
}
