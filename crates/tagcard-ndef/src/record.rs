//! The NDEF record description handed to NFC writing apps.
//!
//! This is a labelled view of the vCard payload, not a binary NDEF encoder;
//! the writing app builds the actual TNF/type/payload bytes.

use serde::{Deserialize, Serialize};
use tagcard_core::contact::Contact;

use crate::vcard::VCardPayload;

/// MIME type of the record's payload.
pub const VCARD_MEDIA_TYPE: &str = "text/vcard";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NdefRecord {
  #[serde(rename = "type")]
  pub record_type:    String,
  pub payload:        String,
  pub payload_base64: String,
  pub size_bytes:     usize,
}

impl From<VCardPayload> for NdefRecord {
  fn from(p: VCardPayload) -> Self {
    Self {
      record_type:    VCARD_MEDIA_TYPE.to_string(),
      payload:        p.payload,
      payload_base64: p.payload_base64,
      size_bytes:     p.size_bytes,
    }
  }
}

impl From<&Contact> for NdefRecord {
  fn from(c: &Contact) -> Self { VCardPayload::from(c).into() }
}

#[cfg(test)]
mod tests {
  use chrono::Utc;
  use tagcard_core::contact::ContactFields;

  use super::*;

  #[test]
  fn serialises_with_wire_keys() {
    let contact =
      Contact::create(ContactFields::new("+49 1", "Hi", ""), Utc::now());
    let json = serde_json::to_value(NdefRecord::from(&contact)).unwrap();

    assert_eq!(json["type"], "text/vcard");
    assert_eq!(
      json["payload"],
      "BEGIN:VCARD\nVERSION:3.0\nFN:+49 1\nTEL:+49 1\nNOTE:Hi\nEND:VCARD"
    );
    assert_eq!(json["size_bytes"], 60);
    assert!(json["payload_base64"].is_string());
  }
}
