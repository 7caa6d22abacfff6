//! vCard rendering and the NFC 215 size rule.

use base64::{Engine as _, engine::general_purpose::STANDARD as B64};
use serde::Serialize;
use tagcard_core::contact::{Contact, ContactFields, display_name};

use crate::error::{Error, Result};

/// Usable data capacity of an NFC 215 tag, in bytes.
pub const NFC_215_CAPACITY: usize = 504;

/// A rendered vCard and the two derived views of it that clients need.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VCardPayload {
  pub payload:        String,
  /// Base64 (standard alphabet, padded) of the UTF-8 bytes of `payload`.
  pub payload_base64: String,
  /// UTF-8 byte length of `payload`, not its character count.
  pub size_bytes:     usize,
}

impl VCardPayload {
  pub fn fits_nfc_215(&self) -> bool { self.size_bytes <= NFC_215_CAPACITY }
}

/// Render the six-line vCard block for a contact.
///
/// `FN` is `name`, or `phone_number` when `name` is empty. Values are copied
/// verbatim; reserved characters (`,` `;` `\`) are not escaped.
pub fn render_vcard(phone_number: &str, text: &str, name: &str) -> VCardPayload {
  let payload = [
    "BEGIN:VCARD".to_string(),
    "VERSION:3.0".to_string(),
    format!("FN:{}", display_name(name, phone_number)),
    format!("TEL:{phone_number}"),
    format!("NOTE:{text}"),
    "END:VCARD".to_string(),
  ]
  .join("\n");

  VCardPayload {
    payload_base64: B64.encode(payload.as_bytes()),
    size_bytes: payload.len(),
    payload,
  }
}

impl From<&ContactFields> for VCardPayload {
  fn from(f: &ContactFields) -> Self {
    render_vcard(&f.phone_number, &f.text, &f.name)
  }
}

impl From<&Contact> for VCardPayload {
  fn from(c: &Contact) -> Self { render_vcard(&c.phone_number, &c.text, &c.name) }
}

/// Reject payloads that do not fit on an NFC 215 tag. Exactly
/// [`NFC_215_CAPACITY`] bytes is accepted.
pub fn check_capacity(payload: &VCardPayload) -> Result<()> {
  if payload.fits_nfc_215() {
    Ok(())
  } else {
    Err(Error::TooLarge {
      size: payload.size_bytes,
      max:  NFC_215_CAPACITY,
    })
  }
}

/// Decode a `payload_base64` value back into the vCard text.
pub fn decode_payload(encoded: &str) -> Result<String> {
  Ok(String::from_utf8(B64.decode(encoded)?)?)
}
