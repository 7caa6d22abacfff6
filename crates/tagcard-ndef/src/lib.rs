//! vCard payload formatter for NFC 215 tags.
//!
//! Renders a contact as a minimal vCard 3.0 block, wraps it in an NDEF
//! record description, and draws the same bytes as a QR code. The output is
//! intentionally not RFC 6350 strict: no escaping, no line folding, `\n`
//! line endings. What goes on the tag is exactly what the user typed.

pub mod error;
pub mod qr;
pub mod record;
pub mod vcard;

pub use error::{Error, Result};
pub use qr::{SVG_MEDIA_TYPE, render_qr_svg};
pub use record::{NdefRecord, VCARD_MEDIA_TYPE};
pub use vcard::{
  NFC_215_CAPACITY, VCardPayload, check_capacity, decode_payload, render_vcard,
};
