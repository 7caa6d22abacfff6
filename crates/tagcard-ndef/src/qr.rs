//! QR-code rendering of the vCard payload, for phones without NFC.
//!
//! The code carries exactly the bytes that go on the tag, so scanning it
//! yields the same contact card.

use qrcode::{EcLevel, QrCode, render::svg};

use crate::{error::Result, vcard::VCardPayload};

/// MIME type of [`render_qr_svg`] output.
pub const SVG_MEDIA_TYPE: &str = "image/svg+xml";

/// Smallest edge length of the rendered image, in pixels.
const MIN_DIMENSION: u32 = 256;

/// Render `payload` as a standalone SVG document.
///
/// Error correction level M holds up to 2331 bytes, comfortably more than a
/// tag-sized payload; only records stored under a much looser limit can fail.
pub fn render_qr_svg(payload: &VCardPayload) -> Result<String> {
  let code =
    QrCode::with_error_correction_level(payload.payload.as_bytes(), EcLevel::M)?;
  Ok(
    code
      .render::<svg::Color>()
      .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
      .build(),
  )
}
