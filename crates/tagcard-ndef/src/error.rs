//! Error types for the tagcard-ndef formatter.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error(
    "Data too large for NFC 215 tag. Size: {size} bytes (max: {max} bytes)"
  )]
  TooLarge { size: usize, max: usize },

  #[error("payload is not valid base64: {0}")]
  Base64(#[from] base64::DecodeError),

  #[error("cannot encode payload as a QR code: {0}")]
  Qr(#[from] qrcode::types::QrError),

  #[error("payload is not valid UTF-8: {0}")]
  Utf8(#[from] std::string::FromUtf8Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
