//! Handler for `GET /contacts/{id}/qr-code`: the tag payload as a
//! downloadable SVG QR code.

use std::sync::Arc;

use axum::{
  extract::{Path, State},
  http::header,
  response::IntoResponse,
};
use tagcard_core::store::ContactStore;
use tagcard_ndef::{SVG_MEDIA_TYPE, VCardPayload, render_qr_svg};

use crate::{contacts::parse_id, error::ApiError};

/// `GET /contacts/{id}/qr-code`
pub async fn handler<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError>
where
  S: ContactStore,
{
  let id = parse_id(&id)?;

  let contact = store
    .get(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(ApiError::contact_not_found)?;

  let svg = render_qr_svg(&VCardPayload::from(&contact))?;
  let disposition = format!("attachment; filename=\"contact-{id}.svg\"");

  Ok((
    [
      (header::CONTENT_TYPE, SVG_MEDIA_TYPE.to_string()),
      (header::CONTENT_DISPOSITION, disposition),
    ],
    svg,
  ))
}
