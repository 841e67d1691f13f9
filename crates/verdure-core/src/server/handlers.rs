//! Request handlers.

use crate::error::RelayError;
use crate::relay::Relay;
use crate::types::{CareGuide, Upload};
use axum::extract::multipart::MultipartRejection;
use axum::extract::{Multipart, State};
use axum::Json;
use std::sync::Arc;

/// Multipart field carrying the photo.
pub const IMAGE_FIELD: &str = "image";

const NO_IMAGE: &str = "No image file provided";

/// `POST /identify`: identify the uploaded plant and return its care guide.
///
/// The body is the completion text as a JSON string, not re-parsed.
pub async fn identify(
    State(relay): State<Arc<Relay>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Json<CareGuide>, RelayError> {
    let multipart = multipart.map_err(|rejection| {
        tracing::debug!("Request is not multipart: {rejection}");
        RelayError::validation(NO_IMAGE)
    })?;

    let upload = read_image(multipart)
        .await?
        .ok_or_else(|| RelayError::validation(NO_IMAGE))?;

    let guide = relay.identify(&upload).await?;
    Ok(Json(guide))
}

/// Pull the first file part named `image` out of the form.
///
/// A part named `image` without a filename is a plain form value, not a
/// file, and is skipped.
async fn read_image(mut multipart: Multipart) -> Result<Option<Upload>, RelayError> {
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        RelayError::validation(format!("Failed to parse multipart data: {}", e.body_text()))
    })? {
        if field.name() != Some(IMAGE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };
        let content_type = field
            .content_type()
            .unwrap_or("application/octet-stream")
            .to_string();

        let data = field.bytes().await.map_err(|e| {
            RelayError::validation(format!("Failed to read image: {}", e.body_text()))
        })?;

        tracing::debug!(
            file_name = %file_name,
            content_type = %content_type,
            size = data.len(),
            "Received image upload"
        );

        return Ok(Some(Upload::new(file_name, content_type, data)));
    }

    Ok(None)
}
