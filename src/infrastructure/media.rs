// src/infrastructure/media.rs
use crate::application::{
    ApplicationResult,
    error::ApplicationError,
    ports::media::{ImageRejection, ImageUpload, ImageValidator, MAX_IMAGE_BYTES},
};
use async_trait::async_trait;
use image::ImageFormat;

/// Accepts JPEG and PNG photos that actually decode.
#[derive(Default, Clone)]
pub struct DecodingImageValidator;

fn declared_format(content_type: Option<&str>) -> Result<ImageFormat, ImageRejection> {
    let essence = content_type
        .and_then(|value| value.split(';').next())
        .map(|value| value.trim().to_ascii_lowercase());
    match essence.as_deref() {
        Some("image/jpeg") => Ok(ImageFormat::Jpeg),
        Some("image/png") => Ok(ImageFormat::Png),
        _ => Err(ImageRejection::UnsupportedMedia),
    }
}

#[async_trait]
impl ImageValidator for DecodingImageValidator {
    async fn validate(&self, image: &ImageUpload) -> ApplicationResult<()> {
        if image.bytes.len() > MAX_IMAGE_BYTES {
            return Err(ImageRejection::TooLarge.into());
        }
        let format = declared_format(image.content_type.as_deref())?;

        let bytes = image.bytes.clone();
        tokio::task::spawn_blocking(move || {
            image::load_from_memory_with_format(&bytes, format)
                .map(|_| ())
                .map_err(|err| {
                    tracing::debug!(error = %err, "image decode failed");
                    ImageRejection::Corrupted
                })
        })
        .await
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .map_err(ApplicationError::from)
    }
}
