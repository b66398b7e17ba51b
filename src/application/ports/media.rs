// src/application/ports/media.rs
use crate::application::ApplicationResult;
use async_trait::async_trait;
use bytes::Bytes;
use thiserror::Error;

pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpeg", "image/png"];

/// Proof-of-delivery photo as received from the client.
#[derive(Debug, Clone)]
pub struct ImageUpload {
    pub file_name: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ImageRejection {
    #[error("image must not exceed 5 MB")]
    TooLarge,
    #[error("image must be a JPEG or PNG file")]
    UnsupportedMedia,
    #[error("image could not be decoded")]
    Corrupted,
}

#[async_trait]
pub trait ImageValidator: Send + Sync {
    /// Rejections surface as `ApplicationError::Image`.
    async fn validate(&self, image: &ImageUpload) -> ApplicationResult<()>;
}
