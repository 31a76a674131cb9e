use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use thiserror::Error;

use crate::domain::product_image::MAX_IMAGE_SIZE_KB;

pub type ProductImageFormResult<T> = Result<T, ProductImageFormError>;

#[derive(Debug, Error)]
pub enum ProductImageFormError {
    #[error("Max size {max}", max = MAX_IMAGE_SIZE_KB)]
    TooLarge,
    #[error("upload a valid image; the file is empty or not a PNG, JPEG, GIF or WebP image")]
    NotAnImage,
    #[error("failed to read uploaded file: {0}")]
    Io(#[from] std::io::Error),
}

/// Multipart upload for `POST /products/{id}/images`.
#[derive(MultipartForm)]
pub struct UploadProductImageForm {
    #[multipart(limit = "10MB")]
    pub image: TempFile,
}

impl UploadProductImageForm {
    /// Check size and content, returning the file extension to store the
    /// image under.
    pub fn checked_extension(&mut self) -> ProductImageFormResult<&'static str> {
        if self.image.size > MAX_IMAGE_SIZE_KB * 1024 {
            return Err(ProductImageFormError::TooLarge);
        }

        self.image.file.rewind()?;
        let mut head = [0u8; 12];
        let read = read_head(self.image.file.by_ref(), &mut head)?;

        detect_image_format(&head[..read]).ok_or(ProductImageFormError::NotAnImage)
    }
}

fn read_head(mut reader: impl Read, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..])? {
            0 => break,
            n => filled += n,
        }
    }
    Ok(filled)
}

/// Extension for the image format recognised from the leading bytes.
pub fn detect_image_format(head: &[u8]) -> Option<&'static str> {
    if head.starts_with(b"\x89PNG\r\n\x1a\n") {
        Some("png")
    } else if head.starts_with(&[0xFF, 0xD8, 0xFF]) {
        Some("jpg")
    } else if head.starts_with(b"GIF87a") || head.starts_with(b"GIF89a") {
        Some("gif")
    } else if head.len() >= 12 && &head[..4] == b"RIFF" && &head[8..12] == b"WEBP" {
        Some("webp")
    } else {
        None
    }
}
