use chrono::NaiveDateTime;
use serde::Serialize;

use crate::domain::product_image::{NewProductImage, ProductImage};
use crate::forms::product_images::{ProductImageFormError, UploadProductImageForm};
use crate::media::MediaStore;
use crate::repository::{ProductImageReader, ProductImageWriter, ProductReader};
use crate::services::products::ensure_product_exists;
use crate::services::{ServiceError, ServiceResult};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductImageView {
    pub id: i32,
    pub product_id: i32,
    /// Path relative to the media root.
    pub image: String,
    pub url: String,
    pub created_at: NaiveDateTime,
}

impl From<ProductImage> for ProductImageView {
    fn from(image: ProductImage) -> Self {
        Self {
            url: MediaStore::url(&image.image),
            id: image.id,
            product_id: image.product_id,
            image: image.image,
            created_at: image.created_at,
        }
    }
}

pub fn load_product_images<R>(repo: &R, product_id: i32) -> ServiceResult<Vec<ProductImageView>>
where
    R: ProductReader + ProductImageReader + ?Sized,
{
    ensure_product_exists(repo, product_id)?;

    let images = repo
        .list_product_images(product_id)
        .map_err(ServiceError::from)?;

    Ok(images.into_iter().map(ProductImageView::from).collect())
}

pub fn load_product_image<R>(
    repo: &R,
    product_id: i32,
    image_id: i32,
) -> ServiceResult<ProductImageView>
where
    R: ProductImageReader + ?Sized,
{
    repo.get_product_image(product_id, image_id)
        .map_err(ServiceError::from)?
        .map(ProductImageView::from)
        .ok_or(ServiceError::NotFound)
}

/// Validate the upload, copy it under the media root and record it.
///
/// The stored file is removed again when the row cannot be written.
pub fn upload_product_image<R>(
    repo: &R,
    media: &MediaStore,
    product_id: i32,
    mut form: UploadProductImageForm,
) -> ServiceResult<ProductImageView>
where
    R: ProductReader + ProductImageWriter + ?Sized,
{
    let extension = form.checked_extension().map_err(|err| match err {
        ProductImageFormError::Io(err) => ServiceError::Internal(err.to_string()),
        other => ServiceError::Form(other.to_string()),
    })?;

    ensure_product_exists(repo, product_id)?;

    let stored = media
        .save_product_image(form.image.file.path(), extension)
        .map_err(|err| ServiceError::Internal(format!("failed to store image: {err}")))?;

    match repo.create_product_image(&NewProductImage::new(product_id, stored.as_str())) {
        Ok(image) => {
            log::info!("Stored image {} for product {product_id}", image.image);
            Ok(image.into())
        }
        Err(err) => {
            if let Err(cleanup) = media.remove(&stored) {
                log::warn!("Failed to remove orphaned image {stored}: {cleanup}");
            }
            Err(err.into())
        }
    }
}

/// Delete the record, then its file. A file that cannot be removed is logged.
pub fn remove_product_image<R>(
    repo: &R,
    media: &MediaStore,
    product_id: i32,
    image_id: i32,
) -> ServiceResult<()>
where
    R: ProductImageWriter + ?Sized,
{
    let image = repo
        .delete_product_image(product_id, image_id)
        .map_err(ServiceError::from)?;

    if let Err(err) = media.remove(&image.image) {
        log::warn!("Failed to remove image file {}: {err}", image.image);
    }

    Ok(())
}
