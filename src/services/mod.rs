use crate::domain::content_type::ContentType;

pub mod addresses;
pub mod carts;
pub mod collections;
pub mod customers;
pub mod errors;
pub mod likes;
pub mod notifications;
pub mod orders;
pub mod product_images;
pub mod products;
pub mod promotions;
pub mod reviews;
pub mod tags;
pub mod users;

pub use errors::{ServiceError, ServiceResult};

/// Parse a content type taken from a URL segment.
pub(crate) fn parse_content_type(value: &str) -> ServiceResult<ContentType> {
    value
        .parse()
        .map_err(|err: crate::domain::content_type::UnknownContentType| {
            ServiceError::Form(err.to_string())
        })
}
