use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product_image::{
    NewProductImage as DomainNewProductImage, ProductImage as DomainProductImage,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::product_images)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct ProductImage {
    pub id: i32,
    pub product_id: i32,
    pub image: String,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::product_images)]
pub struct NewProductImage<'a> {
    pub product_id: i32,
    pub image: &'a str,
}

impl From<ProductImage> for DomainProductImage {
    fn from(value: ProductImage) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            image: value.image,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewProductImage> for NewProductImage<'a> {
    fn from(value: &'a DomainNewProductImage) -> Self {
        Self {
            product_id: value.product_id,
            image: value.image.as_str(),
        }
    }
}
