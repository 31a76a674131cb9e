use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::product::{
    NewProduct as DomainNewProduct, Product as DomainProduct, UpdateProduct as DomainUpdateProduct,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::products)]
#[diesel(belongs_to(super::collection::Collection, foreign_key = collection_id))]
pub struct Product {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price_cents: i64,
    pub inventory: i32,
    pub collection_id: i32,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::products)]
pub struct NewProduct<'a> {
    pub title: &'a str,
    pub slug: &'a str,
    pub description: Option<&'a str>,
    pub unit_price_cents: i64,
    pub inventory: i32,
    pub collection_id: i32,
    pub updated_at: NaiveDateTime,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::products)]
pub struct UpdateProduct<'a> {
    pub title: Option<&'a str>,
    pub slug: Option<&'a str>,
    pub description: Option<Option<&'a str>>,
    pub unit_price_cents: Option<i64>,
    pub inventory: Option<i32>,
    pub collection_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl From<Product> for DomainProduct {
    fn from(value: Product) -> Self {
        Self {
            id: value.id,
            title: value.title,
            slug: value.slug,
            description: value.description,
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            collection_id: value.collection_id,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewProduct> for NewProduct<'a> {
    fn from(value: &'a DomainNewProduct) -> Self {
        Self {
            title: value.title.as_str(),
            slug: value.slug.as_str(),
            description: value.description.as_deref(),
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            collection_id: value.collection_id,
            updated_at: value.updated_at,
        }
    }
}

impl<'a> From<&'a DomainUpdateProduct> for UpdateProduct<'a> {
    fn from(value: &'a DomainUpdateProduct) -> Self {
        Self {
            title: value.title.as_deref(),
            slug: value.slug.as_deref(),
            description: value
                .description
                .as_ref()
                .map(|description| description.as_deref()),
            unit_price_cents: value.unit_price_cents,
            inventory: value.inventory,
            collection_id: value.collection_id,
            updated_at: value.updated_at,
        }
    }
}
