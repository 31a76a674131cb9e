use diesel::prelude::*;

use crate::domain::promotion::{
    NewPromotion as DomainNewPromotion, Promotion as DomainPromotion,
    UpdatePromotion as DomainUpdatePromotion,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::promotions)]
pub struct Promotion {
    pub id: i32,
    pub description: String,
    pub discount: f64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::promotions)]
pub struct NewPromotion<'a> {
    pub description: &'a str,
    pub discount: f64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::promotions)]
pub struct UpdatePromotion<'a> {
    pub description: Option<&'a str>,
    pub discount: Option<f64>,
}

/// Link row between a product and a promotion.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = crate::schema::product_promotions)]
pub struct NewProductPromotion {
    pub product_id: i32,
    pub promotion_id: i32,
}

impl From<Promotion> for DomainPromotion {
    fn from(value: Promotion) -> Self {
        Self {
            id: value.id,
            description: value.description,
            discount: value.discount,
        }
    }
}

impl<'a> From<&'a DomainNewPromotion> for NewPromotion<'a> {
    fn from(value: &'a DomainNewPromotion) -> Self {
        Self {
            description: value.description.as_str(),
            discount: value.discount,
        }
    }
}

impl<'a> From<&'a DomainUpdatePromotion> for UpdatePromotion<'a> {
    fn from(value: &'a DomainUpdatePromotion) -> Self {
        Self {
            description: value.description.as_deref(),
            discount: value.discount,
        }
    }
}
