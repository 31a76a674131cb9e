use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::review::{
    NewReview as DomainNewReview, Review as DomainReview, UpdateReview as DomainUpdateReview,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::reviews)]
#[diesel(belongs_to(super::product::Product, foreign_key = product_id))]
pub struct Review {
    pub id: i32,
    pub product_id: i32,
    pub name: String,
    pub description: String,
    pub date: NaiveDate,
    pub created_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::reviews)]
pub struct NewReview<'a> {
    pub product_id: i32,
    pub name: &'a str,
    pub description: &'a str,
    pub date: NaiveDate,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::reviews)]
pub struct UpdateReview<'a> {
    pub name: Option<&'a str>,
    pub description: Option<&'a str>,
    pub date: Option<NaiveDate>,
}

impl From<Review> for DomainReview {
    fn from(value: Review) -> Self {
        Self {
            id: value.id,
            product_id: value.product_id,
            name: value.name,
            description: value.description,
            date: value.date,
            created_at: value.created_at,
        }
    }
}

impl<'a> From<&'a DomainNewReview> for NewReview<'a> {
    fn from(value: &'a DomainNewReview) -> Self {
        Self {
            product_id: value.product_id,
            name: value.name.as_str(),
            description: value.description.as_str(),
            date: value.date,
        }
    }
}

impl<'a> From<&'a DomainUpdateReview> for UpdateReview<'a> {
    fn from(value: &'a DomainUpdateReview) -> Self {
        Self {
            name: value.name.as_deref(),
            description: value.description.as_deref(),
            date: value.date,
        }
    }
}
