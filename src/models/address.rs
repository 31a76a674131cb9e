use diesel::prelude::*;

use crate::domain::address::{
    Address as DomainAddress, NewAddress as DomainNewAddress, UpdateAddress as DomainUpdateAddress,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::addresses)]
#[diesel(belongs_to(super::customer::Customer, foreign_key = customer_id))]
pub struct Address {
    pub id: i32,
    pub customer_id: i32,
    pub street: String,
    pub city: String,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::addresses)]
pub struct NewAddress<'a> {
    pub customer_id: i32,
    pub street: &'a str,
    pub city: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::addresses)]
pub struct UpdateAddress<'a> {
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
}

impl From<Address> for DomainAddress {
    fn from(value: Address) -> Self {
        Self {
            id: value.id,
            customer_id: value.customer_id,
            street: value.street,
            city: value.city,
        }
    }
}

impl<'a> From<&'a DomainNewAddress> for NewAddress<'a> {
    fn from(value: &'a DomainNewAddress) -> Self {
        Self {
            customer_id: value.customer_id,
            street: value.street.as_str(),
            city: value.city.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateAddress> for UpdateAddress<'a> {
    fn from(value: &'a DomainUpdateAddress) -> Self {
        Self {
            street: value.street.as_deref(),
            city: value.city.as_deref(),
        }
    }
}
