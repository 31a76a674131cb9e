use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::customer::{
    Customer as DomainCustomer, NewCustomer as DomainNewCustomer,
    UpdateCustomer as DomainUpdateCustomer,
};
use crate::models::user::User;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::customers)]
#[diesel(belongs_to(User, foreign_key = user_id))]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::customers)]
pub struct NewCustomer<'a> {
    pub user_id: i32,
    pub phone: &'a str,
    pub birth_date: Option<NaiveDate>,
    pub membership: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::customers)]
pub struct UpdateCustomer<'a> {
    pub phone: Option<&'a str>,
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<&'a str>,
    pub updated_at: NaiveDateTime,
}

impl Customer {
    pub fn into_domain(self, user: &User, orders_count: i64) -> DomainCustomer {
        DomainCustomer {
            id: self.id,
            user_id: self.user_id,
            first_name: user.first_name.clone(),
            last_name: user.last_name.clone(),
            phone: self.phone,
            birth_date: self.birth_date,
            membership: self.membership.as_str().into(),
            orders_count,
        }
    }
}

impl<'a> From<&'a DomainNewCustomer> for NewCustomer<'a> {
    fn from(value: &'a DomainNewCustomer) -> Self {
        Self {
            user_id: value.user_id,
            phone: value.phone.as_str(),
            birth_date: value.birth_date,
            membership: value.membership.as_str(),
        }
    }
}

impl<'a> UpdateCustomer<'a> {
    pub fn from_domain(value: &'a DomainUpdateCustomer, updated_at: NaiveDateTime) -> Self {
        Self {
            phone: value.phone.as_deref(),
            birth_date: value.birth_date,
            membership: value.membership.as_ref().map(|membership| membership.as_str()),
            updated_at,
        }
    }
}
