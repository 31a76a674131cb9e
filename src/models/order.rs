use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::order::{
    Order as DomainOrder, OrderItem as DomainOrderItem, UpdateOrder as DomainUpdateOrder,
};

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::orders)]
pub struct Order {
    pub id: i32,
    pub customer_id: i32,
    pub placed_at: NaiveDateTime,
    pub payment_status: String,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::order_items)]
#[diesel(belongs_to(Order, foreign_key = order_id))]
pub struct OrderItem {
    pub id: i32,
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::orders)]
pub struct NewOrder<'a> {
    pub customer_id: i32,
    pub placed_at: NaiveDateTime,
    pub payment_status: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::order_items)]
pub struct NewOrderItem {
    pub order_id: i32,
    pub product_id: i32,
    pub quantity: i32,
    pub unit_price_cents: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::orders)]
pub struct UpdateOrder<'a> {
    pub payment_status: &'a str,
}

impl Order {
    /// `items` pairs each order line with the title of its product.
    pub fn into_domain(self, items: Vec<(OrderItem, String)>) -> DomainOrder {
        DomainOrder {
            id: self.id,
            customer_id: self.customer_id,
            placed_at: self.placed_at,
            payment_status: self.payment_status.as_str().into(),
            items: items.into_iter().map(DomainOrderItem::from).collect(),
        }
    }
}

impl From<(OrderItem, String)> for DomainOrderItem {
    fn from((item, product_title): (OrderItem, String)) -> Self {
        Self {
            id: item.id,
            product_id: item.product_id,
            product_title,
            unit_price_cents: item.unit_price_cents,
            quantity: item.quantity,
        }
    }
}

impl<'a> From<&'a DomainUpdateOrder> for UpdateOrder<'a> {
    fn from(value: &'a DomainUpdateOrder) -> Self {
        Self {
            payment_status: value.payment_status.into(),
        }
    }
}
