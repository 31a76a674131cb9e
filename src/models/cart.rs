use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::cart::{
    Cart as DomainCart, CartItem as DomainCartItem, CartProduct as DomainCartProduct,
    NewCart as DomainNewCart, NewCartItem as DomainNewCartItem,
};
use crate::models::product::Product;

#[derive(Debug, Clone, Identifiable, Queryable, Selectable)]
#[diesel(table_name = crate::schema::carts)]
pub struct Cart {
    pub id: String,
    pub created_at: NaiveDateTime,
}

#[derive(Debug, Clone, Identifiable, Queryable, Selectable, Associations)]
#[diesel(table_name = crate::schema::cart_items)]
#[diesel(belongs_to(Cart, foreign_key = cart_id))]
pub struct CartItem {
    pub id: i32,
    pub cart_id: String,
    pub product_id: i32,
    pub quantity: i32,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::carts)]
pub struct NewCart<'a> {
    pub id: &'a str,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::cart_items)]
pub struct NewCartItem<'a> {
    pub cart_id: &'a str,
    pub product_id: i32,
    pub quantity: i32,
}

impl Cart {
    pub fn into_domain(self, items: Vec<(CartItem, Product)>) -> DomainCart {
        DomainCart {
            id: self.id,
            created_at: self.created_at,
            items: items.into_iter().map(DomainCartItem::from).collect(),
        }
    }
}

impl From<(CartItem, Product)> for DomainCartItem {
    fn from((item, product): (CartItem, Product)) -> Self {
        Self {
            id: item.id,
            cart_id: item.cart_id,
            product: DomainCartProduct {
                id: product.id,
                title: product.title,
                unit_price_cents: product.unit_price_cents,
            },
            quantity: item.quantity,
        }
    }
}

impl<'a> From<&'a DomainNewCart> for NewCart<'a> {
    fn from(value: &'a DomainNewCart) -> Self {
        Self {
            id: value.id.as_str(),
        }
    }
}

impl<'a> From<&'a DomainNewCartItem> for NewCartItem<'a> {
    fn from(value: &'a DomainNewCartItem) -> Self {
        Self {
            cart_id: value.cart_id.as_str(),
            product_id: value.product_id,
            quantity: value.quantity,
        }
    }
}
