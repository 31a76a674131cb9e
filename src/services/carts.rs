use serde::Serialize;

use crate::domain::cart::{Cart, CartItem, NewCart};
use crate::domain::money::format_cents;
use crate::forms::carts::{AddCartItemForm, UpdateCartItemForm, normalize_cart_id};
use crate::repository::{CartReader, CartWriter};
use crate::services::{ServiceError, ServiceResult};

/// Minimal product representation embedded in cart and order lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SimpleProductView {
    pub id: i32,
    pub title: String,
    pub unit_price: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartItemView {
    pub id: i32,
    pub product: SimpleProductView,
    pub quantity: i32,
    pub total_price: String,
}

impl From<CartItem> for CartItemView {
    fn from(item: CartItem) -> Self {
        Self {
            total_price: format_cents(item.total_price_cents()),
            id: item.id,
            product: SimpleProductView {
                id: item.product.id,
                title: item.product.title,
                unit_price: format_cents(item.product.unit_price_cents),
            },
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CartView {
    pub id: String,
    pub items: Vec<CartItemView>,
    pub total_price: String,
}

impl From<Cart> for CartView {
    fn from(cart: Cart) -> Self {
        Self {
            total_price: format_cents(cart.total_price_cents()),
            id: cart.id,
            items: cart.items.into_iter().map(CartItemView::from).collect(),
        }
    }
}

/// Carts are keyed by their lowercase hyphenated UUID. Any other spelling of
/// the same UUID addresses the same cart; a non-UUID can never match one.
fn cart_key(cart_id: &str) -> ServiceResult<String> {
    normalize_cart_id(cart_id).ok_or(ServiceError::NotFound)
}

/// Creates an empty cart with a freshly generated id.
pub fn create_cart<R>(repo: &R) -> ServiceResult<CartView>
where
    R: CartWriter + ?Sized,
{
    repo.create_cart(&NewCart::new())
        .map(CartView::from)
        .map_err(ServiceError::from)
}

pub fn load_cart<R>(repo: &R, cart_id: &str) -> ServiceResult<CartView>
where
    R: CartReader + ?Sized,
{
    repo.get_cart(&cart_key(cart_id)?)
        .map_err(ServiceError::from)?
        .map(CartView::from)
        .ok_or(ServiceError::NotFound)
}

pub fn remove_cart<R>(repo: &R, cart_id: &str) -> ServiceResult<()>
where
    R: CartWriter + ?Sized,
{
    repo.delete_cart(&cart_key(cart_id)?)
        .map_err(ServiceError::from)
}

/// Adds a product to the cart, summing quantities when the product is already
/// present.
pub fn add_cart_item<R>(repo: &R, cart_id: &str, form: AddCartItemForm) -> ServiceResult<CartItemView>
where
    R: CartWriter + ?Sized,
{
    let cart_id = cart_key(cart_id)?;
    let new_item = form
        .into_new_cart_item(&cart_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.add_cart_item(&new_item)
        .map(CartItemView::from)
        .map_err(ServiceError::from)
}

pub fn list_cart_items<R>(repo: &R, cart_id: &str) -> ServiceResult<Vec<CartItemView>>
where
    R: CartReader + ?Sized,
{
    let cart = repo
        .get_cart(&cart_key(cart_id)?)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)?;

    Ok(cart.items.into_iter().map(CartItemView::from).collect())
}

pub fn load_cart_item<R>(repo: &R, cart_id: &str, item_id: i32) -> ServiceResult<CartItemView>
where
    R: CartReader + ?Sized,
{
    repo.get_cart_item(&cart_key(cart_id)?, item_id)
        .map_err(ServiceError::from)?
        .map(CartItemView::from)
        .ok_or(ServiceError::NotFound)
}

/// Replaces the quantity of a cart line.
pub fn modify_cart_item<R>(
    repo: &R,
    cart_id: &str,
    item_id: i32,
    form: UpdateCartItemForm,
) -> ServiceResult<CartItemView>
where
    R: CartWriter + ?Sized,
{
    let cart_id = cart_key(cart_id)?;
    let quantity = form
        .into_quantity()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_cart_item_quantity(&cart_id, item_id, quantity)
        .map(CartItemView::from)
        .map_err(ServiceError::from)
}

pub fn remove_cart_item<R>(repo: &R, cart_id: &str, item_id: i32) -> ServiceResult<()>
where
    R: CartWriter + ?Sized,
{
    repo.delete_cart_item(&cart_key(cart_id)?, item_id)
        .map_err(ServiceError::from)
}
