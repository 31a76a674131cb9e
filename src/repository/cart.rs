use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::cart::{
        Cart as DomainCart, CartItem as DomainCartItem, MAX_CART_ITEM_QUANTITY,
        NewCart as DomainNewCart, NewCartItem as DomainNewCartItem,
    },
    models::{
        cart::{
            Cart as DbCart, CartItem as DbCartItem, NewCart as DbNewCart,
            NewCartItem as DbNewCartItem,
        },
        product::Product as DbProduct,
    },
    repository::{CartReader, CartWriter, DieselRepository, RepositoryError, RepositoryResult},
    schema::{cart_items, carts, products},
};

fn load_cart_lines(
    conn: &mut SqliteConnection,
    cart_id: &str,
) -> RepositoryResult<Vec<(DbCartItem, DbProduct)>> {
    Ok(cart_items::table
        .inner_join(products::table)
        .filter(cart_items::cart_id.eq(cart_id))
        .order(cart_items::id.asc())
        .select((DbCartItem::as_select(), DbProduct::as_select()))
        .load::<(DbCartItem, DbProduct)>(conn)?)
}

fn load_cart_line(
    conn: &mut SqliteConnection,
    cart_id: &str,
    item_id: i32,
) -> RepositoryResult<Option<(DbCartItem, DbProduct)>> {
    Ok(cart_items::table
        .inner_join(products::table)
        .filter(cart_items::cart_id.eq(cart_id))
        .filter(cart_items::id.eq(item_id))
        .select((DbCartItem::as_select(), DbProduct::as_select()))
        .first::<(DbCartItem, DbProduct)>(conn)
        .optional()?)
}

impl CartReader for DieselRepository {
    fn cart_exists(&self, cart_id: &str) -> RepositoryResult<bool> {
        let mut conn = self.conn()?;

        let exists = diesel::select(diesel::dsl::exists(
            carts::table.filter(carts::id.eq(cart_id)),
        ))
        .get_result::<bool>(&mut conn)?;

        Ok(exists)
    }

    fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<DomainCart>> {
        let mut conn = self.conn()?;

        let cart = carts::table
            .filter(carts::id.eq(cart_id))
            .first::<DbCart>(&mut conn)
            .optional()?;

        let Some(cart) = cart else {
            return Ok(None);
        };

        let lines = load_cart_lines(&mut conn, &cart.id)?;
        Ok(Some(cart.into_domain(lines)))
    }

    fn get_cart_item(
        &self,
        cart_id: &str,
        item_id: i32,
    ) -> RepositoryResult<Option<DomainCartItem>> {
        let mut conn = self.conn()?;
        Ok(load_cart_line(&mut conn, cart_id, item_id)?.map(Into::into))
    }
}

impl CartWriter for DieselRepository {
    fn create_cart(&self, new_cart: &DomainNewCart) -> RepositoryResult<DomainCart> {
        let mut conn = self.conn()?;
        let db_new = DbNewCart::from(new_cart);

        let created = diesel::insert_into(carts::table)
            .values(&db_new)
            .get_result::<DbCart>(&mut conn)?;

        Ok(created.into_domain(Vec::new()))
    }

    fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(carts::table.filter(carts::id.eq(cart_id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }

    fn add_cart_item(&self, new_item: &DomainNewCartItem) -> RepositoryResult<DomainCartItem> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainCartItem, RepositoryError, _>(|conn| {
            let cart_found = diesel::select(diesel::dsl::exists(
                carts::table.filter(carts::id.eq(&new_item.cart_id)),
            ))
            .get_result::<bool>(conn)?;

            if !cart_found {
                return Err(RepositoryError::NotFound);
            }

            let product_found = diesel::select(diesel::dsl::exists(
                products::table.filter(products::id.eq(new_item.product_id)),
            ))
            .get_result::<bool>(conn)?;

            if !product_found {
                return Err(RepositoryError::Validation(
                    "No product with the given ID was found.".to_string(),
                ));
            }

            let existing = cart_items::table
                .filter(cart_items::cart_id.eq(&new_item.cart_id))
                .filter(cart_items::product_id.eq(new_item.product_id))
                .first::<DbCartItem>(conn)
                .optional()?;

            let item_id = match existing {
                Some(item) => {
                    let quantity = item.quantity + new_item.quantity;
                    if quantity > MAX_CART_ITEM_QUANTITY {
                        return Err(RepositoryError::Validation(format!(
                            "Quantity may not exceed {MAX_CART_ITEM_QUANTITY}."
                        )));
                    }

                    diesel::update(cart_items::table.filter(cart_items::id.eq(item.id)))
                        .set(cart_items::quantity.eq(quantity))
                        .execute(conn)?;
                    item.id
                }
                None => {
                    let db_new = DbNewCartItem::from(new_item);
                    diesel::insert_into(cart_items::table)
                        .values(&db_new)
                        .get_result::<DbCartItem>(conn)?
                        .id
                }
            };

            load_cart_line(conn, &new_item.cart_id, item_id)?
                .map(Into::into)
                .ok_or(RepositoryError::NotFound)
        })
    }

    fn update_cart_item_quantity(
        &self,
        cart_id: &str,
        item_id: i32,
        quantity: i32,
    ) -> RepositoryResult<DomainCartItem> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainCartItem, RepositoryError, _>(|conn| {
            let updated = diesel::update(
                cart_items::table
                    .filter(cart_items::id.eq(item_id))
                    .filter(cart_items::cart_id.eq(cart_id)),
            )
            .set(cart_items::quantity.eq(quantity))
            .execute(conn)?;

            if updated == 0 {
                return Err(RepositoryError::NotFound);
            }

            load_cart_line(conn, cart_id, item_id)?
                .map(Into::into)
                .ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            cart_items::table
                .filter(cart_items::id.eq(item_id))
                .filter(cart_items::cart_id.eq(cart_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
