use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::{Sqlite, SqliteConnection};

use crate::{
    domain::order::{
        Checkout, Order as DomainOrder, OrderListQuery, PaymentStatus, UpdateOrder as DomainUpdateOrder,
    },
    models::order::{
        NewOrder as DbNewOrder, NewOrderItem as DbNewOrderItem, Order as DbOrder,
        OrderItem as DbOrderItem, UpdateOrder as DbUpdateOrder,
    },
    repository::{DieselRepository, OrderReader, OrderWriter, RepositoryError, RepositoryResult},
    schema::{cart_items, carts, customers, order_items, orders, products},
};

/// Load order lines with product titles, grouped by order id.
fn load_order_items(
    conn: &mut SqliteConnection,
    order_ids: &[i32],
) -> RepositoryResult<HashMap<i32, Vec<(DbOrderItem, String)>>> {
    let mut items_by_order: HashMap<i32, Vec<(DbOrderItem, String)>> = HashMap::new();

    if order_ids.is_empty() {
        return Ok(items_by_order);
    }

    let rows = order_items::table
        .inner_join(products::table)
        .filter(order_items::order_id.eq_any(order_ids))
        .order(order_items::id.asc())
        .select((DbOrderItem::as_select(), products::title))
        .load::<(DbOrderItem, String)>(conn)?;

    for (item, title) in rows {
        items_by_order
            .entry(item.order_id)
            .or_default()
            .push((item, title));
    }

    Ok(items_by_order)
}

fn load_order(conn: &mut SqliteConnection, order_id: i32) -> RepositoryResult<Option<DomainOrder>> {
    let order = orders::table
        .filter(orders::id.eq(order_id))
        .first::<DbOrder>(conn)
        .optional()?;

    let Some(order) = order else {
        return Ok(None);
    };

    let mut items = load_order_items(conn, &[order.id])?;
    let lines = items.remove(&order.id).unwrap_or_default();

    Ok(Some(order.into_domain(lines)))
}

fn filtered_orders(query: &OrderListQuery) -> orders::BoxedQuery<'_, Sqlite> {
    let mut items = orders::table.into_boxed::<Sqlite>();

    if let Some(customer_id) = query.customer_id {
        items = items.filter(orders::customer_id.eq(customer_id));
    }

    if let Some(status) = query.payment_status {
        items = items.filter(orders::payment_status.eq(status.as_str()));
    }

    items
}

impl OrderReader for DieselRepository {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<DomainOrder>> {
        let mut conn = self.conn()?;
        load_order(&mut conn, id)
    }

    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<DomainOrder>)> {
        let mut conn = self.conn()?;

        let total = filtered_orders(&query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items =
            filtered_orders(&query).order((orders::placed_at.desc(), orders::id.desc()));

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let db_orders = items.load::<DbOrder>(&mut conn)?;
        if db_orders.is_empty() {
            return Ok((total, Vec::new()));
        }

        let order_ids: Vec<i32> = db_orders.iter().map(|order| order.id).collect();
        let mut items_by_order = load_order_items(&mut conn, &order_ids)?;

        let domain_orders = db_orders
            .into_iter()
            .map(|order| {
                let lines = items_by_order.remove(&order.id).unwrap_or_default();
                order.into_domain(lines)
            })
            .collect();

        Ok((total, domain_orders))
    }
}

impl OrderWriter for DieselRepository {
    fn place_order(&self, checkout: &Checkout) -> RepositoryResult<DomainOrder> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let cart_found = diesel::select(diesel::dsl::exists(
                carts::table.filter(carts::id.eq(&checkout.cart_id)),
            ))
            .get_result::<bool>(conn)?;

            if !cart_found {
                return Err(RepositoryError::Validation(
                    "No cart with the given ID was found.".to_string(),
                ));
            }

            let lines = cart_items::table
                .inner_join(products::table)
                .filter(cart_items::cart_id.eq(&checkout.cart_id))
                .order(cart_items::id.asc())
                .select((
                    cart_items::product_id,
                    cart_items::quantity,
                    products::unit_price_cents,
                ))
                .load::<(i32, i32, i64)>(conn)?;

            if lines.is_empty() {
                return Err(RepositoryError::Validation("The cart is empty.".to_string()));
            }

            let customer_id = customers::table
                .filter(customers::user_id.eq(checkout.user_id))
                .select(customers::id)
                .first::<i32>(conn)
                .optional()?
                .ok_or_else(|| {
                    RepositoryError::Validation(
                        "No customer profile exists for the current user.".to_string(),
                    )
                })?;

            let new_order = DbNewOrder {
                customer_id,
                placed_at: checkout.placed_at,
                payment_status: PaymentStatus::Pending.as_str(),
            };

            let order = diesel::insert_into(orders::table)
                .values(&new_order)
                .get_result::<DbOrder>(conn)?;

            let new_items: Vec<DbNewOrderItem> = lines
                .into_iter()
                .map(|(product_id, quantity, unit_price_cents)| DbNewOrderItem {
                    order_id: order.id,
                    product_id,
                    quantity,
                    unit_price_cents,
                })
                .collect();

            diesel::insert_into(order_items::table)
                .values(&new_items)
                .execute(conn)?;

            diesel::delete(cart_items::table.filter(cart_items::cart_id.eq(&checkout.cart_id)))
                .execute(conn)?;
            diesel::delete(carts::table.filter(carts::id.eq(&checkout.cart_id))).execute(conn)?;

            load_order(conn, order.id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn update_order(
        &self,
        order_id: i32,
        updates: &DomainUpdateOrder,
    ) -> RepositoryResult<DomainOrder> {
        let mut conn = self.conn()?;
        let db_updates = DbUpdateOrder::from(updates);

        conn.immediate_transaction::<DomainOrder, RepositoryError, _>(|conn| {
            let updated = diesel::update(orders::table.filter(orders::id.eq(order_id)))
                .set(&db_updates)
                .execute(conn)?;

            if updated == 0 {
                return Err(RepositoryError::NotFound);
            }

            load_order(conn, order_id)?.ok_or(RepositoryError::NotFound)
        })
    }

    fn delete_order(&self, order_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted =
            diesel::delete(orders::table.filter(orders::id.eq(order_id))).execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
