use std::collections::HashMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::money::format_cents;
use crate::domain::order::{Order, OrderItem, OrderListQuery, PaymentStatus};
use crate::forms::empty_string_as_none;
use crate::forms::orders::{CreateOrderForm, UpdateOrderForm, parse_payment_status};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CustomerReader, OrderReader, OrderWriter};
use crate::services::notifications::OrderNotifier;
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the order listings.
#[derive(Debug, Default, Deserialize)]
pub struct OrdersQuery {
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub payment_status: Option<String>,
    pub page: Option<usize>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderProductView {
    pub id: i32,
    pub title: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderItemView {
    pub id: i32,
    pub product: OrderProductView,
    /// Price captured when the order was placed.
    pub unit_price: String,
    pub quantity: i32,
    pub total_price: String,
}

impl From<OrderItem> for OrderItemView {
    fn from(item: OrderItem) -> Self {
        Self {
            total_price: format_cents(item.total_cents()),
            id: item.id,
            product: OrderProductView {
                id: item.product_id,
                title: item.product_title,
            },
            unit_price: format_cents(item.unit_price_cents),
            quantity: item.quantity,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderView {
    pub id: i32,
    pub customer: i32,
    /// Filled in by the staff listing only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    pub placed_at: NaiveDateTime,
    pub payment_status: PaymentStatus,
    pub items: Vec<OrderItemView>,
    pub total_price: String,
}

impl From<Order> for OrderView {
    fn from(order: Order) -> Self {
        Self {
            total_price: format_cents(order.total_cents()),
            id: order.id,
            customer: order.customer_id,
            customer_name: None,
            placed_at: order.placed_at,
            payment_status: order.payment_status,
            items: order.items.into_iter().map(OrderItemView::from).collect(),
        }
    }
}

fn parse_status_filter(raw: Option<&str>) -> ServiceResult<Option<PaymentStatus>> {
    raw.map(|value| {
        parse_payment_status(value)
            .ok_or_else(|| ServiceError::Form(format!("unknown payment status `{value}`")))
    })
    .transpose()
}

/// Converts the cart into an order and notifies listeners once it is committed.
pub fn place_order<R>(
    repo: &R,
    notifier: &OrderNotifier,
    user_id: i32,
    form: CreateOrderForm,
) -> ServiceResult<OrderView>
where
    R: OrderWriter + ?Sized,
{
    let checkout = form
        .into_checkout(user_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let order = repo.place_order(&checkout).map_err(ServiceError::from)?;

    log::info!(
        "Cart {} checked out into order {} for user {user_id}",
        checkout.cart_id,
        order.id
    );

    notifier.notify_order_created(&order);

    Ok(OrderView::from(order))
}

/// Lists the caller's own orders, newest first.
pub fn load_orders<R>(
    repo: &R,
    user_id: i32,
    query: OrdersQuery,
) -> ServiceResult<Paginated<OrderView>>
where
    R: OrderReader + CustomerReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let status = parse_status_filter(query.payment_status.as_deref())?;

    let Some(customer) = repo
        .get_customer_by_user_id(user_id)
        .map_err(ServiceError::from)?
    else {
        return Ok(Paginated::new(Vec::new(), page, 0));
    };

    let mut list_query = OrderListQuery::new()
        .customer_id(customer.id)
        .paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = status {
        list_query = list_query.payment_status(status);
    }

    let (total, orders) = repo.list_orders(list_query).map_err(ServiceError::from)?;

    Ok(Paginated::new(
        orders.into_iter().map(OrderView::from).collect(),
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

/// Lists every order with the customer's full name, newest first.
pub fn load_all_orders<R>(repo: &R, query: OrdersQuery) -> ServiceResult<Paginated<OrderView>>
where
    R: OrderReader + CustomerReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let status = parse_status_filter(query.payment_status.as_deref())?;

    let mut list_query = OrderListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(status) = status {
        list_query = list_query.payment_status(status);
    }

    let (total, orders) = repo.list_orders(list_query).map_err(ServiceError::from)?;

    let mut customer_ids: Vec<i32> = orders.iter().map(|order| order.customer_id).collect();
    customer_ids.sort_unstable();
    customer_ids.dedup();

    let names: HashMap<i32, String> = repo
        .get_customers_by_ids(&customer_ids)
        .map_err(ServiceError::from)?
        .into_iter()
        .map(|customer| (customer.id, customer.full_name()))
        .collect();

    let views = orders
        .into_iter()
        .map(|order| {
            let mut view = OrderView::from(order);
            view.customer_name = names.get(&view.customer).cloned();
            view
        })
        .collect();

    Ok(Paginated::new(
        views,
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

pub fn load_order<R>(repo: &R, order_id: i32) -> ServiceResult<OrderView>
where
    R: OrderReader + ?Sized,
{
    repo.get_order_by_id(order_id)
        .map_err(ServiceError::from)?
        .map(OrderView::from)
        .ok_or(ServiceError::NotFound)
}

pub fn modify_payment_status<R>(
    repo: &R,
    order_id: i32,
    form: UpdateOrderForm,
) -> ServiceResult<OrderView>
where
    R: OrderWriter + ?Sized,
{
    let updates = form
        .into_update_order()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_order(order_id, &updates)
        .map(OrderView::from)
        .map_err(ServiceError::from)
}

/// Deletes an order together with its items.
pub fn remove_order<R>(repo: &R, order_id: i32) -> ServiceResult<()>
where
    R: OrderWriter + ?Sized,
{
    repo.delete_order(order_id).map_err(ServiceError::from)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;

    use crate::domain::customer::{Customer, Membership};
    use crate::repository::RepositoryError;
    use crate::repository::mock::MockStore;
    use crate::services::notifications::testing::RecordingListener;

    const CART_ID: &str = "6f9619ff-8b86-d011-b42d-00cf4fc964ff";

    fn fixed_datetime() -> NaiveDateTime {
        match NaiveDate::from_ymd_opt(2024, 1, 1) {
            Some(date) => date.and_hms_opt(0, 0, 0).unwrap_or_default(),
            None => NaiveDateTime::default(),
        }
    }

    fn sample_order(id: i32, customer_id: i32) -> Order {
        Order {
            id,
            customer_id,
            placed_at: fixed_datetime(),
            payment_status: PaymentStatus::Pending,
            items: vec![
                OrderItem {
                    id: 1,
                    product_id: 10,
                    product_title: "A".to_string(),
                    unit_price_cents: 1000,
                    quantity: 2,
                },
                OrderItem {
                    id: 2,
                    product_id: 11,
                    product_title: "B".to_string(),
                    unit_price_cents: 500,
                    quantity: 1,
                },
            ],
        }
    }

    fn sample_customer(id: i32, user_id: i32) -> Customer {
        Customer {
            id,
            user_id,
            first_name: "Grace".to_string(),
            last_name: "Hopper".to_string(),
            phone: "555".to_string(),
            birth_date: None,
            membership: Membership::Gold,
            orders_count: 1,
        }
    }

    fn create_form() -> CreateOrderForm {
        CreateOrderForm {
            cart_id: CART_ID.to_string(),
        }
    }

    #[test]
    fn place_order_notifies_listeners_once() {
        let mut repo = MockStore::new();
        repo.expect_place_order()
            .times(1)
            .withf(|checkout| checkout.cart_id == CART_ID && checkout.user_id == 4)
            .returning(|_| Ok(sample_order(30, 2)));

        let recorder = Arc::new(RecordingListener::default());
        let notifier = OrderNotifier::new().with_listener(recorder.clone());

        let view = place_order(&repo, &notifier, 4, create_form()).expect("expected order");

        assert_eq!(view.id, 30);
        assert_eq!(view.items.len(), 2);
        assert_eq!(view.total_price, "25.00");
        assert_eq!(recorder.seen(), vec![30]);
    }

    #[test]
    fn place_order_failure_skips_listeners() {
        let mut repo = MockStore::new();
        repo.expect_place_order()
            .times(1)
            .returning(|_| Err(RepositoryError::Validation("The cart is empty.".to_string())));

        let recorder = Arc::new(RecordingListener::default());
        let notifier = OrderNotifier::new().with_listener(recorder.clone());

        let result = place_order(&repo, &notifier, 4, create_form());

        assert!(matches!(
            result,
            Err(ServiceError::Validation(message)) if message == "The cart is empty."
        ));
        assert!(recorder.seen().is_empty());
    }

    #[test]
    fn place_order_rejects_malformed_cart_id() {
        let mut repo = MockStore::new();
        repo.expect_place_order().times(0);

        let form = CreateOrderForm {
            cart_id: "not-a-uuid".to_string(),
        };

        let result = place_order(&repo, &OrderNotifier::new(), 4, form);

        assert!(matches!(result, Err(ServiceError::Form(_))));
    }

    #[test]
    fn load_orders_scopes_to_callers_customer() {
        let mut repo = MockStore::new();
        repo.expect_get_customer_by_user_id()
            .times(1)
            .withf(|user_id| *user_id == 4)
            .returning(|user_id| Ok(Some(sample_customer(2, user_id))));
        repo.expect_list_orders()
            .times(1)
            .withf(|query| {
                query.customer_id == Some(2)
                    && query.payment_status == Some(PaymentStatus::Complete)
                    && query.pagination.is_some_and(|p| p.page == 1)
            })
            .returning(|_| Ok((1, vec![sample_order(30, 2)])));

        let query = OrdersQuery {
            payment_status: Some("complete".to_string()),
            page: None,
        };

        let page = load_orders(&repo, 4, query).expect("expected orders");

        assert_eq!(page.items.len(), 1);
        assert_eq!(page.total_pages, 1);
        assert!(page.items[0].customer_name.is_none());
    }

    #[test]
    fn load_orders_without_profile_is_empty() {
        let mut repo = MockStore::new();
        repo.expect_get_customer_by_user_id().returning(|_| Ok(None));
        repo.expect_list_orders().times(0);

        let page = load_orders(&repo, 4, OrdersQuery::default()).expect("expected page");

        assert!(page.items.is_empty());
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn load_all_orders_attaches_customer_names() {
        let mut repo = MockStore::new();
        repo.expect_list_orders()
            .times(1)
            .withf(|query| query.customer_id.is_none())
            .returning(|_| Ok((2, vec![sample_order(31, 2), sample_order(30, 2)])));
        repo.expect_get_customers_by_ids()
            .times(1)
            .withf(|ids| ids == [2].as_slice())
            .returning(|_| Ok(vec![sample_customer(2, 4)]));

        let page = load_all_orders(&repo, OrdersQuery::default()).expect("expected orders");

        assert_eq!(page.items.len(), 2);
        assert_eq!(page.items[0].customer_name.as_deref(), Some("Grace Hopper"));
    }

    #[test]
    fn modify_payment_status_rejects_unknown_status() {
        let mut repo = MockStore::new();
        repo.expect_update_order().times(0);

        let form = UpdateOrderForm {
            payment_status: "shipped".to_string(),
        };

        assert!(matches!(
            modify_payment_status(&repo, 1, form),
            Err(ServiceError::Form(_))
        ));
    }
}
