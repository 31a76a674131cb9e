use std::sync::{Arc, Mutex};

use pushkind_store::domain::cart::{NewCart, NewCartItem};
use pushkind_store::domain::order::{
    Checkout, Order, OrderListQuery, PaymentStatus, UpdateOrder,
};
use pushkind_store::domain::product::UpdateProduct;
use pushkind_store::forms::orders::CreateOrderForm;
use pushkind_store::repository::{
    CartReader, CartWriter, OrderReader, OrderWriter, ProductWriter, RepositoryError,
};
use pushkind_store::services::ServiceError;
use pushkind_store::services::notifications::{
    ListenerError, OrderCreatedListener, OrderNotifier,
};
use pushkind_store::services::orders::place_order;

mod common;

#[derive(Default)]
struct CountingListener {
    orders: Mutex<Vec<i32>>,
}

impl OrderCreatedListener for CountingListener {
    fn name(&self) -> &str {
        "counting"
    }

    fn on_order_created(&self, order: &Order) -> Result<(), ListenerError> {
        self.orders.lock().unwrap().push(order.id);
        Ok(())
    }
}

struct FailingListener;

impl OrderCreatedListener for FailingListener {
    fn name(&self) -> &str {
        "failing"
    }

    fn on_order_created(&self, _order: &Order) -> Result<(), ListenerError> {
        Err(ListenerError("mail server unreachable".to_string()))
    }
}

#[test]
fn test_checkout_of_missing_cart_is_rejected() {
    let test_db = common::TestDb::new("test_checkout_of_missing_cart_is_rejected.db");
    let repo = test_db.repo();
    let (user, _) = common::seed_customer(&repo, "ghost");

    let err = repo
        .place_order(&Checkout::new(
            "6f1d8c2e-0000-4000-8000-000000000000",
            user.id,
        ))
        .expect_err("expected missing cart to fail");

    assert!(matches!(err, RepositoryError::Validation(_)));
}

#[test]
fn test_checkout_of_empty_cart_is_rejected() {
    let test_db = common::TestDb::new("test_checkout_of_empty_cart_is_rejected.db");
    let repo = test_db.repo();
    let (user, customer) = common::seed_customer(&repo, "empty");
    let cart = repo.create_cart(&NewCart::new()).unwrap();

    let err = repo
        .place_order(&Checkout::new(cart.id.clone(), user.id))
        .expect_err("expected empty cart to fail");

    assert!(matches!(err, RepositoryError::Validation(_)));
    assert!(repo.cart_exists(&cart.id).unwrap());
    let (total, _) = repo
        .list_orders(OrderListQuery::new().customer_id(customer.id))
        .unwrap();
    assert_eq!(total, 0);
}

#[test]
fn test_checkout_without_customer_profile_keeps_cart() {
    let test_db = common::TestDb::new("test_checkout_without_customer_profile_keeps_cart.db");
    let repo = test_db.repo();
    let user = common::seed_user(&repo, "anonymous");
    let collection = common::seed_collection(&repo, "Tools");
    let hammer = common::seed_product(&repo, collection.id, "Hammer", 2500);
    let cart = repo.create_cart(&NewCart::new()).unwrap();
    repo.add_cart_item(&NewCartItem::new(cart.id.clone(), hammer.id, 1))
        .unwrap();

    let err = repo
        .place_order(&Checkout::new(cart.id.clone(), user.id))
        .expect_err("expected missing profile to fail");

    assert!(matches!(err, RepositoryError::Validation(_)));
    assert_eq!(repo.get_cart(&cart.id).unwrap().unwrap().items.len(), 1);
}

#[test]
fn test_checkout_snapshots_prices_and_deletes_cart() {
    let test_db = common::TestDb::new("test_checkout_snapshots_prices_and_deletes_cart.db");
    let repo = test_db.repo();
    let (user, customer) = common::seed_customer(&repo, "shopper");
    let collection = common::seed_collection(&repo, "Kitchen");
    let mug = common::seed_product(&repo, collection.id, "Mug", 1000);
    let spoon = common::seed_product(&repo, collection.id, "Spoon", 500);

    let cart = repo.create_cart(&NewCart::new()).unwrap();
    repo.add_cart_item(&NewCartItem::new(cart.id.clone(), mug.id, 2))
        .unwrap();
    repo.add_cart_item(&NewCartItem::new(cart.id.clone(), spoon.id, 1))
        .unwrap();

    let order = repo
        .place_order(&Checkout::new(cart.id.clone(), user.id))
        .unwrap();

    assert_eq!(order.customer_id, customer.id);
    assert_eq!(order.payment_status, PaymentStatus::Pending);
    assert_eq!(order.items.len(), 2);

    let mug_line = order
        .items
        .iter()
        .find(|item| item.product_id == mug.id)
        .unwrap();
    assert_eq!(mug_line.quantity, 2);
    assert_eq!(mug_line.unit_price_cents, 1000);
    let spoon_line = order
        .items
        .iter()
        .find(|item| item.product_id == spoon.id)
        .unwrap();
    assert_eq!(spoon_line.quantity, 1);
    assert_eq!(spoon_line.unit_price_cents, 500);
    assert_eq!(order.total_cents(), 2500);

    assert!(!repo.cart_exists(&cart.id).unwrap());

    repo.update_product(mug.id, &UpdateProduct::new().unit_price_cents(1500))
        .unwrap();

    let reloaded = repo.get_order_by_id(order.id).unwrap().unwrap();
    let mug_line = reloaded
        .items
        .iter()
        .find(|item| item.product_id == mug.id)
        .unwrap();
    assert_eq!(mug_line.unit_price_cents, 1000);
    assert_eq!(reloaded.total_cents(), 2500);

    let err = repo
        .delete_product(mug.id)
        .expect_err("expected ordered product delete to fail");
    assert!(matches!(err, RepositoryError::InUse(_)));
}

#[test]
fn test_payment_status_update_and_listing() {
    let test_db = common::TestDb::new("test_payment_status_update_and_listing.db");
    let repo = test_db.repo();
    let (user, customer) = common::seed_customer(&repo, "payer");
    let collection = common::seed_collection(&repo, "Garden");
    let shovel = common::seed_product(&repo, collection.id, "Shovel", 3000);

    let cart = repo.create_cart(&NewCart::new()).unwrap();
    repo.add_cart_item(&NewCartItem::new(cart.id.clone(), shovel.id, 1))
        .unwrap();
    let order = repo
        .place_order(&Checkout::new(cart.id.clone(), user.id))
        .unwrap();

    let updated = repo
        .update_order(
            order.id,
            &UpdateOrder {
                payment_status: PaymentStatus::Complete,
            },
        )
        .unwrap();
    assert_eq!(updated.payment_status, PaymentStatus::Complete);
    assert_eq!(updated.items.len(), 1);

    let (pending, _) = repo
        .list_orders(
            OrderListQuery::new()
                .customer_id(customer.id)
                .payment_status(PaymentStatus::Pending),
        )
        .unwrap();
    assert_eq!(pending, 0);

    repo.delete_order(order.id).unwrap();
    assert!(repo.get_order_by_id(order.id).unwrap().is_none());

    repo.delete_product(shovel.id).unwrap();
}

#[test]
fn test_listeners_run_once_per_successful_checkout() {
    let test_db = common::TestDb::new("test_listeners_run_once_per_successful_checkout.db");
    let repo = test_db.repo();
    let (user, _) = common::seed_customer(&repo, "notified");
    let collection = common::seed_collection(&repo, "Music");
    let vinyl = common::seed_product(&repo, collection.id, "Vinyl", 2200);

    let counting = Arc::new(CountingListener::default());
    let notifier = OrderNotifier::new()
        .with_listener(Arc::new(FailingListener))
        .with_listener(counting.clone());

    let empty_cart = repo.create_cart(&NewCart::new()).unwrap();
    let err = place_order(
        &repo,
        &notifier,
        user.id,
        CreateOrderForm {
            cart_id: empty_cart.id.clone(),
        },
    )
    .expect_err("expected empty cart to fail");
    assert!(matches!(err, ServiceError::Validation(_)));
    assert!(counting.orders.lock().unwrap().is_empty());

    let cart = repo.create_cart(&NewCart::new()).unwrap();
    repo.add_cart_item(&NewCartItem::new(cart.id.clone(), vinyl.id, 1))
        .unwrap();

    let order = place_order(
        &repo,
        &notifier,
        user.id,
        CreateOrderForm {
            cart_id: cart.id.to_uppercase(),
        },
    )
    .expect("failing listener must not fail checkout");

    assert_eq!(*counting.orders.lock().unwrap(), vec![order.id]);
    assert!(!repo.cart_exists(&cart.id).unwrap());
}

#[test]
fn test_concurrent_checkouts_place_one_order_per_cart() {
    let test_db = common::TestDb::new("test_concurrent_checkouts_place_one_order_per_cart.db");
    let repo = test_db.repo();
    let (user, customer) = common::seed_customer(&repo, "rush");
    let collection = common::seed_collection(&repo, "Pantry");
    let rice = common::seed_product(&repo, collection.id, "Rice", 300);

    let mut cart_ids = Vec::new();
    for _ in 0..10 {
        let cart = repo.create_cart(&NewCart::new()).unwrap();
        repo.add_cart_item(&NewCartItem::new(cart.id.clone(), rice.id, 1))
            .unwrap();
        cart_ids.push(cart.id);
    }

    for cart_id in &cart_ids {
        let results: Vec<_> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..6)
                .map(|_| {
                    let repo = repo.clone();
                    let checkout = Checkout::new(cart_id.clone(), user.id);
                    scope.spawn(move || repo.place_order(&checkout))
                })
                .collect();
            handles
                .into_iter()
                .map(|handle| handle.join().unwrap())
                .collect()
        });

        let placed = results.iter().filter(|result| result.is_ok()).count();
        assert_eq!(placed, 1, "cart {cart_id} should be checked out once");
        for result in &results {
            if let Err(err) = result {
                assert!(
                    matches!(err, RepositoryError::Validation(_)),
                    "unexpected checkout error: {err}"
                );
            }
        }
    }

    let (total, _) = repo
        .list_orders(OrderListQuery::new().customer_id(customer.id))
        .unwrap();
    assert_eq!(total, cart_ids.len());
}

#[test]
fn test_concurrent_cart_additions_accumulate() {
    let test_db = common::TestDb::new("test_concurrent_cart_additions_accumulate.db");
    let repo = test_db.repo();
    let collection = common::seed_collection(&repo, "Bakery");
    let bread = common::seed_product(&repo, collection.id, "Bread", 250);
    let cart = repo.create_cart(&NewCart::new()).unwrap();

    std::thread::scope(|scope| {
        for _ in 0..6 {
            let repo = repo.clone();
            let new_item = NewCartItem::new(cart.id.clone(), bread.id, 2);
            scope.spawn(move || {
                repo.add_cart_item(&new_item)
                    .expect("concurrent add should succeed")
            });
        }
    });

    let cart = repo.get_cart(&cart.id).unwrap().unwrap();
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 12);
}
