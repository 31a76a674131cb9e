//! Helpers for integration tests.
#![allow(dead_code)]

use pushkind_store::db::{DbPool, establish_connection_pool, run_migrations};
use pushkind_store::domain::collection::{Collection, NewCollection};
use pushkind_store::domain::customer::{Customer, NewCustomer};
use pushkind_store::domain::product::{NewProduct, Product};
use pushkind_store::domain::user::{NewUser, User};
use pushkind_store::repository::{
    CollectionWriter, CustomerWriter, DieselRepository, ProductWriter, UserWriter,
};

/// Temporary database used in integration tests.
pub struct TestDb {
    filename: String,
    pool: DbPool,
}

impl TestDb {
    pub fn new(filename: &str) -> Self {
        remove_db_files(filename); // Clean up old DB

        let pool =
            establish_connection_pool(filename).expect("Failed to establish SQLite connection.");
        run_migrations(&pool).expect("Migrations failed");
        TestDb {
            filename: filename.to_string(),
            pool,
        }
    }

    pub fn pool(&self) -> DbPool {
        self.pool.clone()
    }

    pub fn repo(&self) -> DieselRepository {
        DieselRepository::new(self.pool())
    }
}

impl Drop for TestDb {
    fn drop(&mut self) {
        remove_db_files(&self.filename);
    }
}

fn remove_db_files(filename: &str) {
    std::fs::remove_file(filename).ok();
    std::fs::remove_file(format!("{filename}-shm")).ok();
    std::fs::remove_file(format!("{filename}-wal")).ok();
}

pub fn seed_collection(repo: &DieselRepository, title: &str) -> Collection {
    repo.create_collection(&NewCollection::new(title))
        .expect("collection should be created")
}

pub fn seed_product(
    repo: &DieselRepository,
    collection_id: i32,
    title: &str,
    unit_price_cents: i64,
) -> Product {
    repo.create_product(&NewProduct::new(title, unit_price_cents, 50, collection_id))
        .expect("product should be created")
}

pub fn seed_user(repo: &DieselRepository, username: &str) -> User {
    repo.create_user(
        &NewUser::new(username, format!("{username}@example.com")).with_name("Test", username),
    )
    .expect("user should be created")
}

/// Creates a user together with its customer profile.
pub fn seed_customer(repo: &DieselRepository, username: &str) -> (User, Customer) {
    let user = seed_user(repo, username);
    let customer = repo
        .create_customer(&NewCustomer::new(user.id, "555-0100"))
        .expect("customer should be created");
    (user, customer)
}
