use diesel::prelude::*;
use diesel::sqlite::Sqlite;

use crate::{
    domain::product::{
        InventoryStatus, LOW_INVENTORY_THRESHOLD, NewProduct as DomainNewProduct,
        Product as DomainProduct, ProductListQuery, ProductOrdering,
        UpdateProduct as DomainUpdateProduct,
    },
    models::product::{
        NewProduct as DbNewProduct, Product as DbProduct, UpdateProduct as DbUpdateProduct,
    },
    repository::{
        DieselRepository, LIKE_ESCAPE, ProductReader, ProductWriter, RepositoryError,
        RepositoryResult, escape_like,
    },
    schema::products,
};

/// Build the filtered (unordered, unpaginated) product query shared by the
/// count and the page fetch.
fn filtered_products(query: &ProductListQuery) -> products::BoxedQuery<'_, Sqlite> {
    let mut items = products::table.into_boxed::<Sqlite>();

    if let Some(collection_id) = query.collection_id {
        items = items.filter(products::collection_id.eq(collection_id));
    }

    if let Some(min) = query.unit_price_min_cents {
        items = items.filter(products::unit_price_cents.ge(min));
    }

    if let Some(max) = query.unit_price_max_cents {
        items = items.filter(products::unit_price_cents.le(max));
    }

    match query.inventory {
        Some(InventoryStatus::Low) => {
            items = items.filter(products::inventory.lt(LOW_INVENTORY_THRESHOLD));
        }
        Some(InventoryStatus::Ok) => {
            items = items.filter(products::inventory.ge(LOW_INVENTORY_THRESHOLD));
        }
        None => {}
    }

    if let Some(term) = query.search.as_ref() {
        let pattern = format!("%{}%", escape_like(term));
        items = items.filter(
            products::title
                .like(pattern.clone())
                .escape(LIKE_ESCAPE)
                .or(products::description.like(pattern).escape(LIKE_ESCAPE)),
        );
    }

    items
}

impl ProductReader for DieselRepository {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<DomainProduct>> {
        let mut conn = self.conn()?;
        let product = products::table
            .filter(products::id.eq(id))
            .first::<DbProduct>(&mut conn)
            .optional()?;

        Ok(product.map(Into::into))
    }

    fn list_products(
        &self,
        query: ProductListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainProduct>)> {
        let mut conn = self.conn()?;

        let total = filtered_products(&query)
            .count()
            .get_result::<i64>(&mut conn)? as usize;

        let mut items = filtered_products(&query);

        items = match query.ordering {
            Some(ProductOrdering::UnitPriceAsc) => {
                items.order((products::unit_price_cents.asc(), products::id.asc()))
            }
            Some(ProductOrdering::UnitPriceDesc) => {
                items.order((products::unit_price_cents.desc(), products::id.asc()))
            }
            Some(ProductOrdering::LastUpdateAsc) => {
                items.order((products::updated_at.asc(), products::id.asc()))
            }
            Some(ProductOrdering::LastUpdateDesc) => {
                items.order((products::updated_at.desc(), products::id.asc()))
            }
            None => items.order(products::id.asc()),
        };

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let db_products = items.load::<DbProduct>(&mut conn)?;

        Ok((total, db_products.into_iter().map(Into::into).collect()))
    }
}

impl ProductWriter for DieselRepository {
    fn create_product(&self, new_product: &DomainNewProduct) -> RepositoryResult<DomainProduct> {
        let mut conn = self.conn()?;
        let db_new = DbNewProduct::from(new_product);

        let created = diesel::insert_into(products::table)
            .values(&db_new)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(created.into())
    }

    fn create_products(&self, new_products: &[DomainNewProduct]) -> RepositoryResult<usize> {
        let mut conn = self.conn()?;

        let db_new: Vec<DbNewProduct> = new_products.iter().map(DbNewProduct::from).collect();

        conn.immediate_transaction::<usize, RepositoryError, _>(|conn| {
            let mut inserted = 0;
            for product in &db_new {
                inserted += diesel::insert_into(products::table)
                    .values(product)
                    .execute(conn)?;
            }
            Ok(inserted)
        })
    }

    fn update_product(
        &self,
        product_id: i32,
        updates: &DomainUpdateProduct,
    ) -> RepositoryResult<DomainProduct> {
        let mut conn = self.conn()?;
        let db_updates = DbUpdateProduct::from(updates);

        let updated = diesel::update(products::table.filter(products::id.eq(product_id)))
            .set(&db_updates)
            .get_result::<DbProduct>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_product(&self, product_id: i32) -> RepositoryResult<()> {
        use crate::schema::order_items;

        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let ordered = diesel::select(diesel::dsl::exists(
                order_items::table.filter(order_items::product_id.eq(product_id)),
            ))
            .get_result::<bool>(conn)?;

            if ordered {
                return Err(RepositoryError::InUse(
                    "Product cannot be deleted because it is associated with an order item."
                        .to_string(),
                ));
            }

            let deleted = diesel::delete(products::table.filter(products::id.eq(product_id)))
                .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
