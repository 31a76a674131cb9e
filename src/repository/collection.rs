use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::collection::{
        Collection as DomainCollection, NewCollection as DomainNewCollection,
        UpdateCollection as DomainUpdateCollection,
    },
    models::collection::{
        Collection as DbCollection, NewCollection as DbNewCollection,
        UpdateCollection as DbUpdateCollection,
    },
    repository::{
        CollectionReader, CollectionWriter, DieselRepository, RepositoryError, RepositoryResult,
    },
    schema::{collections, products},
};

/// Count products per collection for the given collection ids.
fn load_products_counts(
    conn: &mut SqliteConnection,
    collection_ids: &[i32],
) -> RepositoryResult<HashMap<i32, i64>> {
    if collection_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = products::table
        .filter(products::collection_id.eq_any(collection_ids))
        .group_by(products::collection_id)
        .select((products::collection_id, diesel::dsl::count_star()))
        .load::<(i32, i64)>(conn)?;

    Ok(rows.into_iter().collect())
}

impl CollectionReader for DieselRepository {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCollection>> {
        let mut conn = self.conn()?;

        let collection = collections::table
            .filter(collections::id.eq(id))
            .first::<DbCollection>(&mut conn)
            .optional()?;

        let Some(collection) = collection else {
            return Ok(None);
        };

        let counts = load_products_counts(&mut conn, &[collection.id])?;
        let products_count = counts.get(&collection.id).copied().unwrap_or_default();

        Ok(Some(collection.into_domain(products_count)))
    }

    fn list_collections(&self) -> RepositoryResult<Vec<DomainCollection>> {
        let mut conn = self.conn()?;

        let db_collections = collections::table
            .order(collections::id.asc())
            .load::<DbCollection>(&mut conn)?;

        let ids: Vec<i32> = db_collections.iter().map(|collection| collection.id).collect();
        let counts = load_products_counts(&mut conn, &ids)?;

        Ok(db_collections
            .into_iter()
            .map(|collection| {
                let products_count = counts.get(&collection.id).copied().unwrap_or_default();
                collection.into_domain(products_count)
            })
            .collect())
    }
}

impl CollectionWriter for DieselRepository {
    fn create_collection(
        &self,
        new_collection: &DomainNewCollection,
    ) -> RepositoryResult<DomainCollection> {
        let mut conn = self.conn()?;
        let db_new = DbNewCollection::from(new_collection);

        let created = diesel::insert_into(collections::table)
            .values(&db_new)
            .get_result::<DbCollection>(&mut conn)?;

        Ok(created.into_domain(0))
    }

    fn update_collection(
        &self,
        collection_id: i32,
        updates: &DomainUpdateCollection,
    ) -> RepositoryResult<DomainCollection> {
        let mut conn = self.conn()?;
        let db_updates = DbUpdateCollection::from(updates);

        let updated = diesel::update(collections::table.filter(collections::id.eq(collection_id)))
            .set(&db_updates)
            .get_result::<DbCollection>(&mut conn)?;

        let counts = load_products_counts(&mut conn, &[updated.id])?;
        let products_count = counts.get(&updated.id).copied().unwrap_or_default();

        Ok(updated.into_domain(products_count))
    }

    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        conn.immediate_transaction::<(), RepositoryError, _>(|conn| {
            let has_products = diesel::select(diesel::dsl::exists(
                products::table.filter(products::collection_id.eq(collection_id)),
            ))
            .get_result::<bool>(conn)?;

            if has_products {
                return Err(RepositoryError::InUse(
                    "Collection cannot be deleted because it includes one or more products."
                        .to_string(),
                ));
            }

            let deleted =
                diesel::delete(collections::table.filter(collections::id.eq(collection_id)))
                    .execute(conn)?;

            if deleted == 0 {
                return Err(RepositoryError::NotFound);
            }

            Ok(())
        })
    }
}
