use std::collections::HashMap;

use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

use crate::{
    domain::customer::{
        Customer as DomainCustomer, CustomerListQuery, NewCustomer as DomainNewCustomer,
        UpdateCustomer as DomainUpdateCustomer,
    },
    models::{
        customer::{
            Customer as DbCustomer, NewCustomer as DbNewCustomer,
            UpdateCustomer as DbUpdateCustomer,
        },
        user::User as DbUser,
    },
    repository::{
        CustomerReader, CustomerWriter, DieselRepository, LIKE_ESCAPE, RepositoryError,
        RepositoryResult, escape_like,
    },
    schema::{customers, orders, users},
};

fn load_orders_counts(
    conn: &mut SqliteConnection,
    customer_ids: &[i32],
) -> RepositoryResult<HashMap<i32, i64>> {
    if customer_ids.is_empty() {
        return Ok(HashMap::new());
    }

    let rows = orders::table
        .filter(orders::customer_id.eq_any(customer_ids))
        .group_by(orders::customer_id)
        .select((orders::customer_id, diesel::dsl::count_star()))
        .load::<(i32, i64)>(conn)?;

    Ok(rows.into_iter().collect())
}

/// Attach user names and order counts to loaded customer rows.
fn into_domain_customers(
    conn: &mut SqliteConnection,
    rows: Vec<(DbCustomer, DbUser)>,
) -> RepositoryResult<Vec<DomainCustomer>> {
    let ids: Vec<i32> = rows.iter().map(|(customer, _)| customer.id).collect();
    let counts = load_orders_counts(conn, &ids)?;

    Ok(rows
        .into_iter()
        .map(|(customer, user)| {
            let orders_count = counts.get(&customer.id).copied().unwrap_or_default();
            customer.into_domain(&user, orders_count)
        })
        .collect())
}

impl CustomerReader for DieselRepository {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        let mut conn = self.conn()?;

        let rows = customers::table
            .inner_join(users::table)
            .filter(customers::id.eq(id))
            .select((DbCustomer::as_select(), DbUser::as_select()))
            .load::<(DbCustomer, DbUser)>(&mut conn)?;

        Ok(into_domain_customers(&mut conn, rows)?.into_iter().next())
    }

    fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<DomainCustomer>> {
        let mut conn = self.conn()?;

        let rows = customers::table
            .inner_join(users::table)
            .filter(customers::user_id.eq(user_id))
            .select((DbCustomer::as_select(), DbUser::as_select()))
            .load::<(DbCustomer, DbUser)>(&mut conn)?;

        Ok(into_domain_customers(&mut conn, rows)?.into_iter().next())
    }

    fn get_customers_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<DomainCustomer>> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut conn = self.conn()?;

        let rows = customers::table
            .inner_join(users::table)
            .filter(customers::id.eq_any(ids))
            .select((DbCustomer::as_select(), DbUser::as_select()))
            .load::<(DbCustomer, DbUser)>(&mut conn)?;

        into_domain_customers(&mut conn, rows)
    }

    fn list_customers(
        &self,
        query: CustomerListQuery,
    ) -> RepositoryResult<(usize, Vec<DomainCustomer>)> {
        let mut conn = self.conn()?;

        let pattern = query
            .search
            .as_ref()
            .map(|term| format!("{}%", escape_like(term)));

        let mut count_query = customers::table
            .inner_join(users::table)
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pattern) = pattern.as_ref() {
            count_query = count_query.filter(
                users::first_name
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(users::last_name.like(pattern.clone()).escape(LIKE_ESCAPE)),
            );
        }

        let total = count_query.count().get_result::<i64>(&mut conn)? as usize;

        let mut items = customers::table
            .inner_join(users::table)
            .select((DbCustomer::as_select(), DbUser::as_select()))
            .into_boxed::<diesel::sqlite::Sqlite>();

        if let Some(pattern) = pattern.as_ref() {
            items = items.filter(
                users::first_name
                    .like(pattern.clone())
                    .escape(LIKE_ESCAPE)
                    .or(users::last_name.like(pattern.clone()).escape(LIKE_ESCAPE)),
            );
        }

        items = items.order((
            users::first_name.asc(),
            users::last_name.asc(),
            customers::id.asc(),
        ));

        if let Some(pagination) = &query.pagination {
            items = items
                .offset(pagination.offset())
                .limit(pagination.limit());
        }

        let rows = items.load::<(DbCustomer, DbUser)>(&mut conn)?;

        Ok((total, into_domain_customers(&mut conn, rows)?))
    }
}

impl CustomerWriter for DieselRepository {
    fn create_customer(
        &self,
        new_customer: &DomainNewCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        let mut conn = self.conn()?;
        let db_new = DbNewCustomer::from(new_customer);

        conn.immediate_transaction::<DomainCustomer, RepositoryError, _>(|conn| {
            let created = diesel::insert_into(customers::table)
                .values(&db_new)
                .get_result::<DbCustomer>(conn)?;

            let user = users::table
                .filter(users::id.eq(created.user_id))
                .first::<DbUser>(conn)?;

            Ok(created.into_domain(&user, 0))
        })
    }

    fn update_customer(
        &self,
        customer_id: i32,
        updates: &DomainUpdateCustomer,
    ) -> RepositoryResult<DomainCustomer> {
        let mut conn = self.conn()?;
        let db_updates =
            DbUpdateCustomer::from_domain(updates, chrono::Utc::now().naive_utc());

        conn.immediate_transaction::<DomainCustomer, RepositoryError, _>(|conn| {
            let updated = diesel::update(customers::table.filter(customers::id.eq(customer_id)))
                .set(&db_updates)
                .get_result::<DbCustomer>(conn)?;

            let user = users::table
                .filter(users::id.eq(updated.user_id))
                .first::<DbUser>(conn)?;

            let counts = load_orders_counts(conn, &[updated.id])?;
            let orders_count = counts.get(&updated.id).copied().unwrap_or_default();

            Ok(updated.into_domain(&user, orders_count))
        })
    }
}
