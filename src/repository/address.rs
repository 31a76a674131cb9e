use diesel::prelude::*;

use crate::{
    domain::address::{
        Address as DomainAddress, NewAddress as DomainNewAddress,
        UpdateAddress as DomainUpdateAddress,
    },
    models::address::{
        Address as DbAddress, NewAddress as DbNewAddress, UpdateAddress as DbUpdateAddress,
    },
    repository::{
        AddressReader, AddressWriter, DieselRepository, RepositoryError, RepositoryResult,
    },
    schema::addresses,
};

impl AddressReader for DieselRepository {
    fn get_address(
        &self,
        customer_id: i32,
        address_id: i32,
    ) -> RepositoryResult<Option<DomainAddress>> {
        let mut conn = self.conn()?;

        let address = addresses::table
            .filter(addresses::id.eq(address_id))
            .filter(addresses::customer_id.eq(customer_id))
            .first::<DbAddress>(&mut conn)
            .optional()?;

        Ok(address.map(Into::into))
    }

    fn list_addresses(&self, customer_id: i32) -> RepositoryResult<Vec<DomainAddress>> {
        let mut conn = self.conn()?;

        let items = addresses::table
            .filter(addresses::customer_id.eq(customer_id))
            .order(addresses::id.asc())
            .load::<DbAddress>(&mut conn)?;

        Ok(items.into_iter().map(Into::into).collect())
    }
}

impl AddressWriter for DieselRepository {
    fn create_address(&self, new_address: &DomainNewAddress) -> RepositoryResult<DomainAddress> {
        let mut conn = self.conn()?;
        let db_new = DbNewAddress::from(new_address);

        let created = diesel::insert_into(addresses::table)
            .values(&db_new)
            .get_result::<DbAddress>(&mut conn)?;

        Ok(created.into())
    }

    fn update_address(
        &self,
        customer_id: i32,
        address_id: i32,
        updates: &DomainUpdateAddress,
    ) -> RepositoryResult<DomainAddress> {
        let mut conn = self.conn()?;

        let target = addresses::table
            .filter(addresses::id.eq(address_id))
            .filter(addresses::customer_id.eq(customer_id));

        if updates.is_empty() {
            return target
                .first::<DbAddress>(&mut conn)
                .map(Into::into)
                .map_err(RepositoryError::from);
        }

        let db_updates = DbUpdateAddress::from(updates);
        let updated = diesel::update(target)
            .set(&db_updates)
            .get_result::<DbAddress>(&mut conn)?;

        Ok(updated.into())
    }

    fn delete_address(&self, customer_id: i32, address_id: i32) -> RepositoryResult<()> {
        let mut conn = self.conn()?;

        let deleted = diesel::delete(
            addresses::table
                .filter(addresses::id.eq(address_id))
                .filter(addresses::customer_id.eq(customer_id)),
        )
        .execute(&mut conn)?;

        if deleted == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
