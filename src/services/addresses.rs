use crate::domain::address::Address;
use crate::forms::addresses::{AddAddressForm, EditAddressForm};
use crate::repository::{AddressReader, AddressWriter, CustomerReader};
use crate::services::{ServiceError, ServiceResult};

fn ensure_customer_exists<R>(repo: &R, customer_id: i32) -> ServiceResult<()>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)
        .map_err(ServiceError::from)?
        .map(|_| ())
        .ok_or(ServiceError::NotFound)
}

pub fn load_addresses<R>(repo: &R, customer_id: i32) -> ServiceResult<Vec<Address>>
where
    R: CustomerReader + AddressReader + ?Sized,
{
    ensure_customer_exists(repo, customer_id)?;
    repo.list_addresses(customer_id).map_err(ServiceError::from)
}

pub fn load_address<R>(repo: &R, customer_id: i32, address_id: i32) -> ServiceResult<Address>
where
    R: AddressReader + ?Sized,
{
    repo.get_address(customer_id, address_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn create_address<R>(repo: &R, customer_id: i32, form: AddAddressForm) -> ServiceResult<Address>
where
    R: CustomerReader + AddressWriter + ?Sized,
{
    let new_address = form
        .into_new_address(customer_id)
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_customer_exists(repo, customer_id)?;

    repo.create_address(&new_address)
        .map_err(ServiceError::from)
}

pub fn modify_address<R>(
    repo: &R,
    customer_id: i32,
    address_id: i32,
    form: EditAddressForm,
) -> ServiceResult<Address>
where
    R: AddressWriter + ?Sized,
{
    let updates = form
        .into_update_address()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_address(customer_id, address_id, &updates)
        .map_err(ServiceError::from)
}

pub fn remove_address<R>(repo: &R, customer_id: i32, address_id: i32) -> ServiceResult<()>
where
    R: AddressWriter + ?Sized,
{
    repo.delete_address(customer_id, address_id)
        .map_err(ServiceError::from)
}
