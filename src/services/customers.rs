use serde::Deserialize;

use crate::domain::customer::{Customer, CustomerListQuery};
use crate::forms::customers::{AddCustomerForm, EditCustomerForm};
use crate::forms::empty_string_as_none;
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CustomerReader, CustomerWriter, UserReader};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the customer listing.
#[derive(Debug, Default, Deserialize)]
pub struct CustomersQuery {
    /// Prefix of the first or last name.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    pub page: Option<usize>,
}

/// Creates a customer profile for an existing user.
pub fn create_customer<R>(repo: &R, form: AddCustomerForm) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + UserReader + ?Sized,
{
    let new_customer = form
        .into_new_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_user_by_id(new_customer.user_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::Validation(format!(
            "No user with the ID {} was found.",
            new_customer.user_id
        )));
    }

    if repo
        .get_customer_by_user_id(new_customer.user_id)
        .map_err(ServiceError::from)?
        .is_some()
    {
        return Err(ServiceError::Conflict);
    }

    repo.create_customer(&new_customer)
        .map_err(ServiceError::from)
}

pub fn load_customer<R>(repo: &R, customer_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_id(customer_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn modify_customer<R>(
    repo: &R,
    customer_id: i32,
    form: EditCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerWriter + ?Sized,
{
    let updates = form
        .into_update_customer()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    repo.update_customer(customer_id, &updates)
        .map_err(ServiceError::from)
}

/// Lists customers ordered by first then last name.
pub fn load_customers<R>(repo: &R, query: CustomersQuery) -> ServiceResult<Paginated<Customer>>
where
    R: CustomerReader + ?Sized,
{
    let CustomersQuery { search, page } = query;
    let page = page.unwrap_or(1).max(1);

    let mut list_query = CustomerListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);
    if let Some(term) = search.as_deref() {
        list_query = list_query.search(term.trim());
    }

    let (total, customers) = repo
        .list_customers(list_query)
        .map_err(ServiceError::from)?;

    Ok(Paginated::new(
        customers,
        page,
        total.div_ceil(DEFAULT_ITEMS_PER_PAGE),
    ))
}

/// Profile of the calling user.
pub fn load_current_customer<R>(repo: &R, user_id: i32) -> ServiceResult<Customer>
where
    R: CustomerReader + ?Sized,
{
    repo.get_customer_by_user_id(user_id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}

pub fn modify_current_customer<R>(
    repo: &R,
    user_id: i32,
    form: EditCustomerForm,
) -> ServiceResult<Customer>
where
    R: CustomerReader + CustomerWriter + ?Sized,
{
    let customer = load_current_customer(repo, user_id)?;
    modify_customer(repo, customer.id, form)
}
