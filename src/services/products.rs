use std::collections::BTreeSet;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::money::{format_cents, parse_cents};
use crate::domain::product::{InventoryStatus, Product, ProductListQuery, ProductOrdering};
use crate::forms::empty_string_as_none;
use crate::forms::products::{AddProductForm, EditProductForm, UploadProductsForm};
use crate::pagination::{DEFAULT_ITEMS_PER_PAGE, Paginated};
use crate::repository::{CollectionReader, ProductReader, ProductWriter};
use crate::services::{ServiceError, ServiceResult};

/// Query parameters accepted by the product listing.
#[derive(Debug, Default, Deserialize)]
pub struct ProductsQuery {
    pub collection_id: Option<i32>,
    /// Inclusive lower price bound as a decimal string.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price_min: Option<String>,
    /// Inclusive upper price bound as a decimal string.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub unit_price_max: Option<String>,
    /// `low` or `ok`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub inventory: Option<String>,
    /// Substring of the title or description.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub search: Option<String>,
    /// `unit_price`, `-unit_price`, `last_update` or `-last_update`.
    #[serde(default, deserialize_with = "empty_string_as_none")]
    pub ordering: Option<String>,
    /// Page requested by the client (1-based).
    pub page: Option<usize>,
}

/// Product as exposed by the API, with prices formatted as decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProductView {
    pub id: i32,
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub inventory: i32,
    pub inventory_status: InventoryStatus,
    pub unit_price: String,
    pub price_with_tax: String,
    pub collection: i32,
    pub last_update: NaiveDateTime,
}

impl From<Product> for ProductView {
    fn from(product: Product) -> Self {
        Self {
            inventory_status: product.inventory_status(),
            unit_price: format_cents(product.unit_price_cents),
            price_with_tax: format_cents(product.price_with_tax_cents()),
            id: product.id,
            title: product.title,
            slug: product.slug,
            description: product.description,
            inventory: product.inventory,
            collection: product.collection_id,
            last_update: product.updated_at,
        }
    }
}

/// Translate raw query parameters into a repository list query.
fn build_list_query(query: &ProductsQuery, page: usize) -> ServiceResult<ProductListQuery> {
    let mut list_query = ProductListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    if let Some(collection_id) = query.collection_id {
        list_query = list_query.collection_id(collection_id);
    }

    if let Some(raw) = query.unit_price_min.as_deref() {
        let cents = parse_cents(raw)
            .ok_or_else(|| ServiceError::Form(format!("invalid unit_price_min `{raw}`")))?;
        list_query = list_query.unit_price_min_cents(cents);
    }

    if let Some(raw) = query.unit_price_max.as_deref() {
        let cents = parse_cents(raw)
            .ok_or_else(|| ServiceError::Form(format!("invalid unit_price_max `{raw}`")))?;
        list_query = list_query.unit_price_max_cents(cents);
    }

    if let Some(raw) = query.inventory.as_deref() {
        let status = raw
            .parse::<InventoryStatus>()
            .map_err(|_| ServiceError::Form(format!("invalid inventory filter `{raw}`")))?;
        list_query = list_query.inventory(status);
    }

    if let Some(term) = query.search.as_deref() {
        list_query = list_query.search(term.trim());
    }

    if let Some(raw) = query.ordering.as_deref() {
        let ordering = raw
            .parse::<ProductOrdering>()
            .map_err(|_| ServiceError::Form(format!("invalid ordering `{raw}`")))?;
        list_query = list_query.ordering(ordering);
    }

    Ok(list_query)
}

/// Loads one page of products matching the query filters.
pub fn load_products<R>(repo: &R, query: ProductsQuery) -> ServiceResult<Paginated<ProductView>>
where
    R: ProductReader + ?Sized,
{
    let page = query.page.unwrap_or(1).max(1);
    let list_query = build_list_query(&query, page)?;

    let (total, items) = repo.list_products(list_query).map_err(ServiceError::from)?;
    let total_pages = total.div_ceil(DEFAULT_ITEMS_PER_PAGE);

    Ok(Paginated::new(
        items.into_iter().map(ProductView::from).collect(),
        page,
        total_pages,
    ))
}

pub fn load_product<R>(repo: &R, product_id: i32) -> ServiceResult<ProductView>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .map(ProductView::from)
        .ok_or(ServiceError::NotFound)
}

/// Records nested under a product report an unknown product as not found.
pub(crate) fn ensure_product_exists<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductReader + ?Sized,
{
    repo.get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .map(|_| ())
        .ok_or(ServiceError::NotFound)
}

fn ensure_collection_exists<R>(repo: &R, collection_id: i32) -> ServiceResult<()>
where
    R: CollectionReader + ?Sized,
{
    match repo
        .get_collection_by_id(collection_id)
        .map_err(ServiceError::from)?
    {
        Some(_) => Ok(()),
        None => Err(ServiceError::Validation(format!(
            "No collection with the ID {collection_id} was found."
        ))),
    }
}

/// Creates a product inside an existing collection.
pub fn create_product<R>(repo: &R, form: AddProductForm) -> ServiceResult<ProductView>
where
    R: ProductWriter + CollectionReader + ?Sized,
{
    let new_product = form
        .into_new_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    ensure_collection_exists(repo, new_product.collection_id)?;

    repo.create_product(&new_product)
        .map(ProductView::from)
        .map_err(ServiceError::from)
}

/// Applies a partial update to a product.
pub fn modify_product<R>(
    repo: &R,
    product_id: i32,
    form: EditProductForm,
) -> ServiceResult<ProductView>
where
    R: ProductReader + ProductWriter + CollectionReader + ?Sized,
{
    let updates = form
        .into_update_product()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    if repo
        .get_product_by_id(product_id)
        .map_err(ServiceError::from)?
        .is_none()
    {
        return Err(ServiceError::NotFound);
    }

    if let Some(collection_id) = updates.collection_id {
        ensure_collection_exists(repo, collection_id)?;
    }

    repo.update_product(product_id, &updates)
        .map(ProductView::from)
        .map_err(ServiceError::from)
}

/// Deletes a product unless order items still reference it.
pub fn remove_product<R>(repo: &R, product_id: i32) -> ServiceResult<()>
where
    R: ProductWriter + ?Sized,
{
    repo.delete_product(product_id).map_err(ServiceError::from)
}

/// Imports products from an uploaded CSV file in a single transaction.
pub fn import_products<R>(repo: &R, mut form: UploadProductsForm) -> ServiceResult<usize>
where
    R: ProductWriter + CollectionReader + ?Sized,
{
    let products = form
        .parse()
        .map_err(|err| ServiceError::Form(err.to_string()))?;

    let collection_ids: BTreeSet<i32> = products
        .iter()
        .map(|product| product.collection_id)
        .collect();
    for collection_id in collection_ids {
        ensure_collection_exists(repo, collection_id)?;
    }

    let created = repo
        .create_products(&products)
        .map_err(ServiceError::from)?;

    log::info!("Imported {created} product(s) from CSV upload");

    Ok(created)
}
