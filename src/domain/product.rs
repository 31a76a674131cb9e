use std::str::FromStr;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::domain::money;
use crate::pagination::Pagination;

/// Stock below this level is reported as [`InventoryStatus::Low`].
pub const LOW_INVENTORY_THRESHOLD: i32 = 10;

/// Domain representation of a catalog product.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Product {
    /// Unique identifier of the product.
    pub id: i32,
    /// Human-readable title.
    pub title: String,
    /// URL-friendly identifier derived from the title.
    pub slug: String,
    /// Optional longer description shown to shoppers.
    pub description: Option<String>,
    /// Current price in the smallest currency unit.
    pub unit_price_cents: i64,
    /// Units in stock.
    pub inventory: i32,
    /// Collection the product belongs to.
    pub collection_id: i32,
    /// Timestamp for when the product record was created.
    pub created_at: NaiveDateTime,
    /// Timestamp for the last update to the product record.
    pub updated_at: NaiveDateTime,
}

impl Product {
    /// Price including the 10% tax, in cents.
    pub fn price_with_tax_cents(&self) -> i64 {
        money::with_tax(self.unit_price_cents)
    }

    pub fn inventory_status(&self) -> InventoryStatus {
        InventoryStatus::for_inventory(self.inventory)
    }
}

/// Coarse stock level used by listings and filters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InventoryStatus {
    Low,
    Ok,
}

impl InventoryStatus {
    pub fn for_inventory(inventory: i32) -> Self {
        if inventory < LOW_INVENTORY_THRESHOLD {
            InventoryStatus::Low
        } else {
            InventoryStatus::Ok
        }
    }
}

impl FromStr for InventoryStatus {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" | "<10" => Ok(InventoryStatus::Low),
            "ok" | ">10" => Ok(InventoryStatus::Ok),
            other => Err(format!("unknown inventory filter `{other}`")),
        }
    }
}

/// Payload required to insert a new product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewProduct {
    pub title: String,
    pub slug: String,
    pub description: Option<String>,
    pub unit_price_cents: i64,
    pub inventory: i32,
    pub collection_id: i32,
    pub updated_at: NaiveDateTime,
}

impl NewProduct {
    /// Build a new product payload; the slug is derived from the title.
    pub fn new(
        title: impl Into<String>,
        unit_price_cents: i64,
        inventory: i32,
        collection_id: i32,
    ) -> Self {
        let title = title.into();
        let now = chrono::Local::now().naive_utc();
        Self {
            slug: slugify(&title),
            title,
            description: None,
            unit_price_cents,
            inventory,
            collection_id,
            updated_at: now,
        }
    }

    /// Override the derived slug.
    pub fn with_slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = slug.into();
        self
    }

    /// Attach a descriptive text to the product payload.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

/// Patch data applied when updating an existing product.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateProduct {
    pub title: Option<String>,
    pub slug: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
    pub unit_price_cents: Option<i64>,
    pub inventory: Option<i32>,
    pub collection_id: Option<i32>,
    pub updated_at: NaiveDateTime,
}

impl Default for UpdateProduct {
    fn default() -> Self {
        Self::new()
    }
}

impl UpdateProduct {
    pub fn new() -> Self {
        Self {
            title: None,
            slug: None,
            description: None,
            unit_price_cents: None,
            inventory: None,
            collection_id: None,
            updated_at: chrono::Local::now().naive_utc(),
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn slug(mut self, slug: impl Into<String>) -> Self {
        self.slug = Some(slug.into());
        self
    }

    pub fn description(mut self, description: Option<impl Into<String>>) -> Self {
        self.description = Some(description.map(Into::into));
        self
    }

    pub fn unit_price_cents(mut self, unit_price_cents: i64) -> Self {
        self.unit_price_cents = Some(unit_price_cents);
        self
    }

    pub fn inventory(mut self, inventory: i32) -> Self {
        self.inventory = Some(inventory);
        self
    }

    pub fn collection_id(mut self, collection_id: i32) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    /// Whether the patch changes anything besides the timestamp.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.slug.is_none()
            && self.description.is_none()
            && self.unit_price_cents.is_none()
            && self.inventory.is_none()
            && self.collection_id.is_none()
    }
}

/// Sort orders accepted by the product listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductOrdering {
    UnitPriceAsc,
    UnitPriceDesc,
    LastUpdateAsc,
    LastUpdateDesc,
}

impl FromStr for ProductOrdering {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "unit_price" => Ok(ProductOrdering::UnitPriceAsc),
            "-unit_price" => Ok(ProductOrdering::UnitPriceDesc),
            "last_update" => Ok(ProductOrdering::LastUpdateAsc),
            "-last_update" => Ok(ProductOrdering::LastUpdateDesc),
            other => Err(format!("unsupported ordering `{other}`")),
        }
    }
}

/// Query definition used to filter, sort and paginate products.
#[derive(Debug, Clone, Default)]
pub struct ProductListQuery {
    pub collection_id: Option<i32>,
    /// Inclusive lower bound on the unit price.
    pub unit_price_min_cents: Option<i64>,
    /// Inclusive upper bound on the unit price.
    pub unit_price_max_cents: Option<i64>,
    pub inventory: Option<InventoryStatus>,
    /// Substring matched against title and description.
    pub search: Option<String>,
    /// Defaults to ascending id when unset.
    pub ordering: Option<ProductOrdering>,
    pub pagination: Option<Pagination>,
}

impl ProductListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn collection_id(mut self, collection_id: i32) -> Self {
        self.collection_id = Some(collection_id);
        self
    }

    pub fn unit_price_min_cents(mut self, cents: i64) -> Self {
        self.unit_price_min_cents = Some(cents);
        self
    }

    pub fn unit_price_max_cents(mut self, cents: i64) -> Self {
        self.unit_price_max_cents = Some(cents);
        self
    }

    pub fn inventory(mut self, status: InventoryStatus) -> Self {
        self.inventory = Some(status);
        self
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn ordering(mut self, ordering: ProductOrdering) -> Self {
        self.ordering = Some(ordering);
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Lowercase ASCII slug: alphanumerics kept, everything else collapsed to `-`.
pub fn slugify(input: &str) -> String {
    let mut slug = String::with_capacity(input.len());
    let mut pending_dash = false;

    for ch in input.chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_dash && !slug.is_empty() {
                slug.push('-');
            }
            slug.push(ch.to_ascii_lowercase());
            pending_dash = false;
        } else {
            pending_dash = true;
        }
    }

    slug
}
