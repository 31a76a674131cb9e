use std::io::{Read, Seek};

use actix_multipart::form::{MultipartForm, tempfile::TempFile};
use csv::{StringRecord, Trim};
use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

use crate::domain::money::{MAX_UNIT_PRICE_CENTS, parse_cents};
use crate::domain::product::{NewProduct, UpdateProduct, slugify};
use crate::forms::{DecimalInput, sanitize_inline_text, sanitize_multiline_text};

/// Maximum allowed length for a product title.
const TITLE_MAX_LEN: u64 = 255;

/// Result type returned by the product form helpers.
pub type ProductFormResult<T> = Result<T, ProductFormError>;

/// Errors that can occur while processing product payloads.
#[derive(Debug, Error)]
pub enum ProductFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("product title cannot be empty")]
    EmptyTitle,
    #[error("product slug cannot be empty")]
    EmptySlug,
    /// Price is not an amount in `0.01..=9999.99` with at most two fraction digits.
    #[error("invalid unit price `{value}`")]
    InvalidPrice { value: String },
    #[error("upload is missing the required `{header}` header")]
    MissingHeader { header: &'static str },
    #[error("row {row} is missing a product title")]
    UploadMissingTitle { row: usize },
    #[error("row {row} has invalid unit price `{value}`")]
    UploadInvalidPrice { row: usize, value: String },
    #[error("row {row} has invalid inventory `{value}`")]
    UploadInvalidInventory { row: usize, value: String },
    #[error("row {row} has invalid collection id `{value}`")]
    UploadInvalidCollection { row: usize, value: String },
    #[error("upload contains no products")]
    EmptyUpload,
    #[error("failed to read upload: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse CSV: {0}")]
    Csv(#[from] csv::Error),
}

/// Payload for `POST /products`.
#[derive(Debug, Deserialize, Validate)]
pub struct AddProductForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: String,
    /// Derived from the title when omitted.
    #[validate(length(max = TITLE_MAX_LEN))]
    pub slug: Option<String>,
    pub description: Option<String>,
    pub unit_price: DecimalInput,
    #[validate(range(min = 0))]
    pub inventory: i32,
    #[validate(range(min = 1))]
    pub collection_id: i32,
}

impl AddProductForm {
    /// Validates and sanitizes the payload into a domain `NewProduct`.
    pub fn into_new_product(self) -> ProductFormResult<NewProduct> {
        self.validate()?;

        let title = sanitize_inline_text(&self.title);
        if title.is_empty() {
            return Err(ProductFormError::EmptyTitle);
        }

        let unit_price_cents = positive_cents(&self.unit_price)?;

        let mut product = NewProduct::new(title, unit_price_cents, self.inventory, self.collection_id);

        if let Some(slug) = self.slug.as_deref().map(slugify).filter(|slug| !slug.is_empty()) {
            product = product.with_slug(slug);
        }

        if let Some(description) = self
            .description
            .as_deref()
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            product = product.with_description(description);
        }

        Ok(product)
    }
}

/// Payload for `PATCH /products/{id}`; absent fields are left untouched.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct EditProductForm {
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub title: Option<String>,
    #[validate(length(min = 1, max = TITLE_MAX_LEN))]
    pub slug: Option<String>,
    /// An empty string clears the description.
    pub description: Option<String>,
    pub unit_price: Option<DecimalInput>,
    #[validate(range(min = 0))]
    pub inventory: Option<i32>,
    #[validate(range(min = 1))]
    pub collection_id: Option<i32>,
}

impl EditProductForm {
    /// Validates and sanitizes the payload into a domain `UpdateProduct`.
    pub fn into_update_product(self) -> ProductFormResult<UpdateProduct> {
        self.validate()?;

        let mut updates = UpdateProduct::new();

        if let Some(title) = self.title {
            let sanitized = sanitize_inline_text(&title);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptyTitle);
            }
            updates = updates.title(sanitized);
        }

        if let Some(slug) = self.slug {
            let sanitized = slugify(&slug);
            if sanitized.is_empty() {
                return Err(ProductFormError::EmptySlug);
            }
            updates = updates.slug(sanitized);
        }

        if let Some(description) = self.description {
            let sanitized = sanitize_multiline_text(&description);
            if sanitized.is_empty() {
                updates = updates.description(None::<String>);
            } else {
                updates = updates.description(Some(sanitized));
            }
        }

        if let Some(price) = self.unit_price.as_ref() {
            updates = updates.unit_price_cents(positive_cents(price)?);
        }

        if let Some(inventory) = self.inventory {
            updates = updates.inventory(inventory);
        }

        if let Some(collection_id) = self.collection_id {
            updates = updates.collection_id(collection_id);
        }

        Ok(updates)
    }
}

fn positive_cents(input: &DecimalInput) -> ProductFormResult<i64> {
    match input.to_cents() {
        Some(cents) if is_valid_price(cents) => Ok(cents),
        _ => Err(ProductFormError::InvalidPrice {
            value: match input {
                DecimalInput::Text(text) => text.clone(),
                DecimalInput::Number(number) => number.to_string(),
            },
        }),
    }
}

fn is_valid_price(cents: i64) -> bool {
    (1..=MAX_UNIT_PRICE_CENTS).contains(&cents)
}

#[derive(MultipartForm)]
/// Multipart form for uploading a CSV file with new products.
pub struct UploadProductsForm {
    #[multipart(limit = "10MB")]
    pub csv: TempFile,
}

impl UploadProductsForm {
    /// Parse the uploaded CSV file into domain `NewProduct` values.
    pub fn parse(&mut self) -> ProductFormResult<Vec<NewProduct>> {
        self.csv.file.rewind()?;
        parse_products(self.csv.file.by_ref())
    }
}

struct ProductHeaderIndexes {
    title: usize,
    unit_price: usize,
    inventory: usize,
    collection_id: usize,
    slug: Option<usize>,
    description: Option<usize>,
}

fn locate_header(headers: &StringRecord, expected: &str) -> Option<usize> {
    headers
        .iter()
        .position(|header| header.eq_ignore_ascii_case(expected))
}

fn require_header(headers: &StringRecord, expected: &'static str) -> ProductFormResult<usize> {
    locate_header(headers, expected).ok_or(ProductFormError::MissingHeader { header: expected })
}

fn locate_product_headers(headers: &StringRecord) -> ProductFormResult<ProductHeaderIndexes> {
    Ok(ProductHeaderIndexes {
        title: require_header(headers, "title")?,
        unit_price: require_header(headers, "unit_price")?,
        inventory: require_header(headers, "inventory")?,
        collection_id: require_header(headers, "collection_id")?,
        slug: locate_header(headers, "slug"),
        description: locate_header(headers, "description"),
    })
}

/// Every row is validated before anything is returned, so a bad row rejects
/// the whole upload.
fn parse_products<R: Read>(reader: R) -> ProductFormResult<Vec<NewProduct>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .flexible(true)
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let indexes = locate_product_headers(&headers)?;

    let mut products = Vec::new();

    for (index, row) in csv_reader.records().enumerate() {
        let row_number = index + 2; // header is row 1
        let record = row?;
        let field = |idx: usize| record.get(idx).unwrap_or("").trim();

        let title = sanitize_inline_text(field(indexes.title));
        if title.is_empty() {
            return Err(ProductFormError::UploadMissingTitle { row: row_number });
        }

        let price_raw = field(indexes.unit_price);
        let unit_price_cents = parse_cents(price_raw)
            .filter(|cents| is_valid_price(*cents))
            .ok_or_else(|| ProductFormError::UploadInvalidPrice {
                row: row_number,
                value: price_raw.to_string(),
            })?;

        let inventory_raw = field(indexes.inventory);
        let inventory = inventory_raw
            .parse::<i32>()
            .ok()
            .filter(|value| *value >= 0)
            .ok_or_else(|| ProductFormError::UploadInvalidInventory {
                row: row_number,
                value: inventory_raw.to_string(),
            })?;

        let collection_raw = field(indexes.collection_id);
        let collection_id = collection_raw
            .parse::<i32>()
            .ok()
            .filter(|value| *value > 0)
            .ok_or_else(|| ProductFormError::UploadInvalidCollection {
                row: row_number,
                value: collection_raw.to_string(),
            })?;

        let mut product = NewProduct::new(title, unit_price_cents, inventory, collection_id);

        if let Some(slug) = indexes
            .slug
            .map(field)
            .map(slugify)
            .filter(|slug| !slug.is_empty())
        {
            product = product.with_slug(slug);
        }

        if let Some(description) = indexes
            .description
            .map(field)
            .map(sanitize_multiline_text)
            .filter(|value| !value.is_empty())
        {
            product = product.with_description(description);
        }

        products.push(product);
    }

    if products.is_empty() {
        return Err(ProductFormError::EmptyUpload);
    }

    Ok(products)
}
