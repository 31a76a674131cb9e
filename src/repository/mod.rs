use crate::db::{DbConnection, DbPool};
use crate::domain::{
    address::{Address, NewAddress, UpdateAddress},
    cart::{Cart, CartItem, NewCart, NewCartItem},
    collection::{Collection, NewCollection, UpdateCollection},
    content_type::ContentType,
    customer::{Customer, CustomerListQuery, NewCustomer, UpdateCustomer},
    like::{LikedItem, NewLikedItem},
    order::{Checkout, Order, OrderListQuery, UpdateOrder},
    product::{NewProduct, Product, ProductListQuery, UpdateProduct},
    product_image::{NewProductImage, ProductImage},
    promotion::{NewPromotion, Promotion, UpdatePromotion},
    review::{NewReview, Review, UpdateReview},
    tag::{NewTag, NewTaggedItem, Tag, TagListQuery, TaggedItem},
    user::{NewUser, User},
};

pub mod address;
pub mod cart;
pub mod collection;
pub mod customer;
pub mod errors;
pub mod like;
pub mod order;
pub mod product;
pub mod product_image;
pub mod promotion;
pub mod review;
pub mod tag;
pub mod user;

#[cfg(test)]
pub mod mock;

pub use errors::{RepositoryError, RepositoryResult};

/// Escape character for every `LIKE` pattern built by the repository.
pub(crate) const LIKE_ESCAPE: char = '\\';

/// Escape `%`, `_` and [`LIKE_ESCAPE`] so `term` is matched literally.
pub(crate) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for ch in term.chars() {
        if matches!(ch, '%' | '_' | LIKE_ESCAPE) {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    escaped
}

#[derive(Clone)]
/// Diesel-backed repository implementation that wraps an r2d2 pool.
pub struct DieselRepository {
    pool: DbPool, // r2d2::Pool is cheap to clone
}

impl DieselRepository {
    /// Create a new repository using the provided connection pool.
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    fn conn(&self) -> RepositoryResult<DbConnection> {
        Ok(self.pool.get()?)
    }
}

/// Read-only operations over product records.
pub trait ProductReader {
    fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
    fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
}

/// Write operations over product records.
pub trait ProductWriter {
    fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
    /// Insert all products or none of them.
    fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
    fn update_product(&self, product_id: i32, updates: &UpdateProduct)
    -> RepositoryResult<Product>;
    /// Fails with [`RepositoryError::InUse`] while order items reference the product.
    fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
}

pub trait CollectionReader {
    fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
    fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
}

pub trait CollectionWriter {
    fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
    fn update_collection(
        &self,
        collection_id: i32,
        updates: &UpdateCollection,
    ) -> RepositoryResult<Collection>;
    /// Fails with [`RepositoryError::InUse`] while products belong to the collection.
    fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
}

pub trait ReviewReader {
    fn get_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<Option<Review>>;
    fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
}

pub trait ReviewWriter {
    fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
    fn update_review(
        &self,
        product_id: i32,
        review_id: i32,
        updates: &UpdateReview,
    ) -> RepositoryResult<Review>;
    fn delete_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<()>;
}

pub trait PromotionReader {
    fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
    fn list_promotions(&self) -> RepositoryResult<Vec<Promotion>>;
    fn list_product_promotions(&self, product_id: i32) -> RepositoryResult<Vec<Promotion>>;
}

pub trait PromotionWriter {
    fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion>;
    fn update_promotion(
        &self,
        promotion_id: i32,
        updates: &UpdatePromotion,
    ) -> RepositoryResult<Promotion>;
    /// Also drops the promotion from every product it was attached to.
    fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<()>;
    /// Attach a promotion to a product; attaching twice is a no-op.
    ///
    /// Fails with [`RepositoryError::NotFound`] when either record is missing.
    fn attach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()>;
    fn detach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()>;
}

pub trait ProductImageReader {
    fn get_product_image(
        &self,
        product_id: i32,
        image_id: i32,
    ) -> RepositoryResult<Option<ProductImage>>;
    fn list_product_images(&self, product_id: i32) -> RepositoryResult<Vec<ProductImage>>;
}

pub trait ProductImageWriter {
    fn create_product_image(&self, new_image: &NewProductImage) -> RepositoryResult<ProductImage>;
    /// Remove the row and return it so the stored file can be cleaned up.
    fn delete_product_image(&self, product_id: i32, image_id: i32)
    -> RepositoryResult<ProductImage>;
}

pub trait CartReader {
    fn cart_exists(&self, cart_id: &str) -> RepositoryResult<bool>;
    fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>>;
    fn get_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<Option<CartItem>>;
}

pub trait CartWriter {
    fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
    fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()>;
    /// Insert a line or add to the quantity of the existing line for the product.
    fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
    fn update_cart_item_quantity(
        &self,
        cart_id: &str,
        item_id: i32,
        quantity: i32,
    ) -> RepositoryResult<CartItem>;
    fn delete_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()>;
}

pub trait OrderReader {
    fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
    fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
}

pub trait OrderWriter {
    /// Convert a cart into an order in a single transaction.
    ///
    /// Fails with [`RepositoryError::Validation`] when the cart is missing or
    /// empty, or when the user has no customer profile. Nothing is written in
    /// that case.
    fn place_order(&self, checkout: &Checkout) -> RepositoryResult<Order>;
    fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
    fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
}

pub trait CustomerReader {
    fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
    fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Customer>>;
    fn get_customers_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Customer>>;
    fn list_customers(&self, query: CustomerListQuery)
    -> RepositoryResult<(usize, Vec<Customer>)>;
}

pub trait CustomerWriter {
    fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
    fn update_customer(
        &self,
        customer_id: i32,
        updates: &UpdateCustomer,
    ) -> RepositoryResult<Customer>;
}

pub trait AddressReader {
    fn get_address(&self, customer_id: i32, address_id: i32) -> RepositoryResult<Option<Address>>;
    fn list_addresses(&self, customer_id: i32) -> RepositoryResult<Vec<Address>>;
}

pub trait AddressWriter {
    fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
    fn update_address(
        &self,
        customer_id: i32,
        address_id: i32,
        updates: &UpdateAddress,
    ) -> RepositoryResult<Address>;
    fn delete_address(&self, customer_id: i32, address_id: i32) -> RepositoryResult<()>;
}

pub trait UserReader {
    fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
}

pub trait UserWriter {
    fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
}

pub trait TagReader {
    fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
    fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<Tag>)>;
    fn list_tags_for(&self, content_type: ContentType, object_id: i32)
    -> RepositoryResult<Vec<Tag>>;
}

pub trait TagWriter {
    fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
    fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
    /// Attach a tag; attaching twice returns the existing association.
    fn tag_object(&self, new_item: &NewTaggedItem) -> RepositoryResult<TaggedItem>;
    fn untag_object(
        &self,
        tag_id: i32,
        content_type: ContentType,
        object_id: i32,
    ) -> RepositoryResult<()>;
}

pub trait LikeReader {
    fn count_likes(&self, content_type: ContentType, object_id: i32) -> RepositoryResult<usize>;
}

pub trait LikeWriter {
    /// Record a like; liking twice returns the existing record.
    fn like_object(&self, new_like: &NewLikedItem) -> RepositoryResult<LikedItem>;
    fn unlike_object(
        &self,
        user_id: i32,
        content_type: ContentType,
        object_id: i32,
    ) -> RepositoryResult<()>;
}
