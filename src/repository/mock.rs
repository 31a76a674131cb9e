use mockall::mock;

use super::{
    AddressReader, AddressWriter, CartReader, CartWriter, CollectionReader, CollectionWriter,
    CustomerReader, CustomerWriter, LikeReader, LikeWriter, OrderReader, OrderWriter,
    ProductImageReader, ProductImageWriter, ProductReader, ProductWriter, PromotionReader,
    PromotionWriter, RepositoryResult, ReviewReader, ReviewWriter, TagReader, TagWriter,
    UserReader, UserWriter,
};
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

mock! {
    pub Store {}

    impl ProductReader for Store {
        fn get_product_by_id(&self, id: i32) -> RepositoryResult<Option<Product>>;
        fn list_products(&self, query: ProductListQuery) -> RepositoryResult<(usize, Vec<Product>)>;
    }

    impl ProductWriter for Store {
        fn create_product(&self, new_product: &NewProduct) -> RepositoryResult<Product>;
        fn create_products(&self, new_products: &[NewProduct]) -> RepositoryResult<usize>;
        fn update_product(&self, product_id: i32, updates: &UpdateProduct) -> RepositoryResult<Product>;
        fn delete_product(&self, product_id: i32) -> RepositoryResult<()>;
    }

    impl CollectionReader for Store {
        fn get_collection_by_id(&self, id: i32) -> RepositoryResult<Option<Collection>>;
        fn list_collections(&self) -> RepositoryResult<Vec<Collection>>;
    }

    impl CollectionWriter for Store {
        fn create_collection(&self, new_collection: &NewCollection) -> RepositoryResult<Collection>;
        fn update_collection(&self, collection_id: i32, updates: &UpdateCollection) -> RepositoryResult<Collection>;
        fn delete_collection(&self, collection_id: i32) -> RepositoryResult<()>;
    }

    impl ReviewReader for Store {
        fn get_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<Option<Review>>;
        fn list_reviews(&self, product_id: i32) -> RepositoryResult<Vec<Review>>;
    }

    impl ReviewWriter for Store {
        fn create_review(&self, new_review: &NewReview) -> RepositoryResult<Review>;
        fn update_review(&self, product_id: i32, review_id: i32, updates: &UpdateReview) -> RepositoryResult<Review>;
        fn delete_review(&self, product_id: i32, review_id: i32) -> RepositoryResult<()>;
    }

    impl PromotionReader for Store {
        fn get_promotion_by_id(&self, id: i32) -> RepositoryResult<Option<Promotion>>;
        fn list_promotions(&self) -> RepositoryResult<Vec<Promotion>>;
        fn list_product_promotions(&self, product_id: i32) -> RepositoryResult<Vec<Promotion>>;
    }

    impl PromotionWriter for Store {
        fn create_promotion(&self, new_promotion: &NewPromotion) -> RepositoryResult<Promotion>;
        fn update_promotion(&self, promotion_id: i32, updates: &UpdatePromotion) -> RepositoryResult<Promotion>;
        fn delete_promotion(&self, promotion_id: i32) -> RepositoryResult<()>;
        fn attach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()>;
        fn detach_promotion(&self, product_id: i32, promotion_id: i32) -> RepositoryResult<()>;
    }

    impl ProductImageReader for Store {
        fn get_product_image(&self, product_id: i32, image_id: i32) -> RepositoryResult<Option<ProductImage>>;
        fn list_product_images(&self, product_id: i32) -> RepositoryResult<Vec<ProductImage>>;
    }

    impl ProductImageWriter for Store {
        fn create_product_image(&self, new_image: &NewProductImage) -> RepositoryResult<ProductImage>;
        fn delete_product_image(&self, product_id: i32, image_id: i32) -> RepositoryResult<ProductImage>;
    }

    impl CartReader for Store {
        fn cart_exists(&self, cart_id: &str) -> RepositoryResult<bool>;
        fn get_cart(&self, cart_id: &str) -> RepositoryResult<Option<Cart>>;
        fn get_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<Option<CartItem>>;
    }

    impl CartWriter for Store {
        fn create_cart(&self, new_cart: &NewCart) -> RepositoryResult<Cart>;
        fn delete_cart(&self, cart_id: &str) -> RepositoryResult<()>;
        fn add_cart_item(&self, new_item: &NewCartItem) -> RepositoryResult<CartItem>;
        fn update_cart_item_quantity(&self, cart_id: &str, item_id: i32, quantity: i32) -> RepositoryResult<CartItem>;
        fn delete_cart_item(&self, cart_id: &str, item_id: i32) -> RepositoryResult<()>;
    }

    impl OrderReader for Store {
        fn get_order_by_id(&self, id: i32) -> RepositoryResult<Option<Order>>;
        fn list_orders(&self, query: OrderListQuery) -> RepositoryResult<(usize, Vec<Order>)>;
    }

    impl OrderWriter for Store {
        fn place_order(&self, checkout: &Checkout) -> RepositoryResult<Order>;
        fn update_order(&self, order_id: i32, updates: &UpdateOrder) -> RepositoryResult<Order>;
        fn delete_order(&self, order_id: i32) -> RepositoryResult<()>;
    }

    impl CustomerReader for Store {
        fn get_customer_by_id(&self, id: i32) -> RepositoryResult<Option<Customer>>;
        fn get_customer_by_user_id(&self, user_id: i32) -> RepositoryResult<Option<Customer>>;
        fn get_customers_by_ids(&self, ids: &[i32]) -> RepositoryResult<Vec<Customer>>;
        fn list_customers(&self, query: CustomerListQuery) -> RepositoryResult<(usize, Vec<Customer>)>;
    }

    impl CustomerWriter for Store {
        fn create_customer(&self, new_customer: &NewCustomer) -> RepositoryResult<Customer>;
        fn update_customer(&self, customer_id: i32, updates: &UpdateCustomer) -> RepositoryResult<Customer>;
    }

    impl AddressReader for Store {
        fn get_address(&self, customer_id: i32, address_id: i32) -> RepositoryResult<Option<Address>>;
        fn list_addresses(&self, customer_id: i32) -> RepositoryResult<Vec<Address>>;
    }

    impl AddressWriter for Store {
        fn create_address(&self, new_address: &NewAddress) -> RepositoryResult<Address>;
        fn update_address(&self, customer_id: i32, address_id: i32, updates: &UpdateAddress) -> RepositoryResult<Address>;
        fn delete_address(&self, customer_id: i32, address_id: i32) -> RepositoryResult<()>;
    }

    impl UserReader for Store {
        fn get_user_by_id(&self, id: i32) -> RepositoryResult<Option<User>>;
    }

    impl UserWriter for Store {
        fn create_user(&self, new_user: &NewUser) -> RepositoryResult<User>;
    }

    impl TagReader for Store {
        fn get_tag_by_id(&self, id: i32) -> RepositoryResult<Option<Tag>>;
        fn list_tags(&self, query: TagListQuery) -> RepositoryResult<(usize, Vec<Tag>)>;
        fn list_tags_for(&self, content_type: ContentType, object_id: i32) -> RepositoryResult<Vec<Tag>>;
    }

    impl TagWriter for Store {
        fn create_tag(&self, new_tag: &NewTag) -> RepositoryResult<Tag>;
        fn delete_tag(&self, tag_id: i32) -> RepositoryResult<()>;
        fn tag_object(&self, new_item: &NewTaggedItem) -> RepositoryResult<TaggedItem>;
        fn untag_object(&self, tag_id: i32, content_type: ContentType, object_id: i32) -> RepositoryResult<()>;
    }

    impl LikeReader for Store {
        fn count_likes(&self, content_type: ContentType, object_id: i32) -> RepositoryResult<usize>;
    }

    impl LikeWriter for Store {
        fn like_object(&self, new_like: &NewLikedItem) -> RepositoryResult<LikedItem>;
        fn unlike_object(&self, user_id: i32, content_type: ContentType, object_id: i32) -> RepositoryResult<()>;
    }
}
