pub mod address;
pub mod cart;
pub mod collection;
pub mod customer;
pub mod like;
pub mod order;
pub mod product;
pub mod product_image;
pub mod promotion;
pub mod review;
pub mod tag;
pub mod user;
