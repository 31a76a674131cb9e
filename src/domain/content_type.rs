use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Kinds of records that tags and likes can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentType {
    Product,
    Collection,
    Review,
    Customer,
    Order,
    Cart,
    CartItem,
    Address,
    Promotion,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown content type `{0}`")]
pub struct UnknownContentType(pub String);

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Product => "product",
            ContentType::Collection => "collection",
            ContentType::Review => "review",
            ContentType::Customer => "customer",
            ContentType::Order => "order",
            ContentType::Cart => "cart",
            ContentType::CartItem => "cart_item",
            ContentType::Address => "address",
            ContentType::Promotion => "promotion",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = UnknownContentType;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "product" => Ok(ContentType::Product),
            "collection" => Ok(ContentType::Collection),
            "review" => Ok(ContentType::Review),
            "customer" => Ok(ContentType::Customer),
            "order" => Ok(ContentType::Order),
            "cart" => Ok(ContentType::Cart),
            "cart_item" | "cartitem" => Ok(ContentType::CartItem),
            "address" => Ok(ContentType::Address),
            "promotion" => Ok(ContentType::Promotion),
            _ => Err(UnknownContentType(value.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_names_case_insensitively() {
        assert_eq!("Product".parse(), Ok(ContentType::Product));
        assert_eq!("cartitem".parse(), Ok(ContentType::CartItem));
        assert_eq!(ContentType::CartItem.as_str(), "cart_item");
        assert_eq!("Promotion".parse(), Ok(ContentType::Promotion));
        assert_eq!("address".parse(), Ok(ContentType::Address));
    }

    #[test]
    fn rejects_unknown_names() {
        let err = "planet".parse::<ContentType>().unwrap_err();
        assert_eq!(err, UnknownContentType("planet".to_string()));
    }
}
