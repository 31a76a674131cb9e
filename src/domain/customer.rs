use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::pagination::Pagination;

/// Loyalty tier of a customer.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum Membership {
    #[default]
    Bronze,
    Silver,
    Gold,
}

impl Membership {
    pub fn as_str(&self) -> &'static str {
        match self {
            Membership::Bronze => "bronze",
            Membership::Silver => "silver",
            Membership::Gold => "gold",
        }
    }
}

impl From<&str> for Membership {
    /// Unknown values fall back to [`Membership::Bronze`].
    fn from(value: &str) -> Self {
        match value {
            "silver" => Membership::Silver,
            "gold" => Membership::Gold,
            _ => Membership::Bronze,
        }
    }
}

impl FromStr for Membership {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "bronze" | "b" => Ok(Membership::Bronze),
            "silver" | "s" => Ok(Membership::Silver),
            "gold" | "g" => Ok(Membership::Gold),
            other => Err(format!("unknown membership `{other}`")),
        }
    }
}

/// Customer profile, one per user account.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Customer {
    pub id: i32,
    pub user_id: i32,
    /// Copied from the linked user for display.
    pub first_name: String,
    /// Copied from the linked user for display.
    pub last_name: String,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
    /// Number of orders placed, filled in by the repository.
    pub orders_count: i64,
}

impl Customer {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
            .trim()
            .to_string()
    }
}

/// Payload required to insert a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCustomer {
    pub user_id: i32,
    pub phone: String,
    pub birth_date: Option<NaiveDate>,
    pub membership: Membership,
}

impl NewCustomer {
    #[must_use]
    pub fn new(user_id: i32, phone: impl Into<String>) -> Self {
        Self {
            user_id,
            phone: phone.into(),
            birth_date: None,
            membership: Membership::default(),
        }
    }

    #[must_use]
    pub fn with_birth_date(mut self, birth_date: NaiveDate) -> Self {
        self.birth_date = Some(birth_date);
        self
    }

    #[must_use]
    pub fn with_membership(mut self, membership: Membership) -> Self {
        self.membership = membership;
        self
    }
}

/// Patch data applied when updating a customer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpdateCustomer {
    pub phone: Option<String>,
    /// `Some(None)` clears the birth date.
    pub birth_date: Option<Option<NaiveDate>>,
    pub membership: Option<Membership>,
}

/// Query definition used to list customers.
#[derive(Debug, Clone, Default)]
pub struct CustomerListQuery {
    /// Case-insensitive prefix of the first or last name.
    pub search: Option<String>,
    pub pagination: Option<Pagination>,
}

impl CustomerListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn search(mut self, term: impl Into<String>) -> Self {
        self.search = Some(term.into());
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}
