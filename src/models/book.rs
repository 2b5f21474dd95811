use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use uuid::Uuid;
use validator::{Validate, ValidationError};

pub const MAX_TITLE_LEN: u64 = 255;
pub const MAX_QUANTITY: u32 = 10_000;
pub const MAX_UNIT_PRICE: i64 = 1_000_000;

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BookCategory {
    Fiction,
    NonFiction,
    Science,
    History,
    Children,
}

impl BookCategory {
    pub const ALL: [BookCategory; 5] = [
        BookCategory::Fiction,
        BookCategory::NonFiction,
        BookCategory::Science,
        BookCategory::History,
        BookCategory::Children,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            BookCategory::Fiction => "Fiction",
            BookCategory::NonFiction => "Non-fiction",
            BookCategory::Science => "Science",
            BookCategory::History => "History",
            BookCategory::Children => "Children",
        }
    }
}

impl std::fmt::Display for BookCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for BookCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .collect::<String>()
            .to_lowercase();

        match normalized.as_str() {
            "fiction" => Ok(BookCategory::Fiction),
            "nonfiction" => Ok(BookCategory::NonFiction),
            "science" => Ok(BookCategory::Science),
            "history" => Ok(BookCategory::History),
            "children" => Ok(BookCategory::Children),
            _ => Err(format!("unknown category '{}'", s.trim())),
        }
    }
}

/// One book entry in the cart. Never mutated once in the cart.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Validate)]
pub struct LineItem {
    pub id: Uuid,

    #[validate(length(min = 1, max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,

    #[validate(custom = "validate_unit_price")]
    pub unit_price: Decimal,

    #[validate(range(min = 1, max = 10000, message = "Quantity must be between 1 and 10000"))]
    pub quantity: u32,

    pub category: BookCategory,

    pub added_at: DateTime<Utc>,
}

fn price_error(code: &'static str, message: &'static str) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(message.into());
    error
}

fn validate_unit_price(price: &Decimal) -> Result<(), ValidationError> {
    if *price <= Decimal::ZERO {
        return Err(price_error("price_not_positive", "Price must be greater than 0"));
    }
    if *price > Decimal::from(MAX_UNIT_PRICE) {
        return Err(price_error("price_too_large", "Price must be at most 1000000"));
    }
    Ok(())
}

impl LineItem {
    pub fn new(title: &str, unit_price: Decimal, quantity: u32, category: BookCategory) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.trim().to_string(),
            unit_price,
            quantity,
            category,
            added_at: Utc::now(),
        }
    }

    pub fn subtotal(&self) -> Decimal {
        self.unit_price * Decimal::from(self.quantity)
    }
}
