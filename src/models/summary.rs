use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::book::LineItem;

/// Quantity bracket of the whole cart.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum DiscountTier {
    #[default]
    None,
    Green,
    Blue,
    Gold,
}

impl DiscountTier {
    pub const ALL: [DiscountTier; 4] = [
        DiscountTier::None,
        DiscountTier::Green,
        DiscountTier::Blue,
        DiscountTier::Gold,
    ];

    pub fn for_quantity(total_quantity: u64) -> Self {
        match total_quantity {
            11.. => DiscountTier::Gold,
            6..=10 => DiscountTier::Blue,
            3..=5 => DiscountTier::Green,
            _ => DiscountTier::None,
        }
    }

    pub fn percent(&self) -> u8 {
        match self {
            DiscountTier::None => 0,
            DiscountTier::Green => 10,
            DiscountTier::Blue => 15,
            DiscountTier::Gold => 20,
        }
    }

    /// Inclusive quantity range covered by the tier, `None` as upper bound meaning open.
    pub fn quantity_range(&self) -> (u64, Option<u64>) {
        match self {
            DiscountTier::None => (0, Some(2)),
            DiscountTier::Green => (3, Some(5)),
            DiscountTier::Blue => (6, Some(10)),
            DiscountTier::Gold => (11, None),
        }
    }
}

impl std::fmt::Display for DiscountTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}%", self.percent())
    }
}

/// Derived totals of a cart. All zero when hidden or reset.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct CartSummary {
    pub total_quantity: u64,
    pub subtotal: Decimal,
    pub tier: DiscountTier,
    pub discount_amount: Decimal,
    pub total: Decimal,
}

impl CartSummary {
    pub fn discount_percent(&self) -> u8 {
        self.tier.percent()
    }

    pub fn is_zero(&self) -> bool {
        *self == CartSummary::default()
    }
}

/// Snapshot of a priced cart, suitable for export.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Purchase {
    pub books: Vec<LineItem>,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub percent: u8,
    pub total: Decimal,
}

impl Purchase {
    pub fn new(books: &[LineItem], summary: &CartSummary) -> Self {
        Self {
            books: books.to_vec(),
            subtotal: summary.subtotal,
            discount: summary.discount_amount,
            percent: summary.discount_percent(),
            total: summary.total,
        }
    }
}
