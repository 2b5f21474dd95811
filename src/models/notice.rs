use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::summary::DiscountTier;
use crate::utils::formatting::format_money;

/// Transient notification raised by a successful cart operation.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum Notice {
    BookAdded,
    Priced { tier: DiscountTier, saved: Decimal },
    BookRemoved,
    CartCleared,
}

impl Notice {
    pub fn message(&self, currency: &str) -> String {
        match self {
            Notice::BookAdded => "Book added to cart".to_string(),
            Notice::Priced { tier, saved } => match tier {
                DiscountTier::None => "No discount applied".to_string(),
                DiscountTier::Green => {
                    format!("Great! You saved {}", format_money(currency, *saved))
                }
                DiscountTier::Blue => {
                    format!("Excellent! You saved {}", format_money(currency, *saved))
                }
                DiscountTier::Gold => {
                    format!("Amazing! You saved {}", format_money(currency, *saved))
                }
            },
            Notice::BookRemoved => "Book removed from cart".to_string(),
            Notice::CartCleared => "Cart cleared".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_copy_differs_per_tier() {
        let messages: Vec<String> = DiscountTier::ALL
            .iter()
            .map(|tier| {
                Notice::Priced {
                    tier: *tier,
                    saved: dec!(15),
                }
                .message("S/.")
            })
            .collect();

        assert_eq!(messages[0], "No discount applied");
        assert_eq!(messages[1], "Great! You saved S/. 15.00");
        assert_eq!(messages[2], "Excellent! You saved S/. 15.00");
        assert_eq!(messages[3], "Amazing! You saved S/. 15.00");
    }
}
