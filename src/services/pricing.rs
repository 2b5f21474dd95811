use rust_decimal::Decimal;

use crate::models::{CartSummary, DiscountTier, LineItem};

/// Discount percentage for a cart holding `total_quantity` books.
pub fn discount_percent(total_quantity: u64) -> u8 {
    DiscountTier::for_quantity(total_quantity).percent()
}

pub fn total_quantity(items: &[LineItem]) -> u64 {
    items.iter().map(|item| u64::from(item.quantity)).sum()
}

pub fn subtotal(items: &[LineItem]) -> Decimal {
    items.iter().map(LineItem::subtotal).sum()
}

/// Price a cart. An empty slice yields the zero summary; emptiness is the
/// caller's business rule, not a pricing concern.
pub fn summarize(items: &[LineItem]) -> CartSummary {
    let total_quantity = total_quantity(items);
    let subtotal = subtotal(items);
    let tier = DiscountTier::for_quantity(total_quantity);
    let discount_amount = subtotal * Decimal::from(tier.percent()) / Decimal::ONE_HUNDRED;

    CartSummary {
        total_quantity,
        subtotal,
        tier,
        discount_amount,
        total: subtotal - discount_amount,
    }
}
