use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::models::{BookCategory, LineItem};
use crate::services::CartError;

/// Raw add-book inputs as typed by the user.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct BookForm {
    pub title: String,
    pub price: String,
    pub quantity: String,
    pub category: Option<BookCategory>,
}

impl BookForm {
    pub fn new(
        title: impl Into<String>,
        price: impl Into<String>,
        quantity: impl Into<String>,
        category: Option<BookCategory>,
    ) -> Self {
        Self {
            title: title.into(),
            price: price.into(),
            quantity: quantity.into(),
            category,
        }
    }

    /// Clear the text inputs, keeping the last selected category.
    pub fn clear_inputs(&mut self) {
        self.title.clear();
        self.price.clear();
        self.quantity.clear();
    }

    pub fn reset(&mut self) {
        self.clear_inputs();
        self.category = None;
    }
}

fn parse_price(raw: &str) -> Option<Decimal> {
    // Decimal::from_str takes `_` as a digit separator.
    if raw.contains('_') {
        return None;
    }
    Decimal::from_str(raw.trim())
        .ok()
        .filter(|price| *price > Decimal::ZERO)
}

fn parse_quantity(raw: &str) -> Option<u32> {
    raw.trim().parse::<u32>().ok().filter(|quantity| *quantity > 0)
}

/// Turn a form into a line item. Only the first failing check is reported:
/// title, price, quantity, category, then the item's schema limits.
pub fn validate_form(form: &BookForm) -> Result<LineItem, CartError> {
    if form.title.trim().is_empty() {
        return Err(CartError::BlankTitle);
    }
    let unit_price = parse_price(&form.price).ok_or(CartError::InvalidPrice)?;
    let quantity = parse_quantity(&form.quantity).ok_or(CartError::InvalidQuantity)?;
    let category = form.category.ok_or(CartError::MissingCategory)?;

    let item = LineItem::new(&form.title, unit_price, quantity, category);
    item.validate()?;
    Ok(item)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn valid_form() -> BookForm {
        BookForm::new("Dune", "45.00", "2", Some(BookCategory::Fiction))
    }

    #[test]
    fn test_valid_form() {
        let item = validate_form(&valid_form()).unwrap();
        assert_eq!(item.title, "Dune");
        assert_eq!(item.unit_price, dec!(45.00));
        assert_eq!(item.quantity, 2);
        assert_eq!(item.category, BookCategory::Fiction);
    }

    #[test]
    fn test_blank_title_wins_over_everything() {
        let form = BookForm::new("   ", "abc", "-1", None);
        assert!(matches!(validate_form(&form), Err(CartError::BlankTitle)));
    }

    #[test]
    fn test_price_checked_before_quantity() {
        for price in ["", "abc", "0", "-3.5", "0.00", "1_000", "_5"] {
            let form = BookForm::new("Dune", price, "0", None);
            assert!(
                matches!(validate_form(&form), Err(CartError::InvalidPrice)),
                "price {:?}",
                price
            );
        }
    }

    #[test]
    fn test_quantity_checked_before_category() {
        for quantity in ["", "two", "0", "-1", "1.5"] {
            let form = BookForm::new("Dune", "10", quantity, None);
            assert!(
                matches!(validate_form(&form), Err(CartError::InvalidQuantity)),
                "quantity {:?}",
                quantity
            );
        }
    }

    #[test]
    fn test_missing_category() {
        let form = BookForm::new("Dune", "10", "1", None);
        assert!(matches!(validate_form(&form), Err(CartError::MissingCategory)));
    }

    #[test]
    fn test_schema_limits_reported_last() {
        let form = BookForm::new("Dune", "10", "20000", Some(BookCategory::Fiction));
        assert!(matches!(validate_form(&form), Err(CartError::Validation(_))));
    }

    #[test]
    fn test_inputs_are_trimmed() {
        let form = BookForm::new(" Dune ", " 45.5 ", " 3 ", Some(BookCategory::Science));
        let item = validate_form(&form).unwrap();
        assert_eq!(item.title, "Dune");
        assert_eq!(item.unit_price, dec!(45.5));
        assert_eq!(item.quantity, 3);
    }

    #[test]
    fn test_clear_inputs_keeps_category() {
        let mut form = valid_form();
        form.clear_inputs();
        assert_eq!(form, BookForm::new("", "", "", Some(BookCategory::Fiction)));

        form.reset();
        assert_eq!(form, BookForm::default());
    }
}
