use console::{style, StyledObject};
use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{
    settings::{Alignment, Style},
    Table, Tabled,
};

use crate::models::{BookCategory, CartSummary, Dialog, DiscountTier, LineItem};

#[derive(Tabled)]
struct LineItemRow {
    #[tabled(rename = "#")]
    position: usize,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Price")]
    price: String,
    #[tabled(rename = "Qty")]
    quantity: u32,
    #[tabled(rename = "Subtotal")]
    subtotal: String,
}

#[derive(Tabled)]
struct TierRow {
    #[tabled(rename = "Books in cart")]
    books: String,
    #[tabled(rename = "Discount")]
    discount: String,
}

/// Round half away from zero to cents.
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

pub fn format_money(currency: &str, amount: Decimal) -> String {
    format!("{} {:.2}", currency, round_money(amount))
}

fn truncate_title(title: &str) -> String {
    if title.chars().count() > 30 {
        let head: String = title.chars().take(27).collect();
        format!("{}...", head)
    } else {
        title.to_string()
    }
}

pub fn format_cart_table(items: &[LineItem], currency: &str) -> String {
    if items.is_empty() {
        return String::new();
    }

    let rows: Vec<LineItemRow> = items
        .iter()
        .enumerate()
        .map(|(index, item)| LineItemRow {
            position: index + 1,
            title: truncate_title(&item.title),
            category: item.category.display_name().to_string(),
            price: format_money(currency, item.unit_price),
            quantity: item.quantity,
            subtotal: format_money(currency, item.subtotal()),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_tier_table() -> String {
    let rows: Vec<TierRow> = DiscountTier::ALL
        .iter()
        .rev()
        .map(|tier| {
            let books = match tier.quantity_range() {
                (low, Some(high)) => format!("{}-{}", low, high),
                (low, None) => format!("{} or more", low),
            };
            TierRow {
                books,
                discount: format!("{}%", tier.percent()),
            }
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded()).with(Alignment::left());

    table.to_string()
}

pub fn format_categories() -> String {
    BookCategory::ALL
        .iter()
        .map(|category| format!("  - {}", category.display_name()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn tier_style<D>(tier: DiscountTier, value: D) -> StyledObject<D> {
    match tier {
        DiscountTier::Gold => style(value).yellow().bold(),
        DiscountTier::Blue => style(value).blue(),
        DiscountTier::Green => style(value).green(),
        DiscountTier::None => style(value).dim(),
    }
}

pub fn format_summary(summary: &CartSummary, currency: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}\n", style("PURCHASE SUMMARY").bold().cyan()));
    output.push_str(&format!(
        "{}: {}\n",
        style("Subtotal").bold(),
        format_money(currency, summary.subtotal)
    ));
    output.push_str(&format!(
        "{} ({}): - {}\n",
        style("Discount").bold(),
        tier_style(summary.tier, format!("{}%", summary.discount_percent())),
        format_money(currency, summary.discount_amount)
    ));
    output.push_str(&format!(
        "{}: {}\n",
        style("TOTAL DUE").bold(),
        style(format_money(currency, summary.total)).green().bold()
    ));

    output
}

pub fn format_dialog(dialog: &Dialog) -> Option<String> {
    match (dialog.title(), dialog.message()) {
        (Some(title), Some(message)) => {
            let title = match dialog {
                Dialog::Informational { .. } => style(title).red().bold(),
                _ => style(title).yellow().bold(),
            };
            Some(format!("{}: {}", title, message))
        }
        _ => None,
    }
}
