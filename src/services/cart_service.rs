use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};
use uuid::Uuid;
use validator::ValidationErrors;

use crate::{
    models::{BookCategory, CartSummary, ConfirmAction, Dialog, LineItem, Notice, Purchase},
    services::{
        pricing,
        validation::{validate_form, BookForm},
    },
};

#[derive(Error, Debug)]
pub enum CartError {
    #[error("Please enter the book title")]
    BlankTitle,

    #[error("The price must be greater than 0")]
    InvalidPrice,

    #[error("The quantity must be greater than 0")]
    InvalidQuantity,

    #[error("Please select a category")]
    MissingCategory,

    #[error("There must be at least 1 book in the cart")]
    EmptyCart,

    #[error("Book {0} is not in the cart")]
    ItemNotFound(Uuid),

    #[error("{}", validation_message(.0))]
    Validation(#[from] ValidationErrors),
}

/// Human-readable messages of every failed field, ordered by field name.
fn validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by_key(|(field, _)| *field);

    fields
        .into_iter()
        .flat_map(|(field, errors)| {
            errors.iter().map(move |error| match &error.message {
                Some(message) => message.to_string(),
                None => format!("{} is invalid ({})", field, error.code),
            })
        })
        .collect::<Vec<_>>()
        .join("; ")
}

/// Everything the front end can ask of a session.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub enum CartEvent {
    EditTitle(String),
    EditPrice(String),
    EditQuantity(String),
    SelectCategory(BookCategory),
    AddItem,
    CalculateTotal,
    RequestRemoveItem(Uuid),
    RequestClearCart,
    Confirm,
    Dismiss,
}

/// Complete state of one cart screen. Rendering reads it, `dispatch` writes it.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct CartSession {
    pub form: BookForm,
    pub items: Vec<LineItem>,
    pub summary: CartSummary,
    pub summary_visible: bool,
    pub dialog: Dialog,
}

impl CartSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply one user event. Failures land in `self.dialog`; successes may
    /// return a notice for the snackbar.
    pub fn dispatch(&mut self, event: CartEvent) -> Option<Notice> {
        debug!("Dispatching cart event: {:?}", event);

        let result = match event {
            CartEvent::EditTitle(title) => {
                self.form.title = title;
                Ok(None)
            }
            CartEvent::EditPrice(price) => {
                self.form.price = price;
                Ok(None)
            }
            CartEvent::EditQuantity(quantity) => {
                self.form.quantity = quantity;
                Ok(None)
            }
            CartEvent::SelectCategory(category) => {
                self.form.category = Some(category);
                Ok(None)
            }
            CartEvent::AddItem => self.add_item().map(Some),
            CartEvent::CalculateTotal => self.calculate_total().map(Some),
            CartEvent::RequestRemoveItem(id) => self.request_remove_item(id).map(|_| None),
            CartEvent::RequestClearCart => {
                self.request_clear_cart();
                Ok(None)
            }
            CartEvent::Confirm => self.confirm(),
            CartEvent::Dismiss => {
                self.dialog = Dialog::Hidden;
                Ok(None)
            }
        };

        match result {
            Ok(notice) => notice,
            Err(e) => {
                warn!("Cart action rejected: {}", e);
                self.dialog = Dialog::error(e.to_string());
                None
            }
        }
    }

    pub fn add_item(&mut self) -> Result<Notice, CartError> {
        let item = validate_form(&self.form)?;

        info!(
            "Adding '{}' x{} at {} to cart",
            item.title, item.quantity, item.unit_price
        );
        self.items.push(item);
        self.form.clear_inputs();
        Ok(Notice::BookAdded)
    }

    pub fn calculate_total(&mut self) -> Result<Notice, CartError> {
        if self.items.is_empty() {
            return Err(CartError::EmptyCart);
        }

        self.summary = pricing::summarize(&self.items);
        self.summary_visible = true;

        info!(
            "Cart priced: {} books, subtotal {}, discount {}%, total {}",
            self.summary.total_quantity,
            self.summary.subtotal,
            self.summary.discount_percent(),
            self.summary.total
        );
        Ok(Notice::Priced {
            tier: self.summary.tier,
            saved: self.summary.discount_amount,
        })
    }

    pub fn request_remove_item(&mut self, id: Uuid) -> Result<(), CartError> {
        let item = self
            .items
            .iter()
            .find(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;

        self.dialog = Dialog::confirm(
            format!("Remove '{}' from the cart?", item.title),
            ConfirmAction::RemoveItem(id),
        );
        Ok(())
    }

    pub fn request_clear_cart(&mut self) {
        self.dialog = Dialog::confirm(
            "Are you sure you want to clear the cart?",
            ConfirmAction::ClearCart,
        );
    }

    /// Run the action bound to the open dialog and close it.
    pub fn confirm(&mut self) -> Result<Option<Notice>, CartError> {
        let action = self.dialog.pending_action();
        self.dialog = Dialog::Hidden;

        match action {
            ConfirmAction::NoAction => Ok(None),
            ConfirmAction::RemoveItem(id) => self.remove_item(id).map(Some),
            ConfirmAction::ClearCart => Ok(Some(self.clear_cart())),
        }
    }

    pub fn remove_item(&mut self, id: Uuid) -> Result<Notice, CartError> {
        let position = self
            .items
            .iter()
            .position(|item| item.id == id)
            .ok_or(CartError::ItemNotFound(id))?;
        let removed = self.items.remove(position);
        info!("Removed '{}' from cart", removed.title);

        if !self.items.is_empty() && self.summary_visible {
            self.summary = pricing::summarize(&self.items);
        } else if self.items.is_empty() {
            self.hide_summary();
        }
        Ok(Notice::BookRemoved)
    }

    pub fn clear_cart(&mut self) -> Notice {
        self.items.clear();
        self.form.reset();
        self.hide_summary();
        info!("Cart cleared");
        Notice::CartCleared
    }

    pub fn total_quantity(&self) -> u64 {
        pricing::total_quantity(&self.items)
    }

    /// The priced cart, once a summary is on screen.
    pub fn purchase(&self) -> Option<Purchase> {
        self.summary_visible
            .then(|| Purchase::new(&self.items, &self.summary))
    }

    fn hide_summary(&mut self) {
        self.summary = CartSummary::default();
        self.summary_visible = false;
    }
}
