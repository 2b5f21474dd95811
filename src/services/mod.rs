pub mod cart_service;
pub mod pricing;
pub mod snackbar;
pub mod validation;

pub use cart_service::*;
pub use snackbar::SnackbarHost;
pub use validation::{validate_form, BookForm};
