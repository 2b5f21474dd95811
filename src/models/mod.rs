pub mod book;
pub mod dialog;
pub mod notice;
pub mod summary;

pub use book::{BookCategory, LineItem};
pub use dialog::{ConfirmAction, Dialog};
pub use notice::Notice;
pub use summary::{CartSummary, DiscountTier, Purchase};
