//! Page objects, one per storefront screen.
//!
//! Each page object holds a [`Session`](crate::session::Session) and the
//! [`Target`](crate::selector::Target)s of its screen. Its `expect_*_loaded`
//! method is the guard for entering that screen; the checkout journey is
//! Cart → Information → Overview → Complete, with Information → Cart on
//! cancel.

pub mod cart;
pub mod checkout;
pub mod inventory;
pub mod login;

pub use cart::{BoundingBox, CartPage};
pub use checkout::{CheckoutPage, PriceSummary};
pub use inventory::{InventoryPage, SortOrder};
pub use login::LoginPage;
