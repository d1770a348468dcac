//! saucedemo-e2e: Page Object end-to-end suite for the SauceDemo storefront
//!
//! Page objects wrap one storefront screen each and expose its actions and
//! load checks; the integration tests under `tests/` compose them into user
//! journeys. Browser automation, waiting and retrying of individual
//! interactions are left to [`playwright_rs`].
//!
//! # Examples
//!
//! ## A scenario
//!
//! ```ignore
//! use saucedemo_e2e::fixtures::{products, users};
//! use saucedemo_e2e::harness::run_scenario;
//! use saucedemo_e2e::pages::{InventoryPage, LoginPage};
//!
//! #[tokio::test]
//! async fn standard_user_can_add_to_cart() -> anyhow::Result<()> {
//!     run_scenario("cart: add one item", |session| async move {
//!         let login = LoginPage::new(&session);
//!         let inventory = InventoryPage::new(&session);
//!
//!         login.open().await?;
//!         login.login_as(&users().standard).await?;
//!         inventory.expect_loaded().await?;
//!
//!         inventory.add_to_cart(&products().backpack.name).await?;
//!         inventory.menu.expect_cart_badge_count(1).await
//!     })
//!     .await?;
//!     Ok(())
//! }
//! ```
//!
//! ## Configuration
//!
//! See [`config`] for the environment variables. Locally the suite runs on
//! Chromium without retries; with `CI` set it runs on Chromium, Firefox and
//! WebKit and re-runs a failed scenario twice.

pub mod assertions;
pub mod components;
pub mod config;
mod error;
pub mod fixtures;
pub mod harness;
pub mod pages;
pub mod report;
pub mod selector;
pub mod session;
pub mod support;

// Re-export error types
pub use error::{Error, PageLoadCheck, Result, SortDirection};

pub use config::{BrowserKind, SuiteConfig};
pub use selector::Target;
pub use session::Session;
