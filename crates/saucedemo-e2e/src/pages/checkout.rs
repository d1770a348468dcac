// CheckoutPage - information, overview and completion steps
//
// One page object covers the three checkout screens since they share the
// title element and header:
//
//   /checkout-step-one.html   Checkout: Your Information
//   /checkout-step-two.html   Checkout: Overview
//   /checkout-complete.html   Checkout: Complete!

use crate::components::Menu;
use crate::error::Result;
use crate::fixtures::CheckoutInfo;
use crate::selector::Target;
use crate::session::Session;
use crate::support::{PageLoad, expect_page_loaded, parse_price};
use regex::Regex;

/// Amounts shown in the overview price summary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceSummary {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl PriceSummary {
    /// `subtotal + tax == total` to the cent.
    pub fn is_consistent(&self) -> bool {
        ((self.subtotal + self.tax) - self.total).abs() < 0.005
    }
}

#[derive(Debug, Clone)]
pub struct CheckoutPage {
    session: Session,
    title: Target,

    // Information step
    first_name: Target,
    last_name: Target,
    postal_code: Target,
    continue_button: Target,
    cancel_button: Target,
    error: Target,

    // Overview
    cart_items: Target,
    item_names: Target,
    finish_button: Target,
    summary_subtotal: Target,
    summary_tax: Target,
    summary_total: Target,

    // Complete
    complete_header: Target,
    back_home_button: Target,

    pub menu: Menu,
}

impl CheckoutPage {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            title: Target::css(".title"),

            first_name: Target::test_id("firstName"),
            last_name: Target::test_id("lastName"),
            postal_code: Target::test_id("postalCode"),
            continue_button: Target::test_id("continue"),
            cancel_button: Target::test_id("cancel"),
            error: Target::test_id("error"),

            cart_items: Target::css(".cart_item"),
            item_names: Target::css(".inventory_item_name"),
            finish_button: Target::test_id("finish"),
            summary_subtotal: Target::css(".summary_subtotal_label"),
            summary_tax: Target::css(".summary_tax_label"),
            summary_total: Target::css(".summary_total_label"),

            complete_header: Target::css(".complete-header"),
            back_home_button: Target::test_id("back-to-products"),

            menu: Menu::new(session),
        }
    }

    fn load(&self, url: &str, expected_title: &str, root: Target) -> PageLoad {
        PageLoad {
            url: Regex::new(url).expect("static pattern").into(),
            title: self.title.clone(),
            expected_title: expected_title.to_string(),
            root,
        }
    }

    pub async fn expect_info_loaded(&self) -> Result<()> {
        let load = self.load(
            r"/checkout-step-one\.html",
            "Checkout: Your Information",
            self.first_name.clone(),
        );
        expect_page_loaded(&self.session, &load).await
    }

    pub async fn fill_information(&self, info: &CheckoutInfo) -> Result<()> {
        self.session.fill(&self.first_name, &info.first_name).await?;
        self.session.fill(&self.last_name, &info.last_name).await?;
        self.session.fill(&self.postal_code, &info.postal_code).await
    }

    /// What the information form currently holds.
    pub async fn entered_information(&self) -> Result<CheckoutInfo> {
        Ok(CheckoutInfo {
            first_name: self.session.input_value(&self.first_name).await?,
            last_name: self.session.input_value(&self.last_name).await?,
            postal_code: self.session.input_value(&self.postal_code).await?,
        })
    }

    /// Submits the information step.
    pub async fn continue_checkout(&self) -> Result<()> {
        self.session.expect_visible(&self.continue_button).await?;
        self.session.click(&self.continue_button).await
    }

    /// Leaves the information step back to the cart.
    pub async fn cancel(&self) -> Result<()> {
        self.session.expect_visible(&self.cancel_button).await?;
        self.session.click(&self.cancel_button).await
    }

    pub async fn expect_error_contains(&self, text: &str) -> Result<()> {
        self.session.expect_visible(&self.error).await?;
        self.session.expect_contains_text(&self.error, text).await
    }

    pub async fn expect_last_name_value(&self, value: &str) -> Result<()> {
        self.session.expect_value(&self.last_name, value).await
    }

    pub async fn expect_overview_loaded(&self) -> Result<()> {
        let load = self.load(
            r"/checkout-step-two\.html",
            "Checkout: Overview",
            self.cart_items.first(),
        );
        expect_page_loaded(&self.session, &load).await
    }

    pub async fn expect_overview_item_visible(&self, product_name: &str) -> Result<()> {
        self.session
            .expect_visible(&self.item_names.with_text(product_name))
            .await
    }

    pub async fn expect_price_summary_visible(&self) -> Result<()> {
        self.session.expect_visible(&self.summary_subtotal).await?;
        self.session.expect_visible(&self.summary_tax).await?;
        self.session.expect_visible(&self.summary_total).await
    }

    /// Reads and parses the overview price summary.
    pub async fn price_summary(&self) -> Result<PriceSummary> {
        Ok(PriceSummary {
            subtotal: self.read_price(&self.summary_subtotal).await?,
            tax: self.read_price(&self.summary_tax).await?,
            total: self.read_price(&self.summary_total).await?,
        })
    }

    async fn read_price(&self, target: &Target) -> Result<f64> {
        let text = self.session.locate(target).await.inner_text().await?;
        parse_price(&text)
    }

    pub async fn finish(&self) -> Result<()> {
        self.session.expect_visible(&self.finish_button).await?;
        self.session.click(&self.finish_button).await
    }

    /// Completion screen showing the thank-you header.
    pub async fn expect_complete_loaded(&self) -> Result<()> {
        let load = self.load(
            r"/checkout-complete\.html",
            "Checkout: Complete!",
            self.complete_header.clone(),
        );
        expect_page_loaded(&self.session, &load).await?;
        self.session
            .expect_contains_text(&self.complete_header, "Thank you")
            .await
    }

    /// Returns to the inventory from the completion screen.
    pub async fn back_home(&self) -> Result<()> {
        self.session.click(&self.back_home_button).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_summary_consistency() {
        let summary = PriceSummary {
            subtotal: 39.98,
            tax: 3.2,
            total: 43.18,
        };
        assert!(summary.is_consistent());

        let off_by_a_cent = PriceSummary {
            total: 43.19,
            ..summary
        };
        assert!(!off_by_a_cent.is_consistent());
    }
}
