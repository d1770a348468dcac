// CartPage - /cart.html

use crate::components::Menu;
use crate::error::Result;
use crate::selector::Target;
use crate::session::Session;
use crate::support::{PageLoad, expect_page_loaded};
use regex::Regex;
use serde::Deserialize;

/// Viewport-relative element box, as returned by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

const BOUNDING_BOX_JS: &str = r#"(selector) => {
    const element = document.querySelector(selector);
    if (!element) return null;
    const rect = element.getBoundingClientRect();
    return { x: rect.x, y: rect.y, width: rect.width, height: rect.height };
}"#;

#[derive(Debug, Clone)]
pub struct CartPage {
    session: Session,
    title: Target,
    cart_items: Target,
    item_names: Target,
    checkout_button: Target,
    continue_shopping_button: Target,
    pub menu: Menu,
}

impl CartPage {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            title: Target::css(".title"),
            cart_items: Target::css(".cart_item"),
            item_names: Target::css(".inventory_item_name"),
            checkout_button: Target::test_id("checkout"),
            continue_shopping_button: Target::test_id("continue-shopping"),
            menu: Menu::new(session),
        }
    }

    /// Cart screen with at least one item rendered.
    pub async fn expect_loaded(&self) -> Result<()> {
        let load = PageLoad {
            url: Regex::new(r"/cart\.html").expect("static pattern").into(),
            title: self.title.clone(),
            expected_title: "Your Cart".to_string(),
            root: self.cart_items.first(),
        };
        expect_page_loaded(&self.session, &load).await
    }

    pub async fn expect_item_visible(&self, product_name: &str) -> Result<()> {
        self.session
            .expect_visible(&self.item_names.with_text(product_name))
            .await
    }

    /// Waits until no cart line shows `product_name`.
    pub async fn expect_item_absent(&self, product_name: &str) -> Result<()> {
        self.session
            .expect_count(&self.item_names.with_text(product_name), 0)
            .await
    }

    pub async fn expect_items_count(&self, count: usize) -> Result<()> {
        self.session.expect_count(&self.cart_items, count).await
    }

    /// Product names of the cart lines, in display order.
    pub async fn item_names(&self) -> Result<Vec<String>> {
        let locator = self.session.locate(&self.item_names).await;
        let mut names = Vec::new();
        for index in 0..locator.count().await? {
            names.push(locator.nth(index as i32).inner_text().await?.trim().to_string());
        }
        Ok(names)
    }

    pub async fn checkout(&self) -> Result<()> {
        self.session.expect_visible(&self.checkout_button).await?;
        self.session.click(&self.checkout_button).await
    }

    /// Back to the inventory listing.
    pub async fn continue_shopping(&self) -> Result<()> {
        self.session.click(&self.continue_shopping_button).await
    }

    /// Where the checkout button is drawn, or `None` if it is not in the DOM.
    pub async fn checkout_button_box(&self) -> Result<Option<BoundingBox>> {
        self.session.expect_visible(&self.checkout_button).await?;
        let selector = self.checkout_button.selector().to_string();
        let bounding_box = self
            .session
            .page()
            .evaluate(BOUNDING_BOX_JS, Some(&selector))
            .await?;
        Ok(bounding_box)
    }
}
