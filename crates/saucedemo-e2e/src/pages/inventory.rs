// InventoryPage - product listing shown after login

use crate::components::Menu;
use crate::error::{Error, Result};
use crate::selector::Target;
use crate::session::Session;
use crate::support::{
    PageLoad, expect_different_order, expect_page_loaded, expect_sorted_asc, expect_sorted_desc,
    inventory_item_by_name, parse_price,
};
use regex::Regex;
use std::str::FromStr;

/// Options of the product sort dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Name (A to Z)
    NameAsc,
    /// Name (Z to A)
    NameDesc,
    /// Price (low to high)
    PriceAsc,
    /// Price (high to low)
    PriceDesc,
}

impl SortOrder {
    /// `value` attribute of the matching `<option>`.
    pub fn value(&self) -> &'static str {
        match self {
            SortOrder::NameAsc => "az",
            SortOrder::NameDesc => "za",
            SortOrder::PriceAsc => "lohi",
            SortOrder::PriceDesc => "hilo",
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "az" => Ok(SortOrder::NameAsc),
            "za" => Ok(SortOrder::NameDesc),
            "lohi" => Ok(SortOrder::PriceAsc),
            "hilo" => Ok(SortOrder::PriceDesc),
            other => Err(Error::Config(format!("unknown sort order '{}'", other))),
        }
    }
}

#[derive(Debug, Clone)]
pub struct InventoryPage {
    session: Session,
    title: Target,
    inventory_list: Target,
    sort_select: Target,
    item_names: Target,
    item_prices: Target,
    pub menu: Menu,
}

impl InventoryPage {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            title: Target::css(".title"),
            inventory_list: Target::css(".inventory_list"),
            sort_select: Target::test_id("product-sort-container"),
            item_names: Target::test_id("inventory-item-name"),
            item_prices: Target::test_id("inventory-item-price"),
            menu: Menu::new(session),
        }
    }

    fn load(&self) -> PageLoad {
        PageLoad {
            url: Regex::new(r"/inventory\.html").expect("static pattern").into(),
            title: self.title.clone(),
            expected_title: "Products".to_string(),
            root: self.inventory_list.clone(),
        }
    }

    pub async fn expect_loaded(&self) -> Result<()> {
        expect_page_loaded(&self.session, &self.load()).await
    }

    /// Adds a product to the cart from its inventory card.
    pub async fn add_to_cart(&self, product_name: &str) -> Result<()> {
        tracing::debug!(product = product_name, "add to cart");
        let item = inventory_item_by_name(product_name);
        self.session.expect_visible(&item).await?;
        self.session
            .click(&item.within(&Target::css("button").with_text("Add to cart")))
            .await
    }

    /// Removes a product from the cart from its inventory card.
    pub async fn remove_from_cart(&self, product_name: &str) -> Result<()> {
        tracing::debug!(product = product_name, "remove from cart");
        let item = inventory_item_by_name(product_name);
        self.session.expect_visible(&item).await?;
        self.session
            .click(&item.within(&Target::css("button").with_text("Remove")))
            .await
    }

    pub async fn sort_by(&self, order: SortOrder) -> Result<()> {
        tracing::debug!(order = order.value(), "sort inventory");
        self.session
            .locate(&self.sort_select)
            .await
            .select_option(order.value(), None)
            .await?;
        self.session.expect_value(&self.sort_select, order.value()).await
    }

    /// Product names in display order.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.texts(&self.item_names).await
    }

    /// Product prices in display order.
    pub async fn prices(&self) -> Result<Vec<f64>> {
        self.texts(&self.item_prices)
            .await?
            .iter()
            .map(|text| parse_price(text))
            .collect()
    }

    async fn texts(&self, target: &Target) -> Result<Vec<String>> {
        let locator = self.session.locate(target).await;
        let count = locator.count().await?;
        let mut texts = Vec::with_capacity(count);
        for index in 0..count {
            let text = locator.nth(index as i32).inner_text().await?;
            texts.push(text.trim().to_string());
        }
        Ok(texts)
    }

    pub async fn expect_names_sorted_asc(&self) -> Result<()> {
        expect_sorted_asc(&self.names().await?)
    }

    pub async fn expect_names_sorted_desc(&self) -> Result<()> {
        expect_sorted_desc(&self.names().await?)
    }

    pub async fn expect_prices_sorted_asc(&self) -> Result<()> {
        expect_sorted_asc(&self.prices().await?)
    }

    pub async fn expect_prices_sorted_desc(&self) -> Result<()> {
        expect_sorted_desc(&self.prices().await?)
    }

    /// Fails with `message` when two listings came back in the same order.
    pub fn assert_different_order(
        &self,
        first: &[String],
        second: &[String],
        message: &str,
    ) -> Result<()> {
        expect_different_order(first, second, message)
    }
}
