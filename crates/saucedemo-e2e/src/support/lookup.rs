// Element lookup by visible text

use crate::error::Result;
use crate::selector::Target;
use crate::session::Session;

/// Inventory card whose product name is exactly `product_name`.
///
/// Zero or several matches are not handled here; assert visibility before
/// acting on the card.
pub fn inventory_item_by_name(product_name: &str) -> Target {
    Target::css(".inventory_item")
        .has(&Target::test_id("inventory-item-name").with_exact_text(product_name))
}

/// Waits until the element behind `selector` is visible.
pub async fn expect_visible(session: &Session, selector: &str) -> Result<()> {
    session.expect_visible(&Target::css(selector)).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lookup_quotes_name() {
        let item = inventory_item_by_name("Test.allTheThings() T-Shirt (Red)");
        assert_eq!(
            item.selector(),
            r#".inventory_item:has([data-test="inventory-item-name"]:text-is("Test.allTheThings() T-Shirt (Red)"))"#
        );
    }
}
