// Menu - header fragment present on every logged-in screen
//
// Cart link and badge on the right, burger menu with logout and
// "reset app state" on the left.

use crate::error::{Error, Result};
use crate::selector::Target;
use crate::session::Session;

/// Header and side menu shared by the inventory, cart and checkout screens.
#[derive(Debug, Clone)]
pub struct Menu {
    session: Session,
    cart_link: Target,
    cart_badge: Target,
    menu_button: Target,
    logout_link: Target,
    reset_link: Target,
}

impl Menu {
    pub fn new(session: &Session) -> Self {
        Self {
            session: session.clone(),
            cart_link: Target::css(".shopping_cart_link"),
            cart_badge: Target::css(".shopping_cart_badge"),
            menu_button: Target::css("#react-burger-menu-btn"),
            logout_link: Target::css("#logout_sidebar_link"),
            reset_link: Target::css("#reset_sidebar_link"),
        }
    }

    pub async fn open_cart(&self) -> Result<()> {
        self.session.click(&self.cart_link).await
    }

    /// Number shown on the cart badge; 0 when the badge is not rendered.
    pub async fn cart_badge_count(&self) -> Result<usize> {
        let badge = self.session.locate(&self.cart_badge).await;
        if badge.count().await? == 0 {
            return Ok(0);
        }
        parse_badge(&badge.inner_text().await?)
    }

    /// Waits until the badge shows `count` (or disappears, for 0).
    pub async fn expect_cart_badge_count(&self, count: usize) -> Result<()> {
        if count == 0 {
            return self.session.expect_count(&self.cart_badge, 0).await;
        }
        self.session
            .expect_text(&self.cart_badge, &count.to_string())
            .await
    }

    /// Opens the burger menu unless it is already open.
    pub async fn open_menu(&self) -> Result<()> {
        if self.session.is_visible(&self.logout_link).await? {
            return Ok(());
        }
        self.session.click(&self.menu_button).await?;
        self.session.expect_visible(&self.logout_link).await
    }

    /// Logs out through the burger menu.
    pub async fn logout(&self) -> Result<()> {
        tracing::debug!("logging out");
        self.open_menu().await?;
        self.session.click(&self.logout_link).await
    }

    /// Clears the cart and product button state through the burger menu.
    pub async fn reset_app_state(&self) -> Result<()> {
        self.open_menu().await?;
        self.session.click(&self.reset_link).await
    }
}

/// Parses badge text; anything but a count is a rendering regression.
fn parse_badge(text: &str) -> Result<usize> {
    text.trim()
        .parse::<usize>()
        .map_err(|_| Error::UnexpectedBadgeText(text.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_badge() {
        assert_eq!(parse_badge("2").unwrap(), 2);
        assert_eq!(parse_badge(" 10\n").unwrap(), 10);
    }

    #[test]
    fn test_non_numeric_badge_is_an_error() {
        for text in ["", "two", "1.5", "-1", "NaN"] {
            assert!(
                matches!(parse_badge(text), Err(Error::UnexpectedBadgeText(_))),
                "{text:?} should be rejected"
            );
        }
    }
}
