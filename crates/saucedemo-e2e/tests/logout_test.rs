// Logout: session ends, cart state does not leak back in

mod common;

use regex::Regex;
use saucedemo_e2e::fixtures::products;
use saucedemo_e2e::harness::run_scenario;
use saucedemo_e2e::pages::LoginPage;
use saucedemo_e2e::{Result, Session};

#[tokio::test]
async fn test_logout_ends_session() {
    run_scenario("logout: session ends", logout_ends_session)
        .await
        .expect("scenario failed");
}

async fn logout_ends_session(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;
    let login = LoginPage::new(&session);

    inventory.add_to_cart(&products().backpack.name).await?;
    inventory.add_to_cart(&products().bike_light.name).await?;
    inventory.menu.expect_cart_badge_count(2).await?;

    inventory.menu.logout().await?;
    login.assert_on_login_page().await?;

    // Protected pages bounce back to the login screen.
    session.goto("/inventory.html").await?;
    session.expect_url(&Regex::new(r"/(index\.html)?$")?).await?;
    login.assert_on_login_page().await
}

#[tokio::test]
async fn test_reset_app_state_empties_cart() {
    run_scenario("logout: reset app state empties cart", reset_app_state_empties_cart)
        .await
        .expect("scenario failed");
}

async fn reset_app_state_empties_cart(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;

    inventory.add_to_cart(&products().fleece_jacket.name).await?;
    inventory.menu.expect_cart_badge_count(1).await?;

    inventory.menu.reset_app_state().await?;
    inventory.menu.expect_cart_badge_count(0).await
}
