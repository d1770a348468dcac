// Shared scenario steps
//
// Each test binary compiles this module separately, so not every helper is
// used by every binary.
#![allow(dead_code)]

use saucedemo_e2e::Result;
use saucedemo_e2e::Session;
use saucedemo_e2e::fixtures::{User, users};
use saucedemo_e2e::pages::{InventoryPage, LoginPage};

/// Opens the login screen and signs in as `user`, ending on the inventory.
pub async fn login_as(session: &Session, user: &User) -> Result<InventoryPage> {
    let login = LoginPage::new(session);
    let inventory = InventoryPage::new(session);

    login.open().await?;
    login.login_as(user).await?;
    inventory.expect_loaded().await?;
    Ok(inventory)
}

pub async fn login_as_standard(session: &Session) -> Result<InventoryPage> {
    login_as(session, &users().standard).await
}
