// Inventory sorting by name and price

mod common;

use saucedemo_e2e::fixtures::users;
use saucedemo_e2e::harness::run_scenario;
use saucedemo_e2e::pages::SortOrder;
use saucedemo_e2e::{Result, Session};

#[tokio::test]
async fn test_sort_by_name_ascending() {
    run_scenario("sort: name A to Z", sort_by_name_ascending)
        .await
        .expect("scenario failed");
}

async fn sort_by_name_ascending(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;
    inventory.sort_by(SortOrder::NameAsc).await?;
    inventory.expect_names_sorted_asc().await
}

#[tokio::test]
async fn test_sort_by_name_descending() {
    run_scenario("sort: name Z to A", sort_by_name_descending)
        .await
        .expect("scenario failed");
}

async fn sort_by_name_descending(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;
    inventory.sort_by(SortOrder::NameDesc).await?;
    inventory.expect_names_sorted_desc().await
}

#[tokio::test]
async fn test_sort_by_price_ascending() {
    run_scenario("sort: price low to high", sort_by_price_ascending)
        .await
        .expect("scenario failed");
}

async fn sort_by_price_ascending(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;
    inventory.sort_by(SortOrder::PriceAsc).await?;
    inventory.expect_prices_sorted_asc().await
}

#[tokio::test]
async fn test_sort_by_price_descending() {
    run_scenario("sort: price high to low", sort_by_price_descending)
        .await
        .expect("scenario failed");
}

async fn sort_by_price_descending(session: Session) -> Result<()> {
    let inventory = common::login_as_standard(&session).await?;
    inventory.sort_by(SortOrder::PriceDesc).await?;
    inventory.expect_prices_sorted_desc().await
}

#[tokio::test]
#[ignore = "known defect: sorting has no effect for problem_user"]
async fn test_problem_user_sort_changes_order() {
    run_scenario("sort: problem_user sort changes order", problem_user_sort_changes_order)
        .await
        .expect("scenario failed");
}

async fn problem_user_sort_changes_order(session: Session) -> Result<()> {
    let inventory = common::login_as(&session, &users().problem).await?;

    let before = inventory.names().await?;
    inventory.sort_by(SortOrder::NameDesc).await?;
    let after = inventory.names().await?;
    inventory.assert_different_order(&before, &after, "sorting Z to A did not reorder the products")
}
