// Fixtures - static test input
//
// Credentials, product names and checkout details live as JSON next to the
// crate and are embedded at compile time. Each file is parsed once per
// process and handed out as `&'static` data; nothing mutates it afterwards.

use crate::error::{Error, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use std::sync::LazyLock;

const USERS_JSON: &str = include_str!("../fixtures/users.json");
const PRODUCTS_JSON: &str = include_str!("../fixtures/products.json");
const CHECKOUT_USER_JSON: &str = include_str!("../fixtures/checkout_user.json");

/// Login credentials for one persona.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub username: String,
    pub password: String,
}

/// Every persona the storefront ships with.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Users {
    pub standard: User,
    pub locked_out: User,
    pub problem: User,
    pub performance: User,
    pub error: User,
    pub visual: User,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Product {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Products {
    pub backpack: Product,
    pub bike_light: Product,
    pub bolt_t_shirt: Product,
    pub fleece_jacket: Product,
    pub onesie: Product,
    pub red_t_shirt: Product,
}

impl Products {
    /// All products in catalogue order.
    pub fn all(&self) -> [&Product; 6] {
        [
            &self.backpack,
            &self.bike_light,
            &self.bolt_t_shirt,
            &self.fleece_jacket,
            &self.onesie,
            &self.red_t_shirt,
        ]
    }
}

/// Data entered on the checkout information step.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutInfo {
    pub first_name: String,
    pub last_name: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutUsers {
    pub valid: CheckoutInfo,
}

fn parse<T: DeserializeOwned>(name: &'static str, json: &str) -> Result<T> {
    serde_json::from_str(json).map_err(|source| Error::Fixture { name, source })
}

static USERS: LazyLock<Users> =
    LazyLock::new(|| parse("users.json", USERS_JSON).expect("users.json fixture is valid"));

static PRODUCTS: LazyLock<Products> = LazyLock::new(|| {
    parse("products.json", PRODUCTS_JSON).expect("products.json fixture is valid")
});

static CHECKOUT_USERS: LazyLock<CheckoutUsers> = LazyLock::new(|| {
    parse("checkout_user.json", CHECKOUT_USER_JSON).expect("checkout_user.json fixture is valid")
});

pub fn users() -> &'static Users {
    &USERS
}

pub fn products() -> &'static Products {
    &PRODUCTS
}

pub fn checkout_users() -> &'static CheckoutUsers {
    &CHECKOUT_USERS
}
