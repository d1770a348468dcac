//! Helpers shared by the page objects: URL and page-load checks, item lookup
//! by visible name, price parsing and order validation.

mod lookup;
mod order;
mod page_load;
mod price;

pub use lookup::{expect_visible, inventory_item_by_name};
pub use order::{
    expect_different_order, expect_equal, expect_sorted_asc, expect_sorted_asc_by, expect_sorted_desc,
    expect_sorted_desc_by,
};
pub use page_load::{PageLoad, UrlPattern, expect_page_loaded, expect_url_contains};
pub use price::parse_price;
