// Order validation for sorted listings

use crate::error::{Error, Result, SortDirection};
use std::fmt::Debug;

/// Fails unless `items` is in non-decreasing order.
pub fn expect_sorted_asc<T>(items: &[T]) -> Result<()>
where
    T: PartialOrd + Debug,
{
    check_order(items.iter(), SortDirection::Ascending)
}

/// Fails unless `items` is in non-increasing order.
pub fn expect_sorted_desc<T>(items: &[T]) -> Result<()>
where
    T: PartialOrd + Debug,
{
    check_order(items.iter(), SortDirection::Descending)
}

/// Fails unless `key(items[i]) <= key(items[i + 1])` for every neighbour pair.
pub fn expect_sorted_asc_by<T, K, F>(items: &[T], key: F) -> Result<()>
where
    K: PartialOrd + Debug,
    F: Fn(&T) -> K,
{
    check_order(items.iter().map(key), SortDirection::Ascending)
}

/// Fails unless `key(items[i]) >= key(items[i + 1])` for every neighbour pair.
pub fn expect_sorted_desc_by<T, K, F>(items: &[T], key: F) -> Result<()>
where
    K: PartialOrd + Debug,
    F: Fn(&T) -> K,
{
    check_order(items.iter().map(key), SortDirection::Descending)
}

fn check_order<K>(keys: impl IntoIterator<Item = K>, direction: SortDirection) -> Result<()>
where
    K: PartialOrd + Debug,
{
    let mut keys = keys.into_iter();
    let Some(mut earlier) = keys.next() else {
        return Ok(());
    };

    for (index, later) in keys.enumerate() {
        // Equal neighbours are allowed in both directions.
        let violated = match direction {
            SortDirection::Ascending => earlier > later,
            SortDirection::Descending => earlier < later,
        };
        if violated {
            return Err(Error::OrderViolation {
                direction,
                index,
                earlier: format!("{:?}", earlier),
                later: format!("{:?}", later),
            });
        }
        earlier = later;
    }
    Ok(())
}

/// Fails with `message` when both sequences hold the same items in the same order.
pub fn expect_different_order<T>(first: &[T], second: &[T], message: &str) -> Result<()>
where
    T: PartialEq + Debug,
{
    if first == second {
        return Err(Error::Assertion(format!("{}: {:?}", message, first)));
    }
    Ok(())
}

/// Fails with `message` unless `actual` equals `expected`.
pub fn expect_equal<T>(actual: &T, expected: &T, message: &str) -> Result<()>
where
    T: PartialEq + Debug + ?Sized,
{
    if actual != expected {
        return Err(Error::Assertion(format!(
            "{}: expected {:?}, got {:?}",
            message, expected, actual
        )));
    }
    Ok(())
}
