// Error types for saucedemo-e2e

use thiserror::Error;

/// Result type alias for suite operations
pub type Result<T> = std::result::Result<T, Error>;

/// Which part of a page-load check failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLoadCheck {
    Url,
    Title,
    Root,
}

impl std::fmt::Display for PageLoadCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PageLoadCheck::Url => "url",
            PageLoadCheck::Title => "title",
            PageLoadCheck::Root => "root element",
        };
        f.write_str(name)
    }
}

/// Direction of an order check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

impl std::fmt::Display for SortDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortDirection::Ascending => f.write_str("ascending"),
            SortDirection::Descending => f.write_str("descending"),
        }
    }
}

/// Errors that can occur while driving the storefront
#[derive(Debug, Error)]
pub enum Error {
    /// Failure reported by the browser driver
    ///
    /// Includes the driver's own assertion timeouts (`to_be_visible`,
    /// `to_have_text`, ...).
    #[error(transparent)]
    Driver(#[from] playwright_rs::Error),

    /// A retrying expectation did not hold before its timeout
    #[error("Assertion timeout: {0}")]
    AssertionTimeout(String),

    /// An immediate assertion on observed values failed
    #[error("Assertion failed: {0}")]
    Assertion(String),

    /// A page-load check failed
    ///
    /// `check` names the sub-check that failed first.
    #[error("Page load check failed ({check}): {source}")]
    PageLoad {
        check: PageLoadCheck,
        #[source]
        source: Box<Error>,
    },

    /// The cart badge rendered something other than a count
    #[error("Cart badge text '{0}' is not a number")]
    UnexpectedBadgeText(String),

    /// Displayed price text could not be parsed
    #[error("Cannot parse price from '{0}'")]
    InvalidPrice(String),

    /// Adjacent values out of the expected order
    #[error(
        "Expected {direction} order, but item {index} ({earlier}) and item {next} ({later}) are out of order",
        next = .index + 1
    )]
    OrderViolation {
        direction: SortDirection,
        index: usize,
        earlier: String,
        later: String,
    },

    /// Fixture file did not match its expected shape
    #[error("Fixture '{name}' is malformed: {source}")]
    Fixture {
        name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// Invalid suite configuration
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// URL pattern did not compile
    #[error("Invalid URL pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error with additional context
    #[error("{0}: {1}")]
    Context(String, #[source] Box<Error>),
}

impl Error {
    /// Adds context to the error
    pub fn context(self, msg: impl Into<String>) -> Self {
        Error::Context(msg.into(), Box::new(self))
    }

    pub(crate) fn page_load(check: PageLoadCheck, source: Error) -> Self {
        Error::PageLoad {
            check,
            source: Box::new(source),
        }
    }

    /// Returns the failed sub-check if this is (or wraps) a page-load failure.
    pub fn page_load_check(&self) -> Option<PageLoadCheck> {
        match self {
            Error::PageLoad { check, .. } => Some(*check),
            Error::Context(_, inner) => inner.page_load_check(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_violation_names_both_indices() {
        let err = Error::OrderViolation {
            direction: SortDirection::Ascending,
            index: 2,
            earlier: "\"b\"".to_string(),
            later: "\"a\"".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("item 2"), "{message}");
        assert!(message.contains("item 3"), "{message}");
        assert!(message.contains("ascending"), "{message}");
    }

    #[test]
    fn test_page_load_check_through_context() {
        let err = Error::page_load(PageLoadCheck::Title, Error::Assertion("x".into()))
            .context("cart page");
        assert_eq!(err.page_load_check(), Some(PageLoadCheck::Title));
        assert_eq!(Error::Assertion("x".into()).page_load_check(), None);
    }
}
