// Assertions - auto-retry expectations the driver does not ship
//
// `playwright_rs::expect` covers visibility, text and value. Page URL and
// element count are polled here in the same way: retry until the condition
// holds or the timeout elapses, then fail with the last observed value.
//
// See: https://playwright.dev/docs/test-assertions#page-assertions-to-have-url
//      https://playwright.dev/docs/test-assertions#locator-assertions-to-have-count

use crate::config::DEFAULT_ASSERTION_TIMEOUT;
use crate::error::{Error, Result};
use playwright_rs::protocol::{Locator, Page};
use regex::Regex;
use std::time::Duration;

/// Default polling interval for assertions (100ms)
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Creates a URL expectation for a page.
///
/// # Example
///
/// ```ignore
/// use saucedemo_e2e::assertions::expect_page;
///
/// let pattern = regex::Regex::new(r"/inventory\.html")?;
/// expect_page(&page).to_have_url(&pattern).await?;
/// ```
pub fn expect_page(page: &Page) -> PageExpectation {
    PageExpectation {
        page: page.clone(),
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
        negate: false,
    }
}

/// Creates a count expectation for a locator.
pub fn expect_count(locator: Locator) -> CountExpectation {
    CountExpectation {
        locator,
        timeout: DEFAULT_ASSERTION_TIMEOUT,
        poll_interval: DEFAULT_POLL_INTERVAL,
        negate: false,
    }
}

/// Expectation on the page's current URL.
pub struct PageExpectation {
    page: Page,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

// to_* methods consume self, matching the driver's expect API
#[allow(clippy::wrong_self_convention)]
impl PageExpectation {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the page URL matches `pattern` (unanchored search).
    pub async fn to_have_url(self, pattern: &Regex) -> Result<()> {
        let start = std::time::Instant::now();

        loop {
            let actual = self.page.url();
            let matches = pattern.is_match(&actual) != self.negate;

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected page URL NOT to match '{}', but was '{}' after {:?}",
                        pattern, actual, self.timeout
                    )
                } else {
                    format!(
                        "Expected page URL to match '{}', but was '{}' after {:?}",
                        pattern, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

/// Expectation on how many elements a locator matches.
pub struct CountExpectation {
    locator: Locator,
    timeout: Duration,
    poll_interval: Duration,
    negate: bool,
}

#[allow(clippy::wrong_self_convention)]
impl CountExpectation {
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(mut self) -> Self {
        self.negate = true;
        self
    }

    /// Asserts that the locator matches exactly `expected` elements.
    pub async fn to_have_count(self, expected: usize) -> Result<()> {
        let start = std::time::Instant::now();
        let selector = self.locator.selector().to_string();

        loop {
            let actual = self.locator.count().await?;
            let matches = (actual == expected) != self.negate;

            if matches {
                return Ok(());
            }

            if start.elapsed() >= self.timeout {
                let message = if self.negate {
                    format!(
                        "Expected '{}' NOT to match {} element(s), but it did after {:?}",
                        selector, expected, self.timeout
                    )
                } else {
                    format!(
                        "Expected '{}' to match {} element(s), but matched {} after {:?}",
                        selector, expected, actual, self.timeout
                    )
                };
                return Err(Error::AssertionTimeout(message));
            }

            tokio::time::sleep(self.poll_interval).await;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expectation_defaults() {
        assert_eq!(DEFAULT_ASSERTION_TIMEOUT, Duration::from_secs(5));
        assert_eq!(DEFAULT_POLL_INTERVAL, Duration::from_millis(100));
    }
}
