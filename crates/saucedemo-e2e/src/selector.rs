// Target - element descriptor re-resolved on every use
//
// A Target is only a selector string. Page objects keep Targets instead of
// driver Locators, and turn them into a Locator against the current page
// each time an action or assertion runs.
//
// Selectors are Playwright selector-engine strings: CSS plus the
// `:has()`, `:has-text()`, `:text-is()` pseudo-classes and `>>` chaining.

use playwright_rs::protocol::{Locator, Page};

/// Lazily-resolved reference to element(s) on the page.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Target {
    selector: String,
}

impl Target {
    /// Target for a raw selector.
    pub fn css(selector: impl Into<String>) -> Self {
        Self {
            selector: selector.into(),
        }
    }

    /// Target for `[data-test="<id>"]`.
    pub fn test_id(id: &str) -> Self {
        Self::css(format!("[data-test={}]", quote(id)))
    }

    pub fn selector(&self) -> &str {
        &self.selector
    }

    /// Narrows this target to descendants matching `child`.
    pub fn within(&self, child: &Target) -> Target {
        Self::css(format!("{} >> {}", self.selector, child.selector))
    }

    /// First match only.
    pub fn first(&self) -> Target {
        Self::css(format!("{} >> nth=0", self.selector))
    }

    /// Elements containing `text` anywhere (case-insensitive substring).
    pub fn with_text(&self, text: &str) -> Target {
        Self::css(format!("{}:has-text({})", self.selector, quote(text)))
    }

    /// Elements whose whole visible text equals `text`.
    pub fn with_exact_text(&self, text: &str) -> Target {
        Self::css(format!("{}:text-is({})", self.selector, quote(text)))
    }

    /// Elements that contain a descendant matching `inner`.
    pub fn has(&self, inner: &Target) -> Target {
        Self::css(format!("{}:has({})", self.selector, inner.selector))
    }

    /// Resolves to a driver locator on `page`.
    pub async fn resolve(&self, page: &Page) -> Locator {
        page.locator(&self.selector).await
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.selector)
    }
}

/// Double-quotes `text` for use inside a selector, escaping `\` and `"`.
pub fn quote(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}
