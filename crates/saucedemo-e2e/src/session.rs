// Session - one scenario's page plus the configuration it runs under

use crate::assertions::{expect_count, expect_page};
use crate::config::SuiteConfig;
use crate::error::Result;
use crate::selector::Target;
use playwright_rs::expect;
use playwright_rs::protocol::{Locator, Page, Viewport};
use regex::Regex;
use std::sync::Arc;

/// The browser page a scenario drives, together with the suite settings.
///
/// Cheap to clone; page objects each hold their own copy.
#[derive(Clone)]
pub struct Session {
    page: Page,
    config: Arc<SuiteConfig>,
}

impl Session {
    pub fn new(page: Page, config: Arc<SuiteConfig>) -> Self {
        Self { page, config }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Current URL of the page.
    pub fn url(&self) -> String {
        self.page.url()
    }

    /// Navigates to an application path (`/`, `/inventory.html`, ...).
    pub async fn goto(&self, path: &str) -> Result<()> {
        let url = self.config.url_for(path)?;
        tracing::debug!(%url, "navigating");
        self.page.goto(&url, None).await?;
        Ok(())
    }

    /// Resolves a target against the current page.
    pub async fn locate(&self, target: &Target) -> Locator {
        target.resolve(&self.page).await
    }

    /// Waits until `target` is visible.
    pub async fn expect_visible(&self, target: &Target) -> Result<()> {
        expect(self.locate(target).await)
            .with_timeout(self.config.assertion_timeout)
            .to_be_visible()
            .await?;
        Ok(())
    }

    /// Waits until `target`'s trimmed text equals `text`.
    pub async fn expect_text(&self, target: &Target, text: &str) -> Result<()> {
        expect(self.locate(target).await)
            .with_timeout(self.config.assertion_timeout)
            .to_have_text(text)
            .await?;
        Ok(())
    }

    /// Waits until `target`'s text contains `text`.
    pub async fn expect_contains_text(&self, target: &Target, text: &str) -> Result<()> {
        expect(self.locate(target).await)
            .with_timeout(self.config.assertion_timeout)
            .to_contain_text(text)
            .await?;
        Ok(())
    }

    /// Waits until the input behind `target` holds `value`.
    pub async fn expect_value(&self, target: &Target, value: &str) -> Result<()> {
        expect(self.locate(target).await)
            .with_timeout(self.config.assertion_timeout)
            .to_have_value(value)
            .await?;
        Ok(())
    }

    /// Waits until `target` matches exactly `count` elements.
    pub async fn expect_count(&self, target: &Target, count: usize) -> Result<()> {
        expect_count(self.locate(target).await)
            .with_timeout(self.config.assertion_timeout)
            .to_have_count(count)
            .await
    }

    /// Waits until the page URL matches `pattern`.
    pub async fn expect_url(&self, pattern: &Regex) -> Result<()> {
        expect_page(&self.page)
            .with_timeout(self.config.assertion_timeout)
            .to_have_url(pattern)
            .await
    }

    /// Visibility right now, without waiting.
    pub async fn is_visible(&self, target: &Target) -> Result<bool> {
        Ok(self.locate(target).await.is_visible().await?)
    }

    /// Current value of the input behind `target`.
    pub async fn input_value(&self, target: &Target) -> Result<String> {
        Ok(self.locate(target).await.input_value(None).await?)
    }

    pub async fn set_viewport(&self, viewport: Viewport) -> Result<()> {
        tracing::debug!(width = viewport.width, height = viewport.height, "set viewport");
        self.page.set_viewport_size(viewport).await?;
        Ok(())
    }

    pub async fn click(&self, target: &Target) -> Result<()> {
        tracing::debug!(selector = %target, "click");
        self.locate(target).await.click(None).await?;
        Ok(())
    }

    pub async fn fill(&self, target: &Target, text: &str) -> Result<()> {
        tracing::debug!(selector = %target, "fill");
        self.locate(target).await.fill(text, None).await?;
        Ok(())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("url", &self.page.url())
            .field("base_url", &self.config.base_url.as_str())
            .finish()
    }
}
