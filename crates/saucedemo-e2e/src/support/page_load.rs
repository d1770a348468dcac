// URL and page-load checks

use crate::error::{Error, PageLoadCheck, Result};
use crate::selector::Target;
use crate::session::Session;
use regex::Regex;

/// How a page URL is matched.
#[derive(Debug, Clone)]
pub enum UrlPattern {
    /// Substring of the URL, matched literally.
    Literal(String),
    /// Regular expression searched anywhere in the URL.
    Regex(Regex),
}

impl UrlPattern {
    /// Regular expression form of the pattern. Literals are escaped first.
    pub fn to_regex(&self) -> Result<Regex> {
        match self {
            UrlPattern::Literal(part) => Ok(Regex::new(&regex::escape(part))?),
            UrlPattern::Regex(re) => Ok(re.clone()),
        }
    }
}

impl From<&str> for UrlPattern {
    fn from(part: &str) -> Self {
        UrlPattern::Literal(part.to_string())
    }
}

impl From<String> for UrlPattern {
    fn from(part: String) -> Self {
        UrlPattern::Literal(part)
    }
}

impl From<Regex> for UrlPattern {
    fn from(re: Regex) -> Self {
        UrlPattern::Regex(re)
    }
}

impl std::fmt::Display for UrlPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UrlPattern::Literal(part) => write!(f, "'{}'", part),
            UrlPattern::Regex(re) => write!(f, "/{}/", re),
        }
    }
}

/// Waits until the page URL matches `pattern`.
pub async fn expect_url_contains(session: &Session, pattern: impl Into<UrlPattern>) -> Result<()> {
    let pattern = pattern.into();
    session.expect_url(&pattern.to_regex()?).await
}

/// What identifies a screen as loaded.
#[derive(Debug, Clone)]
pub struct PageLoad {
    pub url: UrlPattern,
    /// Element whose text is the screen title.
    pub title: Target,
    pub expected_title: String,
    /// Element that must be visible once the screen has rendered.
    pub root: Target,
}

/// Asserts URL, then title text, then root visibility.
///
/// Stops at the first check that fails and reports which one it was.
pub async fn expect_page_loaded(session: &Session, load: &PageLoad) -> Result<()> {
    tracing::debug!(url = %load.url, title = %load.expected_title, "waiting for page load");

    expect_url_contains(session, load.url.clone())
        .await
        .map_err(|e| Error::page_load(PageLoadCheck::Url, e))?;

    session
        .expect_text(&load.title, &load.expected_title)
        .await
        .map_err(|e| Error::page_load(PageLoadCheck::Title, e))?;

    session
        .expect_visible(&load.root)
        .await
        .map_err(|e| Error::page_load(PageLoadCheck::Root, e))?;

    Ok(())
}
