// Suite configuration
//
// Everything the suite needs to know about where and how to run is read
// from the environment once per scenario:
//
// - BASE_URL                 application root (default: https://www.saucedemo.com/)
// - CI / GITHUB_ACTIONS      CI mode: 2 retries and all three engines
// - BROWSER                  chromium | firefox | webkit | all
// - E2E_RETRIES              retry override
// - HEADED                   1/true to show the browser window
// - E2E_REPORT_DIR           report directory (default: target/e2e-report)
// - E2E_ASSERT_TIMEOUT_MS    timeout for retrying assertions (default: 5000)

use crate::error::{Error, Result};
use playwright_rs::protocol::{BrowserType, Playwright};
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;
use url::Url;

/// Application root used when `BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "https://www.saucedemo.com/";

/// Default timeout for retrying assertions (5 seconds, matching Playwright)
pub const DEFAULT_ASSERTION_TIMEOUT: Duration = Duration::from_secs(5);

/// Whole-scenario retries in CI.
pub const CI_RETRIES: u32 = 2;

const DEFAULT_REPORT_DIR: &str = "target/e2e-report";

/// Browser engine a scenario runs on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    Chromium,
    Firefox,
    Webkit,
}

impl BrowserKind {
    pub const ALL: [BrowserKind; 3] = [
        BrowserKind::Chromium,
        BrowserKind::Firefox,
        BrowserKind::Webkit,
    ];

    /// Engine name as Playwright spells it.
    pub fn name(&self) -> &'static str {
        match self {
            BrowserKind::Chromium => "chromium",
            BrowserKind::Firefox => "firefox",
            BrowserKind::Webkit => "webkit",
        }
    }

    /// Returns the matching browser type of a running Playwright instance.
    pub fn browser_type<'a>(&self, playwright: &'a Playwright) -> &'a BrowserType {
        match self {
            BrowserKind::Chromium => playwright.chromium(),
            BrowserKind::Firefox => playwright.firefox(),
            BrowserKind::Webkit => playwright.webkit(),
        }
    }
}

impl std::fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BrowserKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "chromium" | "chrome" => Ok(BrowserKind::Chromium),
            "firefox" => Ok(BrowserKind::Firefox),
            "webkit" | "safari" => Ok(BrowserKind::Webkit),
            other => Err(Error::Config(format!("unknown browser '{}'", other))),
        }
    }
}

/// Resolved configuration for one run of the suite.
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// Root of the application under test. Always ends with `/`.
    pub base_url: Url,
    /// Running in an automated environment.
    pub ci: bool,
    /// How many times a failed scenario is re-run.
    pub retries: u32,
    /// Engines every scenario runs on, in order.
    pub browsers: Vec<BrowserKind>,
    pub headless: bool,
    pub assertion_timeout: Duration,
    /// Where the list/HTML report is written.
    pub report_dir: PathBuf,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("default base URL is valid"),
            ci: false,
            retries: 0,
            browsers: vec![BrowserKind::Chromium],
            headless: true,
            assertion_timeout: DEFAULT_ASSERTION_TIMEOUT,
            report_dir: PathBuf::from(DEFAULT_REPORT_DIR),
        }
    }
}

impl SuiteConfig {
    /// Reads the configuration from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let ci = get("CI").is_some_and(|v| is_truthy(&v)) || get("GITHUB_ACTIONS").is_some();

        let base_url = match get("BASE_URL") {
            Some(raw) => parse_base_url(&raw)?,
            None => parse_base_url(DEFAULT_BASE_URL)?,
        };

        let retries = match get("E2E_RETRIES") {
            Some(raw) => raw
                .trim()
                .parse::<u32>()
                .map_err(|e| Error::Config(format!("E2E_RETRIES '{}': {}", raw, e)))?,
            None if ci => CI_RETRIES,
            None => 0,
        };

        let browsers = match get("BROWSER") {
            Some(raw) if raw.trim().eq_ignore_ascii_case("all") => BrowserKind::ALL.to_vec(),
            Some(raw) => raw
                .split(',')
                .map(BrowserKind::from_str)
                .collect::<Result<Vec<_>>>()?,
            None if ci => BrowserKind::ALL.to_vec(),
            None => vec![BrowserKind::Chromium],
        };

        let headless = !get("HEADED").is_some_and(|v| is_truthy(&v));

        let assertion_timeout = match get("E2E_ASSERT_TIMEOUT_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| Error::Config(format!("E2E_ASSERT_TIMEOUT_MS '{}': {}", raw, e)))?,
            None => DEFAULT_ASSERTION_TIMEOUT,
        };

        let report_dir = get("E2E_REPORT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_REPORT_DIR));

        Ok(Self {
            base_url,
            ci,
            retries,
            browsers,
            headless,
            assertion_timeout,
            report_dir,
        })
    }

    /// Resolves an application path such as `/inventory.html` against the base URL.
    ///
    /// A leading `/` is relative to the base URL, not to the host, so a base of
    /// `http://host/shop/` maps `/cart.html` to `http://host/shop/cart.html`.
    pub fn url_for(&self, path: &str) -> Result<String> {
        let relative = path.trim_start_matches('/');
        self.base_url
            .join(relative)
            .map(String::from)
            .map_err(|e| Error::Config(format!("cannot join '{}' onto {}: {}", path, self.base_url, e)))
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut raw = raw.trim().to_string();
    if !raw.ends_with('/') {
        raw.push('/');
    }
    let url = Url::parse(&raw).map_err(|e| Error::Config(format!("BASE_URL '{}': {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(Error::Config(format!(
            "BASE_URL must be http(s), got '{}'",
            other
        ))),
    }
}

fn is_truthy(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "no" | "off"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(vars: &[(&str, &str)]) -> Result<SuiteConfig> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        SuiteConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn test_local_defaults() {
        let config = config_from(&[]).unwrap();
        assert!(!config.ci);
        assert_eq!(config.retries, 0);
        assert_eq!(config.browsers, vec![BrowserKind::Chromium]);
        assert!(config.headless);
        assert_eq!(config.base_url.as_str(), DEFAULT_BASE_URL);
        assert_eq!(config.assertion_timeout, DEFAULT_ASSERTION_TIMEOUT);
    }

    #[test]
    fn test_ci_runs_all_engines_with_retries() {
        let config = config_from(&[("CI", "true")]).unwrap();
        assert!(config.ci);
        assert_eq!(config.retries, CI_RETRIES);
        assert_eq!(config.browsers, BrowserKind::ALL.to_vec());

        let config = config_from(&[("GITHUB_ACTIONS", "true")]).unwrap();
        assert!(config.ci);

        // CI=false is local
        let config = config_from(&[("CI", "false")]).unwrap();
        assert!(!config.ci);
    }

    #[test]
    fn test_overrides() {
        let config = config_from(&[
            ("CI", "1"),
            ("BROWSER", "firefox, webkit"),
            ("E2E_RETRIES", "5"),
            ("HEADED", "1"),
            ("E2E_ASSERT_TIMEOUT_MS", "250"),
            ("E2E_REPORT_DIR", "/tmp/report"),
        ])
        .unwrap();
        assert_eq!(config.browsers, vec![BrowserKind::Firefox, BrowserKind::Webkit]);
        assert_eq!(config.retries, 5);
        assert!(!config.headless);
        assert_eq!(config.assertion_timeout, Duration::from_millis(250));
        assert_eq!(config.report_dir, PathBuf::from("/tmp/report"));

        let config = config_from(&[("BROWSER", "ALL")]).unwrap();
        assert_eq!(config.browsers.len(), 3);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        assert!(matches!(
            config_from(&[("BROWSER", "netscape")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config_from(&[("E2E_RETRIES", "many")]),
            Err(Error::Config(_))
        ));
        assert!(matches!(
            config_from(&[("BASE_URL", "ftp://example.com")]),
            Err(Error::Config(_))
        ));
    }

    #[test]
    fn test_url_for_keeps_base_path() {
        let config = config_from(&[("BASE_URL", "http://localhost:3000/shop")]).unwrap();
        assert_eq!(config.base_url.as_str(), "http://localhost:3000/shop/");
        assert_eq!(
            config.url_for("/cart.html").unwrap(),
            "http://localhost:3000/shop/cart.html"
        );
        assert_eq!(config.url_for("/").unwrap(), "http://localhost:3000/shop/");
    }
}
