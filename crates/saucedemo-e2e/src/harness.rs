// Harness - browser lifecycle around a single scenario
//
// `run_scenario` is what every `#[tokio::test]` calls. For each configured
// engine it launches a browser, gives each attempt a fresh context and page,
// re-runs a failed attempt up to `SuiteConfig::retries` times and records
// every attempt in the report.

use crate::config::{BrowserKind, SuiteConfig};
use crate::error::{Error, Result};
use crate::report::{AttemptRecord, Reporter};
use crate::session::Session;
use playwright_rs::LaunchOptions;
use playwright_rs::protocol::{Browser, BrowserContextOptions, Playwright, Viewport};
use std::future::Future;
use std::sync::{Arc, Once};
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Viewport of every scenario page (Playwright's "Desktop" device size).
pub const DESKTOP_VIEWPORT: Viewport = Viewport {
    width: 1280,
    height: 720,
};

static TRACING: Once = Once::new();

/// Installs the fmt subscriber once per process.
///
/// Honors `RUST_LOG`; defaults to `saucedemo_e2e=info` so the list
/// report lines are shown.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("saucedemo_e2e=info"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Runs `scenario` with the configuration from the environment.
pub async fn run_scenario<F, Fut>(name: &str, scenario: F) -> Result<()>
where
    F: Fn(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    init_tracing();
    let config = SuiteConfig::from_env()?;
    run_scenario_with(Arc::new(config), name, scenario).await
}

/// Runs `scenario` on every configured engine.
///
/// An engine that fails to launch is reported and skipped; the remaining
/// engines still run and Playwright is always shut down. Returns the first
/// engine's final failure, if any.
pub async fn run_scenario_with<F, Fut>(
    config: Arc<SuiteConfig>,
    name: &str,
    scenario: F,
) -> Result<()>
where
    F: Fn(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let reporter = Reporter::new(config.report_dir.clone());
    let playwright = Playwright::launch().await?;

    let result = run_engines(&config.browsers, name, |kind| {
        run_engine(&playwright, kind, &config, &reporter, name, &scenario)
    })
    .await;

    if let Err(e) = playwright.shutdown().await {
        tracing::warn!("Failed to shut down Playwright: {}", e);
    }
    result
}

/// Runs every engine in order, keeping the first failure.
async fn run_engines<E, EFut>(kinds: &[BrowserKind], name: &str, run_engine: E) -> Result<()>
where
    E: Fn(BrowserKind) -> EFut,
    EFut: Future<Output = Result<()>>,
{
    let mut first_failure = None;

    for &kind in kinds {
        if let Err(e) = run_engine(kind).await
            && first_failure.is_none()
        {
            first_failure = Some(e.context(format!("[{}] {}", kind, name)));
        }
    }

    match first_failure {
        Some(e) => Err(e),
        None => Ok(()),
    }
}

async fn run_engine<F, Fut>(
    playwright: &Playwright,
    kind: BrowserKind,
    config: &Arc<SuiteConfig>,
    reporter: &Reporter,
    name: &str,
    scenario: &F,
) -> Result<()>
where
    F: Fn(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let start = Instant::now();
    let launched = kind
        .browser_type(playwright)
        .launch_with_options(LaunchOptions::new().headless(config.headless))
        .await;
    let browser = match launched {
        Ok(browser) => browser,
        Err(e) => {
            let e = Error::from(e).context(format!("launching {}", kind));
            let record = AttemptRecord::new(name, kind, 0, start.elapsed(), Some(e.to_string()));
            write_record(reporter, &record);
            return Err(e);
        }
    };

    let browser_ref = &browser;
    let result = run_attempts(kind, config.retries, reporter, name, move || {
        run_attempt(browser_ref, config, scenario)
    })
    .await;

    if let Err(e) = browser.close().await {
        tracing::warn!("Failed to close {}: {}", kind, e);
    }
    result
}

/// Runs `attempt` until it passes or `retries` re-runs are used up,
/// recording every attempt.
async fn run_attempts<A, AFut>(
    kind: BrowserKind,
    retries: u32,
    reporter: &Reporter,
    name: &str,
    attempt: A,
) -> Result<()>
where
    A: Fn() -> AFut,
    AFut: Future<Output = Result<()>>,
{
    let mut number = 0;
    loop {
        let start = Instant::now();
        let result = attempt().await;

        let error = result.as_ref().err().map(|e| e.to_string());
        write_record(
            reporter,
            &AttemptRecord::new(name, kind, number, start.elapsed(), error),
        );

        match result {
            Ok(()) => return Ok(()),
            Err(e) if number >= retries => return Err(e),
            Err(_) => number += 1,
        }
    }
}

/// One attempt: fresh context and page, the scenario, then cleanup.
///
/// Context and page creation failures fail the attempt like the scenario would.
async fn run_attempt<F, Fut>(
    browser: &Browser,
    config: &Arc<SuiteConfig>,
    scenario: &F,
) -> Result<()>
where
    F: Fn(Session) -> Fut,
    Fut: Future<Output = Result<()>>,
{
    let options = BrowserContextOptions::builder()
        .base_url(config.base_url.to_string())
        .viewport(DESKTOP_VIEWPORT)
        .build();
    let context = browser.new_context_with_options(options).await?;

    let result = match context.new_page().await {
        Ok(page) => scenario(Session::new(page, Arc::clone(config))).await,
        Err(e) => Err(Error::from(e).context("opening page")),
    };

    if let Err(e) = context.close().await {
        tracing::warn!("Failed to close browser context: {}", e);
    }
    result
}

fn write_record(reporter: &Reporter, record: &AttemptRecord) {
    if let Err(e) = reporter.record(record) {
        tracing::warn!("Failed to write report to {}: {}", reporter.dir().display(), e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::{Outcome, Summary, summarize};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicU32, Ordering};

    #[tokio::test]
    async fn test_engine_failure_does_not_stop_later_engines() {
        let ran = Mutex::new(Vec::new());
        let ran_ref = &ran;

        let result = run_engines(&BrowserKind::ALL, "cart: add", move |kind| async move {
            ran_ref.lock().unwrap().push(kind);
            match kind {
                BrowserKind::Firefox => Ok(()),
                other => Err(Error::Config(format!("{} is not installed", other))),
            }
        })
        .await;

        assert_eq!(*ran.lock().unwrap(), BrowserKind::ALL.to_vec());
        let message = result.unwrap_err().to_string();
        assert!(message.contains("[chromium] cart: add"), "{message}");
        assert!(message.contains("chromium is not installed"), "{message}");
    }

    #[tokio::test]
    async fn test_failed_attempt_is_recorded_and_retried() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(dir.path());
        let calls = AtomicU32::new(0);
        let calls_ref = &calls;

        let result = run_attempts(BrowserKind::Webkit, 1, &reporter, "checkout", move || async move {
            if calls_ref.fetch_add(1, Ordering::SeqCst) == 0 {
                Err(Error::Assertion("new context failed".to_string()))
            } else {
                Ok(())
            }
        })
        .await;

        assert!(result.is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 2);

        let records = reporter.load().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, Outcome::Failed);
        assert!(records[0].error.as_deref().unwrap().contains("new context failed"));
        assert_eq!(records[1].attempt, 1);
        assert_eq!(
            summarize(&records),
            Summary {
                passed: 0,
                failed: 0,
                flaky: 1
            }
        );
    }

    #[tokio::test]
    async fn test_retries_stop_at_configured_limit() {
        let dir = tempfile::tempdir().unwrap();
        let reporter = Reporter::new(dir.path());
        let calls = AtomicU32::new(0);
        let calls_ref = &calls;

        let result = run_attempts(BrowserKind::Chromium, 2, &reporter, "logout", move || async move {
            calls_ref.fetch_add(1, Ordering::SeqCst);
            Err::<(), _>(Error::Assertion("still logged in".to_string()))
        })
        .await;

        assert!(matches!(result, Err(Error::Assertion(_))));
        assert_eq!(calls.load(Ordering::SeqCst), 3);
        let records = reporter.load().unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.outcome == Outcome::Failed));
    }
}
