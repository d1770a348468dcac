//! Workspace tasks for the SauceDemo end-to-end suite.
//!
//! # Usage
//!
//! ```bash
//! # Install the browsers matching the bundled Playwright driver
//! cargo xtask install-browsers
//!
//! # Run the suite locally (Chromium, no retries)
//! cargo xtask e2e
//!
//! # Run it the way CI does (all engines, 2 retries)
//! cargo xtask e2e --ci
//!
//! # Serve the HTML report of the last run
//! cargo xtask show-report
//! ```

use anyhow::{Context, Result, bail};
use axum::Router;
use clap::{Parser, Subcommand};
use saucedemo_e2e::report::Reporter;
use saucedemo_e2e::{BrowserKind, SuiteConfig};
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tower_http::services::ServeDir;

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "SauceDemo e2e workspace tasks")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Install browsers for the Playwright driver version in use
    InstallBrowsers {
        /// Engines to install (default: all three)
        browsers: Vec<BrowserKind>,

        /// Also install system dependencies
        #[arg(long)]
        with_deps: bool,
    },
    /// Run the end-to-end suite
    E2e {
        /// CI mode: all engines and 2 retries per scenario
        #[arg(long)]
        ci: bool,

        /// chromium, firefox, webkit, all, or a comma-separated list
        #[arg(long)]
        browser: Option<String>,

        /// Application root to test against
        #[arg(long)]
        base_url: Option<String>,

        /// Show the browser window
        #[arg(long)]
        headed: bool,

        /// Also run scenarios marked as known defects
        #[arg(long)]
        include_known_defects: bool,

        /// Test name filter passed to the test harness
        filter: Option<String>,
    },
    /// Serve the HTML report of the last run
    ShowReport {
        #[arg(long, default_value_t = 9323)]
        port: u16,

        /// Report directory (default: E2E_REPORT_DIR or target/e2e-report)
        #[arg(long)]
        dir: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    match Cli::parse().command {
        Commands::InstallBrowsers {
            browsers,
            with_deps,
        } => install_browsers(&browsers, with_deps).await,
        Commands::E2e {
            ci,
            browser,
            base_url,
            headed,
            include_known_defects,
            filter,
        } => {
            let run = E2eRun {
                ci,
                browser,
                base_url,
                headed,
                include_known_defects,
                filter,
            };
            run_e2e(&run).await
        }
        Commands::ShowReport { port, dir } => show_report(port, dir).await,
    }
}

fn workspace_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .ancestors()
        .nth(2)
        .unwrap_or(Path::new("."))
}

/// Report directory shared by `e2e` and `show-report`.
fn report_dir() -> Result<PathBuf> {
    let configured = SuiteConfig::from_env()?.report_dir;
    Ok(if configured.is_absolute() {
        configured
    } else {
        workspace_root().join(configured)
    })
}

async fn install_browsers(browsers: &[BrowserKind], with_deps: bool) -> Result<()> {
    let package = format!("playwright@{}", playwright_rs::PLAYWRIGHT_VERSION);
    let mut command = Command::new("npx");
    command.arg("--yes").arg(&package).arg("install");
    if with_deps {
        command.arg("--with-deps");
    }
    command.args(browsers.iter().map(|b| b.name()));

    tracing::info!("Installing browsers with {}", package);
    let status = command
        .status()
        .await
        .context("failed to run npx; is Node.js installed?")?;
    if !status.success() {
        bail!("browser install failed with {}", status);
    }
    Ok(())
}

struct E2eRun {
    ci: bool,
    browser: Option<String>,
    base_url: Option<String>,
    headed: bool,
    include_known_defects: bool,
    filter: Option<String>,
}

async fn run_e2e(run: &E2eRun) -> Result<()> {
    let report_dir = report_dir()?;
    Reporter::new(report_dir.clone())
        .reset()
        .with_context(|| format!("cannot clear report in {}", report_dir.display()))?;

    let mut command = Command::new(env!("CARGO"));
    command
        .current_dir(workspace_root())
        .args(["test", "--package", "saucedemo-e2e"])
        .env("E2E_REPORT_DIR", &report_dir);
    if run.ci {
        command.env("CI", "true");
    }
    if let Some(browser) = &run.browser {
        command.env("BROWSER", browser);
    }
    if let Some(base_url) = &run.base_url {
        command.env("BASE_URL", base_url);
    }
    if run.headed {
        command.env("HEADED", "1");
    }

    command.arg("--");
    if let Some(filter) = &run.filter {
        command.arg(filter);
    }
    if run.include_known_defects {
        command.arg("--include-ignored");
    }

    tracing::info!("Report: {}", report_dir.join("index.html").display());
    let status = command.status().await.context("failed to run cargo test")?;
    if !status.success() {
        bail!("e2e suite failed with {}", status);
    }
    Ok(())
}

async fn show_report(port: u16, dir: Option<PathBuf>) -> Result<()> {
    let dir = match dir {
        Some(dir) => dir,
        None => report_dir()?,
    };
    if !dir.join("index.html").exists() {
        bail!("no report in {}; run `cargo xtask e2e` first", dir.display());
    }

    let app = Router::new().fallback_service(ServeDir::new(&dir));
    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("cannot bind {}", addr))?;

    tracing::info!("Serving {} at http://{}/", dir.display(), addr);
    axum::serve(listener, app).await?;
    Ok(())
}
