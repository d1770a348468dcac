// Report - list output and HTML report of scenario attempts
//
// Every attempt is logged as a list line and appended to
// `<report_dir>/results.jsonl`. `index.html` is re-rendered from the JSONL
// after each append so the report is complete whenever the run stops.
// `Reporter::reset` starts a new run; within a run the latest record of a
// scenario on an engine is its final outcome.
// The report is only written, never opened.

use crate::config::BrowserKind;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

const RESULTS_FILE: &str = "results.jsonl";
const HTML_FILE: &str = "index.html";

// Serializes appends and re-renders within this process.
static WRITE_LOCK: Mutex<()> = Mutex::new(());

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    Failed,
}

/// One attempt of one scenario on one engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AttemptRecord {
    pub scenario: String,
    pub browser: String,
    /// 0 for the first run, 1.. for retries.
    pub attempt: u32,
    pub outcome: Outcome,
    pub duration_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Seconds since the Unix epoch.
    pub finished_at: u64,
}

impl AttemptRecord {
    pub fn new(
        scenario: &str,
        browser: BrowserKind,
        attempt: u32,
        duration: Duration,
        error: Option<String>,
    ) -> Self {
        let finished_at = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or_default();
        Self {
            scenario: scenario.to_string(),
            browser: browser.name().to_string(),
            attempt,
            outcome: if error.is_none() {
                Outcome::Passed
            } else {
                Outcome::Failed
            },
            duration_ms: duration.as_millis() as u64,
            error,
            finished_at,
        }
    }
}

/// Writes attempt records to the report directory.
#[derive(Debug, Clone)]
pub struct Reporter {
    dir: PathBuf,
}

impl Reporter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn html_path(&self) -> PathBuf {
        self.dir.join(HTML_FILE)
    }

    /// Logs the attempt, appends it to the results file and refreshes the HTML report.
    pub fn record(&self, record: &AttemptRecord) -> Result<()> {
        log_list_line(record);

        let _guard = WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        fs::create_dir_all(&self.dir)?;

        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.dir.join(RESULTS_FILE))?
            .write_all(line.as_bytes())?;

        let records = self.load()?;
        fs::write(self.html_path(), render_html(&records))?;
        Ok(())
    }

    /// Removes the results and HTML report of earlier runs.
    pub fn reset(&self) -> Result<()> {
        let _guard = WRITE_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        for file in [RESULTS_FILE, HTML_FILE] {
            match fs::remove_file(self.dir.join(file)) {
                Err(e) if e.kind() != std::io::ErrorKind::NotFound => return Err(e.into()),
                _ => {}
            }
        }
        Ok(())
    }

    /// All records written so far. Unreadable lines are skipped.
    pub fn load(&self) -> Result<Vec<AttemptRecord>> {
        let path = self.dir.join(RESULTS_FILE);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(path)?;
        Ok(content
            .lines()
            .filter(|line| !line.trim().is_empty())
            .filter_map(|line| match serde_json::from_str(line) {
                Ok(record) => Some(record),
                Err(e) => {
                    tracing::warn!("Skipping malformed report line: {}", e);
                    None
                }
            })
            .collect())
    }
}

fn log_list_line(record: &AttemptRecord) {
    let retry = if record.attempt > 0 {
        format!(" (retry #{})", record.attempt)
    } else {
        String::new()
    };
    match record.outcome {
        Outcome::Passed => tracing::info!(
            "  ✓  [{}] › {} ({}ms){}",
            record.browser,
            record.scenario,
            record.duration_ms,
            retry
        ),
        Outcome::Failed => tracing::warn!(
            "  ✘  [{}] › {} ({}ms){}: {}",
            record.browser,
            record.scenario,
            record.duration_ms,
            retry,
            record.error.as_deref().unwrap_or_default()
        ),
    }
}

/// Pass/fail/flaky tally over the final attempt of each scenario and engine.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub passed: usize,
    pub failed: usize,
    /// Passed, but only after a retry.
    pub flaky: usize,
}

pub fn summarize(records: &[AttemptRecord]) -> Summary {
    // Latest record per (scenario, browser), in append order
    let mut latest: Vec<&AttemptRecord> = Vec::new();
    for record in records {
        match latest
            .iter_mut()
            .find(|r| r.scenario == record.scenario && r.browser == record.browser)
        {
            Some(slot) => *slot = record,
            None => latest.push(record),
        }
    }

    let mut summary = Summary::default();
    for record in latest {
        match (record.outcome, record.attempt) {
            (Outcome::Passed, 0) => summary.passed += 1,
            (Outcome::Passed, _) => summary.flaky += 1,
            (Outcome::Failed, _) => summary.failed += 1,
        }
    }
    summary
}

pub fn render_html(records: &[AttemptRecord]) -> String {
    let summary = summarize(records);
    let mut rows = String::new();
    for record in records {
        let outcome = match record.outcome {
            Outcome::Passed => "passed",
            Outcome::Failed => "failed",
        };
        rows.push_str(&format!(
            "<tr class=\"{outcome}\"><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{} ms</td><td><pre>{}</pre></td></tr>\n",
            escape_html(&record.scenario),
            escape_html(&record.browser),
            record.attempt,
            outcome,
            record.duration_ms,
            escape_html(record.error.as_deref().unwrap_or_default()),
        ));
    }

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>SauceDemo E2E Report</title>
<style>
  body {{ font-family: sans-serif; margin: 2rem; }}
  table {{ border-collapse: collapse; width: 100%; }}
  td, th {{ border: 1px solid #ccc; padding: 4px 8px; text-align: left; vertical-align: top; }}
  tr.passed td:nth-child(4) {{ color: #1a7f37; }}
  tr.failed td:nth-child(4) {{ color: #cf222e; }}
  pre {{ margin: 0; white-space: pre-wrap; }}
</style>
</head>
<body>
<h1>SauceDemo E2E Report</h1>
<p id="summary">{} passed, {} failed, {} flaky</p>
<table>
<tr><th>Scenario</th><th>Browser</th><th>Attempt</th><th>Outcome</th><th>Duration</th><th>Error</th></tr>
{}</table>
</body>
</html>
"#,
        summary.passed, summary.failed, summary.flaky, rows
    )
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
