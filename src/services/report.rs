//! Report Service
//!
//! Surfaces a gate outcome to the runner: workflow commands on stdout, step
//! outputs in `GITHUB_OUTPUT` and a markdown section in `GITHUB_STEP_SUMMARY`.
//! The process exit status is set by the binary, not here.

use chrono::{DateTime, Utc};
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::services::gate::{GateInput, Outcome};

/// Everything reported for one evaluation
#[derive(Debug, Clone)]
pub struct GateReport<'a> {
    pub input: &'a GateInput,
    pub outcome: &'a Outcome,
    pub label: &'a str,
    pub evaluated_at: DateTime<Utc>,
}

impl<'a> GateReport<'a> {
    pub fn new(input: &'a GateInput, outcome: &'a Outcome, label: &'a str) -> Self {
        Self {
            input,
            outcome,
            label,
            evaluated_at: Utc::now(),
        }
    }

    /// `key=value` lines for the step output file
    pub fn output_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("outcome={}", self.outcome.as_str())];
        if !matches!(self.outcome, Outcome::Skipped(_)) {
            lines.push(format!("fork={}", self.input.is_fork()));
        }
        lines
    }

    /// Markdown section for the job summary page
    pub fn summary_markdown(&self) -> String {
        let mut md = String::from("### Safe to test\n\n");
        md.push_str("| | |\n|---|---|\n");
        md.push_str(&format!("| Outcome | **{}** |\n", self.outcome.as_str()));
        md.push_str(&format!("| Event | `{}` |\n", self.input.event));
        if !matches!(self.outcome, Outcome::Skipped(_)) {
            md.push_str(&format!("| Base repository | `{}` |\n", self.input.base_repo));
            md.push_str(&format!("| Head repository | `{}` |\n", self.input.head_repo));
            md.push_str(&format!("| Required label | `{}` |\n", self.label));
        }
        md.push_str(&format!(
            "| Evaluated at | {} |\n\n",
            self.evaluated_at.format("%Y-%m-%d %H:%M:%S UTC")
        ));
        md.push_str(&format!("{}\n", self.outcome));
        md
    }
}

/// Escape message data for a `::command::message` line
pub fn escape_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Format a workflow command line
pub fn workflow_command(command: &str, message: &str) -> String {
    format!("::{command}::{}", escape_data(message))
}

/// Writes reports to the runner
#[derive(Debug)]
pub struct Reporter<W: Write> {
    out: W,
    output_path: Option<PathBuf>,
    summary_path: Option<PathBuf>,
}

impl Reporter<io::Stdout> {
    pub fn from_config(config: &Config) -> Self {
        Self::new(
            io::stdout(),
            config.output_path.clone(),
            config.summary_path.clone(),
        )
    }
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, output_path: Option<PathBuf>, summary_path: Option<PathBuf>) -> Self {
        Self {
            out,
            output_path,
            summary_path,
        }
    }

    /// Report an evaluated outcome
    ///
    /// Failures writing the output or summary files are logged and ignored;
    /// only stdout errors are returned.
    pub fn report(&mut self, report: &GateReport<'_>) -> io::Result<()> {
        let line = match report.outcome {
            Outcome::Allowed(_) => report.outcome.to_string(),
            Outcome::Skipped(reason) => workflow_command("notice", reason),
            Outcome::Blocked(message) => workflow_command("error", message),
        };
        writeln!(self.out, "{line}")?;
        self.out.flush()?;

        if let Some(path) = &self.output_path {
            let mut body = report.output_lines().join("\n");
            body.push('\n');
            if let Err(e) = append(path, &body) {
                tracing::warn!("Failed to write step outputs to {}: {}", path.display(), e);
            }
        }

        if let Some(path) = &self.summary_path {
            if let Err(e) = append(path, &report.summary_markdown()) {
                tracing::warn!("Failed to write step summary to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    /// Report an error raised before an outcome could be computed
    pub fn report_error(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.out, "{}", workflow_command("error", message))?;
        self.out.flush()?;

        if let Some(path) = &self.output_path {
            if let Err(e) = append(path, "outcome=error\n") {
                tracing::warn!("Failed to write step outputs to {}: {}", path.display(), e);
            }
        }

        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

fn append(path: &Path, body: &str) -> io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(body.as_bytes())
}
