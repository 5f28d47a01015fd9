//! Output formatting for different formats.

use clap::ValueEnum;
use colored::Colorize;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tikblock_core::{SyncSummary, SystemResource, UploadOutcome};
use tikblock_sync::{Phase, Rejection, Reporter};

/// Available output formats.
#[derive(Debug, Clone, Copy, Default, ValueEnum, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Colored console lines
    #[default]
    Pretty,
    /// One JSON object per line
    Json,
}

impl FromStr for OutputFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => anyhow::bail!(
                "Unknown output format: {}\n\
                 Valid formats: pretty, json",
                s
            ),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pretty => write!(f, "pretty"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// JSON line for one upload attempt
#[must_use]
pub fn outcome_json(outcome: &UploadOutcome) -> serde_json::Value {
    match &outcome.result {
        Ok(receipt) => serde_json::json!({
            "position": outcome.position,
            "address": outcome.entry.address,
            "list": outcome.entry.list,
            "success": true,
            "status": receipt.status,
            "headers": headers_json(&receipt.headers),
            "body": receipt.body,
        }),
        Err(err) => serde_json::json!({
            "position": outcome.position,
            "address": outcome.entry.address,
            "list": outcome.entry.list,
            "success": false,
            "status": err.status_code(),
            "error": err.to_string(),
        }),
    }
}

/// Response headers as a JSON object; a repeated name keeps its last value
fn headers_json(headers: &[(String, String)]) -> serde_json::Value {
    headers
        .iter()
        .map(|(name, value)| (name.clone(), serde_json::Value::from(value.as_str())))
        .collect::<serde_json::Map<_, _>>()
        .into()
}

/// Console line for one upload attempt
#[must_use]
pub fn outcome_line(outcome: &UploadOutcome) -> String {
    let address = outcome.entry.address.to_string();
    match &outcome.result {
        Ok(receipt) => format!("IP: {} - {}", address.cyan(), receipt.status.to_string().green()),
        Err(err) => format!("IP: {} - {} {}", address.cyan(), "ERROR:".red().bold(), err),
    }
}

/// Prints a run as it happens.
pub struct ConsoleReporter {
    format: OutputFormat,
    verbose: bool,
    reached: Phase,
}

impl ConsoleReporter {
    /// Reporter writing `format` to stdout
    #[must_use]
    pub const fn new(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            reached: Phase::NotStarted,
        }
    }

    /// Last phase the run entered
    #[must_use]
    pub const fn reached(&self) -> Phase {
        self.reached
    }

    /// Final counters
    pub fn summary(&self, summary: &SyncSummary) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "summary": summary }));
            }
            OutputFormat::Pretty => {
                println!();
                println!(
                    "{} {} added, {} failed, {} skipped lines in {}s",
                    "Done:".bold(),
                    summary.succeeded.to_string().green(),
                    if summary.failed > 0 {
                        summary.failed.to_string().red()
                    } else {
                        summary.failed.to_string().normal()
                    },
                    summary.rejected.to_string().yellow(),
                    summary.elapsed().num_seconds()
                );
            }
        }
    }
}

impl Reporter for ConsoleReporter {
    fn phase(&mut self, phase: Phase) {
        self.reached = phase;
        if self.format == OutputFormat::Pretty && phase == Phase::Uploading {
            println!("{}", "Uploading entries...".bold());
        }
    }

    fn verified(&mut self, resource: &SystemResource) {
        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::json!({ "verified": resource }));
            }
            OutputFormat::Pretty => {
                println!("{} {}", "Login OK:".green().bold(), resource.describe());
            }
        }
    }

    fn rejected(&mut self, line_number: usize, line: &str, reason: Rejection) {
        match self.format {
            OutputFormat::Json => {
                let value = serde_json::json!({
                    "line": line_number,
                    "rejected": reason.to_string(),
                    "text": line,
                });
                println!("{value}");
            }
            OutputFormat::Pretty if self.verbose => {
                let message = format!("line {line_number}: skipped ({reason}): {line:?}");
                println!("{}", message.dimmed());
            }
            OutputFormat::Pretty => {}
        }
    }

    fn outcome(&mut self, outcome: &UploadOutcome) {
        match self.format {
            OutputFormat::Json => println!("{}", outcome_json(outcome)),
            OutputFormat::Pretty => {
                println!("{}", outcome_line(outcome));
                if let Ok(receipt) = &outcome.result {
                    for (name, value) in &receipt.headers {
                        println!("    {}: {}", name.dimmed(), value);
                    }
                    if !receipt.body.is_empty() {
                        println!("    {}", receipt.body);
                    }
                }
            }
        }
    }
}
