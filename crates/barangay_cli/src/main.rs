//! `barangay` command-line entry point.
//!
//! # Responsibility
//! - Load configuration, start logging, and open the seeded stores.
//! - Map subcommands onto core services, renderers, and the briefing.

mod cli;
mod output;

use anyhow::{bail, Context, Result};
use barangay_core::{
    init_logging, load_dotenv, print_job, render_case_file, render_document, AppConfig,
    Barangay, BriefingProvider, Clock, Confirm, DailyBriefing, DashboardSummary, DeleteOutcome,
    GeminiProvider, HtmlFileTarget, PrintError, PrintJob, Record, RecordData, RecordId,
    RecordKind, RecordService, StoreOptions, SystemClock, UnconfiguredProvider,
};
use clap::Parser;
use log::warn;
use std::io::{BufRead, Write};
use std::sync::Arc;
use std::time::Duration;

use crate::cli::{CliArgs, Command, RecordCommand};

#[tokio::main]
async fn main() -> Result<()> {
    load_dotenv();
    let args = CliArgs::parse();

    let mut config = AppConfig::from_env().context("failed to load configuration")?;
    if let Some(ms) = args.latency_ms {
        config.api_latency = Duration::from_millis(ms);
    }
    if let Some(level) = args.log_level.as_deref() {
        config.log_level = level.to_string();
    }
    if let Err(err) = init_logging(&config.log_level, config.log_dir.as_deref()) {
        eprintln!("warning: logging disabled: {err}");
    }

    let options = StoreOptions::default().with_latency(config.api_latency);
    let now = SystemClock.now();

    match args.command {
        // The briefing needs no record stores.
        Command::Briefing { user } => run_briefing(&config, &user).await,
        Command::Records(command) => {
            let barangay = Barangay::open(options);
            if barangay.is_loading() {
                eprintln!("Loading records...");
            }
            barangay.ready().await;
            run_record_command(command, &barangay, &config, now).await?;
        }
    }
    Ok(())
}

async fn run_record_command(
    command: RecordCommand,
    barangay: &Barangay,
    config: &AppConfig,
    now: chrono::DateTime<chrono::Utc>,
) -> Result<()> {
    match command {
        RecordCommand::Summary { json } => {
            let summary = DashboardSummary::collect(barangay, now).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                output::print_summary(&summary);
            }
        }
        RecordCommand::List { kind, search, json } => {
            let term = search.unwrap_or_default();
            match kind {
                RecordKind::Residents => {
                    let records = barangay.residents.search(&term).await;
                    emit(&records, json, |r| output::resident_row(r, now))?;
                }
                RecordKind::Documents => {
                    let records = barangay.documents.search(&term).await;
                    emit(&records, json, output::document_row)?;
                }
                RecordKind::Blotter => {
                    let records = barangay.cases.search(&term).await;
                    emit(&records, json, output::case_row)?;
                }
                RecordKind::Health => {
                    let records = barangay.health.search(&term).await;
                    emit(&records, json, output::health_row)?;
                }
                RecordKind::Finance => {
                    let records = output::ledger_view(barangay.finance.search(&term).await);
                    emit(&records, json, output::transaction_row)?;
                }
            }
        }
        RecordCommand::Delete { kind, id, yes } => {
            let id = RecordId::from(id);
            let confirm = StdinConfirm { assume_yes: yes };
            let outcome = match kind {
                RecordKind::Residents => delete(&barangay.residents, &id, &confirm).await?,
                RecordKind::Documents => delete(&barangay.documents, &id, &confirm).await?,
                RecordKind::Blotter => delete(&barangay.cases, &id, &confirm).await?,
                RecordKind::Health => delete(&barangay.health, &id, &confirm).await?,
                RecordKind::Finance => delete(&barangay.finance, &id, &confirm).await?,
            };
            match outcome {
                DeleteOutcome::Deleted => println!("Deleted {kind} record {id}."),
                DeleteOutcome::Cancelled => println!("Cancelled."),
            }
        }
        RecordCommand::PrintDocument { id } => {
            let Some(record) = barangay.documents.get(&RecordId::from(id.as_str())).await else {
                bail!("no document record with id `{id}`");
            };
            print_to_dir(&render_document(&record, &config.letterhead), config)?;
        }
        RecordCommand::PrintCase { id } => {
            let Some(record) = barangay.cases.get(&RecordId::from(id.as_str())).await else {
                bail!("no case record with id `{id}`");
            };
            print_to_dir(&render_case_file(&record, &config.letterhead), config)?;
        }
    }
    Ok(())
}

async fn run_briefing(config: &AppConfig, user: &str) {
    let provider: Arc<dyn BriefingProvider> = match config.gemini_api_key.clone() {
        Some(key) => Arc::new(GeminiProvider::new(key, config.gemini_model.clone())),
        None => {
            warn!("event=briefing_config module=cli status=unconfigured");
            Arc::new(UnconfiguredProvider)
        }
    };
    let briefing = DailyBriefing::new(provider).with_barangay_name(config.barangay_name.clone());
    println!("{}", briefing.get_daily_briefing(user).await);
}

fn emit<T: RecordData>(
    records: &[Record<T>],
    json: bool,
    row: impl Fn(&Record<T>) -> String,
) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(records)?);
    } else {
        output::print_rows(records, row);
    }
    Ok(())
}

async fn delete<T: RecordData>(
    service: &RecordService<T>,
    id: &RecordId,
    confirm: &StdinConfirm,
) -> Result<DeleteOutcome> {
    service
        .delete(id, confirm)
        .await
        .with_context(|| format!("failed to delete {} record `{id}`", T::KIND))
}

fn print_to_dir(job: &PrintJob, config: &AppConfig) -> Result<()> {
    let target = HtmlFileTarget::new(config.print_dir.clone());
    match print_job(&target, job) {
        Ok(Some(path)) => println!("Wrote {}", path.display()),
        Ok(None) => println!("Printed {}", job.title),
        Err(PrintError::Blocked { notice }) => bail!(notice),
        Err(err) => return Err(err).context("failed to print"),
    }
    Ok(())
}

/// Reads a y/N answer from stdin.
struct StdinConfirm {
    assume_yes: bool,
}

impl Confirm for StdinConfirm {
    fn confirm(&self, prompt: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        print!("{prompt} [y/N] ");
        if std::io::stdout().flush().is_err() {
            return false;
        }
        let mut answer = String::new();
        if std::io::stdin().lock().read_line(&mut answer).is_err() {
            return false;
        }
        matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
    }
}
