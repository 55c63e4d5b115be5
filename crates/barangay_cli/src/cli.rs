use barangay_core::RecordKind;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "barangay", version, about = "Barangay records console")]
pub struct CliArgs {
    /// Simulated store latency in milliseconds (overrides BARANGAY_API_LATENCY_MS).
    #[arg(long, global = true)]
    pub latency_ms: Option<u64>,

    /// Log level (overrides BARANGAY_LOG_LEVEL).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Fetch the AI daily briefing.
    Briefing {
        #[arg(long, short, default_value = "Captain")]
        user: String,
    },
    #[command(flatten)]
    Records(RecordCommand),
}

/// Commands that read or change the seeded record stores.
#[derive(Subcommand, Debug)]
pub enum RecordCommand {
    /// Command center overview across all record kinds.
    Summary {
        #[arg(long)]
        json: bool,
    },
    /// List one kind's records, optionally filtered.
    List {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Delete one record after confirmation.
    Delete {
        #[arg(value_parser = parse_kind)]
        kind: RecordKind,
        id: String,
        /// Skip the confirmation prompt.
        #[arg(long, short)]
        yes: bool,
    },
    /// Render an issued document to the print directory.
    PrintDocument { id: String },
    /// Render a Lupon case file to the print directory.
    PrintCase { id: String },
}

fn parse_kind(value: &str) -> Result<RecordKind, String> {
    RecordKind::parse(value).ok_or_else(|| {
        format!("unknown record kind `{value}`; expected residents|documents|blotter|health|finance")
    })
}
