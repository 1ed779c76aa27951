mod commands;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use somalid_core::RawRecord;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "somalid")]
#[command(version, about = "Somali national ID validator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate a single identity record
    Validate {
        #[command(flatten)]
        record: RecordArgs,

        /// Path to a rule file (YAML or TOML)
        #[arg(short, long)]
        rule: Option<String>,

        /// Language for the error message: en, so, ar
        #[arg(short, long, default_value = "en")]
        lang: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },

    /// Mask an id number for display
    Mask {
        /// Id number to mask
        #[arg(long)]
        id: String,

        /// Leading digits to keep
        #[arg(long, default_value_t = 2)]
        head: usize,

        /// Trailing digits to keep
        #[arg(long, default_value_t = 3)]
        tail: usize,
    },

    /// Validate every record in a JSON or YAML file
    Batch {
        /// Path to the records file (JSON or YAML list)
        records: String,

        /// Path to a rule file (YAML or TOML)
        #[arg(short, long)]
        rule: Option<String>,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Redact personal data in the output
        #[arg(long)]
        redact: bool,
    },

    /// Check a rule file and print the effective rule
    Check {
        /// Path to the rule file (YAML or TOML)
        rule: String,

        /// Output format: text, json
        #[arg(short, long, default_value = "text")]
        format: String,
    },
}

/// Fields of one record, as given on the command line.
#[derive(Args)]
struct RecordArgs {
    /// National id number
    #[arg(long)]
    id: String,

    /// Full name
    #[arg(long)]
    name: String,

    /// Sex: male, female, m or f
    #[arg(long)]
    sex: String,

    /// Date of birth (dd-mm-yyyy, dd/mm/yyyy, yyyy-mm-dd or dd.mm.yyyy)
    #[arg(long)]
    dob: String,

    /// Date of issue
    #[arg(long)]
    issue: String,

    /// Date of expiry
    #[arg(long)]
    expiry: String,
}

impl From<RecordArgs> for RawRecord {
    fn from(args: RecordArgs) -> Self {
        RawRecord::new(args.id, args.name, args.sex, args.dob, args.issue, args.expiry)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let log_level = if cli.verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };

    // Logs go to stderr so JSON on stdout stays parseable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_level(true)
                .compact(),
        )
        .with(tracing_subscriber::filter::LevelFilter::from_level(
            log_level,
        ))
        .init();

    // Execute command
    match cli.command {
        Commands::Validate {
            record,
            rule,
            lang,
            format,
        } => commands::validate::execute(record.into(), rule.as_deref(), &lang, &format),

        Commands::Mask { id, head, tail } => commands::mask::execute(&id, head, tail),

        Commands::Batch {
            records,
            rule,
            format,
            redact,
        } => commands::batch::execute(&records, rule.as_deref(), &format, redact),

        Commands::Check { rule, format } => commands::check::execute(&rule, &format),
    }
}
