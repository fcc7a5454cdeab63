use clap::{Args, Parser, Subcommand, ValueEnum};
use miette::{IntoDiagnostic, Result, miette};
use payrecon::config::ReconConfig;
use payrecon::domain::currency::LocalCurrencyMethods;
use payrecon::domain::money::{ExchangeRate, round2};
use payrecon::domain::ports::AmountParser;
use payrecon::infrastructure::locale_parser::LocaleAmountParser;
use payrecon::interfaces::csv::entry_reader::EntryReader;
use payrecon::interfaces::csv::outcome_writer::{CaseOutcome, OutcomeWriter};
use payrecon::interfaces::csv::record_reader::RecordReader;
use payrecon::{reconcile_record, validate_submission};
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Reconcile persisted case records and report each case's payment status
    Reconcile {
        /// Case records CSV file
        input: PathBuf,

        #[arg(long, value_enum, default_value_t = Format::Csv)]
        format: Format,

        #[command(flatten)]
        methods: MethodArgs,
    },
    /// Check a payment submission against the billed total
    Validate {
        /// Payment entries CSV file (method, amount, reference)
        input: PathBuf,

        /// Billed total in base currency
        #[arg(long)]
        billed: String,

        /// Units of local currency per unit of base currency
        #[arg(long)]
        rate: Option<String>,

        #[command(flatten)]
        methods: MethodArgs,
    },
}

#[derive(Args)]
struct MethodArgs {
    /// TOML file listing the local-currency payment methods
    #[arg(long)]
    config: Option<PathBuf>,

    /// Payment method paid in local currency (repeatable)
    #[arg(long = "local-method")]
    local_methods: Vec<String>,
}

impl MethodArgs {
    fn load(self) -> Result<LocalCurrencyMethods> {
        let mut config = match self.config {
            Some(path) => ReconConfig::load(path).into_diagnostic()?,
            None => ReconConfig::default(),
        };
        config.extend_methods(self.local_methods);

        let methods = config.local_currency_methods();
        if methods.is_empty() {
            tracing::warn!(
                "no local-currency methods configured, every payment counts as base currency"
            );
        }
        Ok(methods)
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Csv,
    Json,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .with_ansi(false)
        .init();

    match Cli::parse().command {
        Command::Reconcile {
            input,
            format,
            methods,
        } => run_reconcile(input, format, methods.load()?),
        Command::Validate {
            input,
            billed,
            rate,
            methods,
        } => run_validate(input, &billed, rate.as_deref(), methods.load()?),
    }
}

fn run_reconcile(input: PathBuf, format: Format, methods: LocalCurrencyMethods) -> Result<()> {
    let file = File::open(input).into_diagnostic()?;
    let reader = RecordReader::new(file);

    let stdout = io::stdout();
    let mut writer = match format {
        Format::Csv => OutcomeWriter::csv(stdout.lock()),
        Format::Json => OutcomeWriter::json_lines(stdout.lock()),
    };

    for (row, record) in reader.records().enumerate() {
        match record {
            Ok(record) => {
                let result = reconcile_record(&record, &methods);
                let outcome = CaseOutcome {
                    case_id: record.case_id,
                    result,
                };
                writer.write(&outcome).into_diagnostic()?;
            }
            Err(e) => {
                tracing::warn!(row = row + 1, error = %e, "skipping unreadable record");
            }
        }
    }

    writer.flush().into_diagnostic()?;
    Ok(())
}

fn run_validate(
    input: PathBuf,
    billed: &str,
    rate: Option<&str>,
    methods: LocalCurrencyMethods,
) -> Result<()> {
    let parser = LocaleAmountParser::new();
    let billed = parser
        .parse_amount(billed)
        .ok_or_else(|| miette!("cannot parse billed total '{billed}'"))?;
    let rate = ExchangeRate::parse(rate, &parser);

    let file = File::open(input).into_diagnostic()?;
    let entries = EntryReader::new(file)
        .entries()
        .collect::<payrecon::error::Result<Vec<_>>>()
        .into_diagnostic()?;

    let result = validate_submission(&entries, billed, rate, &methods);
    match result.error {
        Some(error) => Err(miette::Report::new(error)),
        None => {
            println!("valid,{:.2}", round2(result.total_paid_base));
            Ok(())
        }
    }
}
