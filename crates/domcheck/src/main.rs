//! domcheck - Main Entry Point
//!
//! Classifies company/domain pairs in a CSV file or Excel workbook and
//! exports the annotated table.
//!
//! Usage:
//!     domcheck leads.csv --company-column Company --domain-column Email
//!     domcheck leads.csv -c Company -d Website --output checked.csv
//!     domcheck leads.csv -c Company -d Website --format json > checked.json
//!     domcheck leads.xlsx -c Company -d Email --format xlsx -o checked.xlsx

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::Parser;
use domcheck::{
    annotate, render_table, write_dataset, BatchConfig, Dataset, ExportFormat, OutputColumns,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser, Debug)]
#[command(name = "domcheck")]
#[command(about = "Check whether company names match their domains or email addresses")]
#[command(version)]
struct Args {
    /// CSV or Excel file to classify (first sheet of .xlsx/.xls/.ods)
    input: PathBuf,

    /// Header of the company name column
    #[arg(short, long, env = "DOMCHECK_COMPANY_COLUMN")]
    company_column: String,

    /// Header of the domain column (domains, URLs or email addresses)
    #[arg(short, long, env = "DOMCHECK_DOMAIN_COLUMN")]
    domain_column: String,

    /// Where to write the annotated table (stdout if omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Export format
    #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv, env = "DOMCHECK_FORMAT")]
    format: ExportFormat,

    /// Field delimiter of CSV input
    #[arg(long, default_value_t = ',')]
    delimiter: char,

    /// Rows to show in the preview table on stderr (0 to disable)
    #[arg(long, default_value_t = 50)]
    preview: usize,

    /// Classify rows on a single thread
    #[arg(long)]
    no_parallel: bool,

    /// Header of the appended status column
    #[arg(long, default_value = "Domain_Check_Status")]
    status_column: String,

    /// Header of the appended score column
    #[arg(long, default_value = "Domain_Check_Score")]
    score_column: String,

    /// Header of the appended reason column
    #[arg(long, default_value = "Domain_Check_Reason")]
    reason_column: String,

    /// Log level (debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, default_value = "info", env = "DOMCHECK_LOG_LEVEL")]
    log_level: String,
}

impl Args {
    fn batch_config(&self) -> BatchConfig {
        BatchConfig::new(&self.company_column, &self.domain_column)
            .with_parallel(!self.no_parallel)
            .with_output(OutputColumns {
                status: self.status_column.clone(),
                score: self.score_column.clone(),
                reason: self.reason_column.clone(),
            })
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "domcheck={0},domcheck_core={0}",
            args.log_level
        ))
    });

    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    run(&args).map_err(|e| {
        error!("{}", e);
        e
    })
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if !args.delimiter.is_ascii() {
        return Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            args.delimiter
        )
        .into());
    }

    let config = args.batch_config();
    config.validate()?;

    info!("Reading {}", args.input.display());
    let dataset = Dataset::open(&args.input, args.delimiter as u8)?;

    let annotated = annotate(dataset, &config)?;

    if args.preview > 0 {
        eprintln!("{}", render_table(&annotated.preview(args.preview)));
    }

    let numeric = [config.output.score.as_str()];
    match &args.output {
        Some(path) => {
            let mut writer = BufWriter::new(File::create(path)?);
            write_dataset(annotated.dataset(), args.format, &numeric, &mut writer)?;
            writer.flush()?;
            info!("Wrote {} rows to {}", annotated.dataset().len(), path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut writer = BufWriter::new(stdout.lock());
            write_dataset(annotated.dataset(), args.format, &numeric, &mut writer)?;
            writer.flush()?;
        }
    }

    Ok(())
}
