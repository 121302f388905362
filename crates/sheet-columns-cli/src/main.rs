//! Sheet Columns CLI - print and walk spreadsheet column labels

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use sheet_columns_core::{
    letters_to_ordinal, normalize, ColumnGenerator, ColumnSequence, GeneratorOptions, Position,
};
use std::io::{self, BufWriter, Write};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "columns")]
#[command(author, version, about = "Spreadsheet column label generator")]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print column labels, one per line
    List {
        /// Number of labels to print
        #[arg(short, long, default_value = "26")]
        count: u64,

        /// Columns to skip before the first label
        #[arg(short, long, default_value = "0")]
        skip: u64,

        /// Row number appended to every label
        #[arg(short, long)]
        row: Option<u32>,

        /// Print a JSON array instead of one label per line
        #[arg(short, long)]
        json: bool,
    },

    /// Print every label up to and including TARGET
    Walk {
        /// Column to stop at (case and digits are ignored, e.g. "ad" or "AD12")
        target: String,

        /// Columns to skip before the first label
        #[arg(short, long, default_value = "0")]
        skip: u64,

        /// Row number appended to every label
        #[arg(short, long)]
        row: Option<u32>,

        /// Give up after this many labels
        #[arg(short, long, default_value = "1000000")]
        limit: u64,
    },

    /// Print the zero-based index of a column label
    Index {
        /// Column label, e.g. "XFD" or "b12"
        label: String,
    },

    /// Print the column label at a zero-based index
    Label {
        /// Column index (A = 0)
        ordinal: u64,

        /// Row number appended to the label
        #[arg(short, long)]
        row: Option<u32>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut out = BufWriter::new(io::stdout().lock());

    match cli.command {
        Commands::List {
            count,
            skip,
            row,
            json,
        } => list(&mut out, &options(row, skip), count, json)?,
        Commands::Walk {
            target,
            skip,
            row,
            limit,
        } => walk(&mut out, &options(row, skip), &target, limit)?,
        Commands::Index { label } => index(&mut out, &label)?,
        Commands::Label { ordinal, row } => label(&mut out, ordinal, row)?,
    }

    out.flush().context("Failed to write to stdout")
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn options(row: Option<u32>, skip: u64) -> GeneratorOptions {
    let options = GeneratorOptions::new().with_skip(skip);
    match row {
        Some(row) => options.with_row_number(row),
        None => options,
    }
}

fn list<W: Write>(out: &mut W, options: &GeneratorOptions, count: u64, json: bool) -> Result<()> {
    tracing::debug!("Listing {count} columns (json: {json})");
    let mut generator = ColumnGenerator::with_options(options);

    if json {
        let count = usize::try_from(count).context("Count too large for JSON output")?;
        let labels: Vec<String> = generator.labels().take(count).collect();
        let json = serde_json::to_string(&labels).context("Failed to serialize labels")?;
        return writeln!(out, "{json}").context("Failed to write output");
    }

    for _ in 0..count {
        writeln!(out, "{}", generator.current(true)).context("Failed to write output")?;
    }

    Ok(())
}

/// Write every label up to and including `target`
///
/// A failed write does not stop the walk: the remaining labels are still
/// generated (up to `limit`) and the write error is reported afterwards.
fn walk<W: Write>(
    out: &mut W,
    options: &GeneratorOptions,
    target: &str,
    limit: u64,
) -> Result<()> {
    tracing::debug!("Walking to {target} (limit: {limit})");
    let mut generator = ColumnGenerator::with_options(options);
    let mut write_result = Ok(());

    generator
        .try_for_each_until(target, limit, |label| {
            if write_result.is_ok() {
                write_result = writeln!(out, "{label}");
            }
        })
        .with_context(|| format!("Failed to walk to '{target}'"))?;

    write_result.context("Failed to write output")
}

fn index<W: Write>(out: &mut W, label: &str) -> Result<()> {
    let letters = normalize(label);
    let ordinal =
        letters_to_ordinal(&letters).with_context(|| format!("Cannot index column '{label}'"))?;
    tracing::debug!("Column {label} has index {ordinal}");
    writeln!(out, "{ordinal}").context("Failed to write output")
}

fn label<W: Write>(out: &mut W, ordinal: u64, row: Option<u32>) -> Result<()> {
    let label = Position::from_ordinal(ordinal).label(row);
    tracing::debug!("Index {ordinal} is column {label}");
    writeln!(out, "{label}").context("Failed to write output")
}
