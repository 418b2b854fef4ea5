use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use regroup::report::{render, run_length_encode, summarize};
use regroup::GroupingConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "regroup", about = "Group consecutive lines that share a key")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log at debug level (overridden by RUST_LOG).
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Args, Debug)]
struct Output {
    /// Compare keys case-insensitively.
    #[arg(short = 'i', long)]
    ignore_case: bool,
    /// Emit groupings from last to first.
    #[arg(short, long)]
    reverse: bool,
    /// Print the lines of each grouping beneath its count.
    #[arg(short, long)]
    members: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Group runs of identical lines.
    Runs {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,
        #[command(flatten)]
        output: Output,
    },
    /// Group runs of lines sharing a field or prefix.
    By {
        /// Input file (stdin when omitted).
        input: Option<PathBuf>,
        /// 1-based field to group by.
        #[arg(short, long, conflicts_with = "prefix")]
        field: Option<usize>,
        /// Field delimiter (whitespace when omitted).
        #[arg(short, long, requires = "field")]
        delimiter: Option<char>,
        /// Group by the first N characters.
        #[arg(short, long)]
        prefix: Option<usize>,
        #[command(flatten)]
        output: Output,
    },
    /// Run-length encode a string.
    Encode {
        /// Text to encode (stdin when omitted).
        text: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Runs { input, output } => {
            run_grouping(input, apply_output(GroupingConfig::whole_lines(), &output))?
        }
        Commands::By {
            input,
            field,
            delimiter,
            prefix,
            output,
        } => {
            let config = match (field, prefix) {
                (_, Some(length)) => GroupingConfig::by_prefix(length)?,
                (Some(index), None) => GroupingConfig::by_field(index, delimiter)?,
                (None, None) => GroupingConfig::by_field(1, delimiter)?,
            };
            run_grouping(input, apply_output(config, &output))?
        }
        Commands::Encode { text } => run_encode(text)?,
    }

    Ok(())
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

fn apply_output(config: GroupingConfig, output: &Output) -> GroupingConfig {
    config
        .with_ignore_case(output.ignore_case)
        .with_reverse(output.reverse)
        .with_members(output.members)
}

fn run_grouping(input: Option<PathBuf>, config: GroupingConfig) -> Result<()> {
    let lines = read_lines(input.as_ref())?;
    info!(lines = lines.len(), key = ?config.key, "grouping input");
    let summaries = summarize(&lines, &config);
    print!("{}", render(&summaries, config.show_members));
    Ok(())
}

fn run_encode(text: Option<String>) -> Result<()> {
    let text = match text {
        Some(text) => text,
        None => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read text from stdin")?;
            buffer.trim_end_matches('\n').to_string()
        }
    };
    println!("{}", run_length_encode(&text));
    Ok(())
}

fn read_lines(path: Option<&PathBuf>) -> Result<Vec<String>> {
    let reader: Box<dyn BufRead> = match path {
        Some(path) => Box::new(BufReader::new(File::open(path).with_context(|| {
            format!("failed to open input file {}", path.display())
        })?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    reader
        .lines()
        .enumerate()
        .map(|(idx, line)| line.with_context(|| format!("failed to read line {}", idx + 1)))
        .collect()
}
