mod debug_report;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inseason::{Options, YearBoundary, build_matrix, parse_verbose_with, produce_from_path, read_records};
use std::fs::File;
use std::io::{self, BufWriter, IsTerminal, Read};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "inseason", version, about = "Turn produce season descriptions into day-of-year sets.")]
struct Cli {
    /// Wrap ranges that run across the year end ("november till february") instead of rejecting them.
    #[arg(long, global = true)]
    wrap_year: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse one description and print the resolved season.
    Parse {
        /// Description text. Read from stdin when omitted.
        input: Vec<String>,

        /// Print the dates as JSON.
        #[arg(long)]
        json: bool,

        /// Force ANSI color output.
        #[arg(long, conflicts_with = "no_color")]
        color: bool,

        /// Disable ANSI color output.
        #[arg(long)]
        no_color: bool,
    },
    /// Build the day × state matrix from a `state<TAB>description` file.
    Matrix {
        /// Record file. Read from stdin when omitted.
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// CSV destination. Defaults to `<produce>.csv` with --produce, stdout otherwise.
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Season page path the records came from, e.g. `/when-is-apple-season/`.
        #[arg(long)]
        produce: Option<String>,
    },
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let options = Options { year_boundary: if cli.wrap_year { YearBoundary::Wrap } else { YearBoundary::Reject } };

    match cli.command {
        Command::Parse { input, json, color, no_color } => {
            let text = if input.is_empty() { read_stdin()? } else { input.join(" ") };
            let text = text.to_lowercase();
            let text = text.trim();

            let details = parse_verbose_with(text, &options).with_context(|| format!("failed to parse \"{text}\""))?;
            if json {
                println!("{}", serde_json::to_string_pretty(&details.dates)?);
            } else {
                let color = color || (!no_color && io::stdout().is_terminal());
                debug_report::print_run(&details, color);
            }
        }
        Command::Matrix { input, output, produce } => {
            let text = match &input {
                Some(path) => std::fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?,
                None => read_stdin()?,
            };
            let records = read_records(&text)?;
            let matrix = build_matrix(&records, &options)?;

            let output = output.or_else(|| produce.as_deref().map(|p| PathBuf::from(format!("{}.csv", produce_from_path(p)))));
            match output {
                Some(path) => {
                    let file = File::create(&path).with_context(|| format!("creating {}", path.display()))?;
                    matrix.write_csv(BufWriter::new(file))?;
                    log::info!("wrote {} records to {}", records.len(), path.display());
                }
                None => matrix.write_csv(io::stdout().lock())?,
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).context("failed to read stdin")?;
    Ok(buffer)
}
