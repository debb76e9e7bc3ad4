// crates/tabtrim-cli/src/main.rs

use std::path::PathBuf;

use clap::Parser;
use tabtrim_core::{trim_stream, TrimOptions, DEFAULT_TAB_WIDTH};

mod io;

#[derive(Parser)]
#[command(name = "tabtrim")]
#[command(about = "Expand tabs to spaces and trim trailing whitespace", long_about = None)]
pub struct Cli {
    /// Tab width in columns
    #[arg(short = 't', long, default_value_t = DEFAULT_TAB_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub tab_width: u32,

    /// Keep tabs; do not convert them to spaces
    #[arg(short = 'k', long)]
    pub keep_tabs: bool,

    /// With --keep-tabs: advance the column to the true next tab stop for a
    /// kept tab, instead of by a single column
    #[arg(long, requires = "keep_tabs")]
    pub exact_tab_stops: bool,

    /// Input file. Reads stdin when omitted.
    #[arg(short = 'i', long = "in")]
    pub input: Option<PathBuf>,

    /// Output file. Writes stdout when omitted.
    #[arg(short = 'o', long = "out")]
    pub output: Option<PathBuf>,

    /// Print a run summary to stderr
    #[arg(long)]
    pub stats: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run(cli)
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let opts = TrimOptions {
        tab_width: cli.tab_width,
        keep_tabs: cli.keep_tabs,
        exact_tab_stops: cli.exact_tab_stops,
    };

    let input = io::open_input(cli.input.as_deref())?;
    let output = io::open_output(cli.output.as_deref())?;

    let stats = trim_stream(input, output, opts)?;

    if cli.stats {
        eprintln!(
            "trim ok: in_bytes={} out_bytes={} tabs={} trimmed={} lines={}",
            stats.bytes_in, stats.bytes_out, stats.tabs, stats.trimmed, stats.terminators
        );
    }

    Ok(())
}
