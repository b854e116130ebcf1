//! parse – IPPcode18 to XML translator (CLI)

use std::{
    fs,
    io::{self, Read, Write},
    path::PathBuf,
    process::ExitCode,
};

use anyhow::{Context, Result};
use clap::{
    ArgMatches, CommandFactory, FromArgMatches, Parser, error::ErrorKind, parser::ValueSource,
};
use tracing_subscriber::EnvFilter;

use ippcode18::{Metric, ParseError, StatsConfig};

/// Reads IPPcode18 source, checks its lexical and syntactic validity and
/// prints the XML representation of the program to standard output.
#[derive(Parser, Debug)]
#[command(author, version, about = "IPPcode18 to XML translator")]
struct Cli {
    /// Source file (default: standard input)
    input: Option<PathBuf>,

    /// Statistics file, one value per requested metric
    #[arg(long, value_name = "FILE")]
    stats: Option<PathBuf>,

    /// Report lines holding an instruction
    #[arg(long, action = clap::ArgAction::Count)]
    loc: u8,

    /// Report lines holding a comment
    #[arg(long, action = clap::ArgAction::Count)]
    comments: u8,
}

fn main() -> ExitCode {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err.downcast_ref::<ParseError>().map_or(99, ParseError::exit_code);
            ExitCode::from(code)
        }
    }
}

fn run() -> Result<()> {
    let Some(config) = configure()? else {
        return Ok(());
    };

    let source = read_source(config.input.as_ref())?;
    let translation = ippcode18::translate(&source)?;

    config.stats.write(&translation.counters)?;

    let xml = translation.program.to_xml();
    io::stdout()
        .lock()
        .write_all(xml.as_bytes())
        .map_err(ParseError::Output)?;
    Ok(())
}

struct Config {
    input: Option<PathBuf>,
    stats: StatsConfig,
}

/// Parse the command line. `None` once help or version has been printed.
fn configure() -> Result<Option<Config>> {
    let matches = match Cli::command().try_get_matches() {
        Ok(m) => m,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print().context("cannot print help")?;
            return Ok(None);
        }
        Err(e) => {
            let _ = e.print();
            return Err(ParseError::Config(format!("{:?}", e.kind())).into());
        }
    };
    let cli = Cli::from_arg_matches(&matches)
        .map_err(|e| ParseError::Config(format!("{:?}", e.kind())))?;

    let metrics = requested_metrics(&matches, &cli);
    let stats = StatsConfig::new(metrics, cli.stats)?;
    Ok(Some(Config { input: cli.input, stats }))
}

/// Metrics in command-line order. A repeated flag appears once per
/// occurrence so `StatsConfig::new` rejects it.
fn requested_metrics(matches: &ArgMatches, cli: &Cli) -> Vec<Metric> {
    let mut requested: Vec<(usize, Metric)> = Vec::new();
    for (id, metric, count) in [
        ("loc", Metric::Loc, cli.loc),
        ("comments", Metric::Comments, cli.comments),
    ] {
        if matches.value_source(id) != Some(ValueSource::CommandLine) {
            continue;
        }
        let index = matches.index_of(id).unwrap_or(0);
        requested.extend((0..count).map(|_| (index, metric)));
    }
    requested.sort_by_key(|&(i, _)| i);
    requested.into_iter().map(|(_, m)| m).collect()
}

fn read_source(input: Option<&PathBuf>) -> Result<String> {
    let source = match input {
        Some(path) => fs::read_to_string(path)
            .map_err(ParseError::Input)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .map_err(ParseError::Input)
                .context("reading standard input")?;
            buf
        }
    };
    Ok(source)
}
