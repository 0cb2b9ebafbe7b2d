use anyhow::Result;
use clap::Parser;
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

mod commands;
mod config;

use config::{Config, CONFIG_PATH_ENV};

const USAGE: &str = "Usage: tdsearch <index_directory>";

/// Rank the documents of a term-document index by cosine similarity.
///
/// The query is read from standard input until end of stream. Every
/// document is printed with its similarity to the query, best match first.
/// Settings come from `TDSEARCH_*` environment variables and the config file.
#[derive(Debug, Parser)]
#[command(name = "tdsearch", disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Index directory with sorted_terms.txt, sorted_documents.txt and td_matrix.txt
    #[arg(allow_hyphen_values = true)]
    index_dir: PathBuf,
}

fn main() -> ExitCode {
    // Exactly one argument, taken as a path even when it looks like a flag.
    let Ok(cli) = Cli::try_parse() else {
        println!("{USAGE}");
        return ExitCode::from(1);
    };

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            report(&err);
            ExitCode::from(1)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config_path = std::env::var_os(CONFIG_PATH_ENV).map(PathBuf::from);
    let config = Config::load(config_path.as_deref())?;

    init_logging(&config.log_level);

    commands::run_search(&cli.index_dir, &config.files)
}

fn init_logging(level: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .with_writer(io::stderr)
        .init();
}

// A missing index artifact is reported on stdout, everything else on stderr.
fn report(err: &anyhow::Error) {
    match err.downcast_ref::<tdsearch_core::Error>() {
        Some(core_err) if core_err.is_not_found() => println!("Error: {core_err}"),
        _ => eprintln!("Error: {err:#}"),
    }
}
