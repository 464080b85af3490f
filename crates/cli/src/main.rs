//! textsearch CLI — index a directory of articles and search it.
//!
//! Two modes:
//! - **Dump mode**: `textsearch DIR` (or `textsearch DIR ANYTHING`) — print
//!   the index and titles, exit
//! - **Search mode**: `textsearch DIR -s` — read queries from stdin until an
//!   empty query or end of input

mod commands;
mod format;
mod repl;

use std::io::{self, Write};
use std::process;

use textsearch_core::{Error, SearchConfig};
use textsearch_search::{build_index, text_files_in_dir};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use commands::{build_cli, CliOptions};
use format::{format_dump, OutputMode};

fn main() {
    let matches = build_cli().get_matches();
    let opts = CliOptions::from_matches(&matches);

    let config = match load_config(&opts) {
        Ok(config) => config,
        Err(e) => {
            report_error(&e);
            process::exit(1);
        }
    };

    init_logging(opts.log_level.as_deref().unwrap_or(&config.log_level));

    process::exit(run(&opts, &config));
}

fn load_config(opts: &CliOptions) -> Result<SearchConfig, Error> {
    match &opts.config {
        Some(path) => SearchConfig::from_file(path),
        None => Ok(SearchConfig::default()),
    }
}

/// Logs go to stderr so stdout carries only search output.
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn run(opts: &CliOptions, config: &SearchConfig) -> i32 {
    let files = match text_files_in_dir(&opts.directory, &config.extension) {
        Ok(files) => files,
        Err(e) => {
            report_error(&e);
            return 1;
        }
    };

    let (index, titles) = match build_index(files) {
        Ok(built) => built,
        Err(e) => {
            report_error(&e);
            return 1;
        }
    };
    info!(target: "textsearch::cli", stats = %index.stats(&titles), "Ready");
    if let Some(mode) = &opts.mode {
        debug!(target: "textsearch::cli", mode = %mode, "Second argument is not -s, dumping");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    let written = if opts.search {
        repl::run_search_loop(&index, &titles, io::stdin().lock(), &mut out).map(|_| ())
    } else {
        let mode = if opts.json {
            OutputMode::Json
        } else {
            OutputMode::Human
        };
        writeln!(out, "{}", format_dump(&index, &titles, mode).trim_end())
    };

    match written.and_then(|()| out.flush()) {
        Ok(()) => 0,
        Err(e) if e.kind() == io::ErrorKind::BrokenPipe => 0,
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}

fn report_error(err: &Error) {
    match err {
        Error::DirectoryNotFound(_) => eprintln!("{}", err),
        _ => eprintln!("(error) {}", err),
    }
}
