//! Clap command definition.
//!
//! `textsearch <DIRECTORY> [-s]` plus output, config and logging flags.
//!
//! At most two positionals are accepted. A second one other than `-s` is
//! ignored and the index is dumped.

use clap::{Arg, ArgAction, Command};
use std::path::PathBuf;

/// Build the CLI command.
pub fn build_cli() -> Command {
    Command::new("textsearch")
        .about("Conjunctive keyword search over a directory of plain-text articles")
        .long_about(
            "Indexes the .txt files directly inside DIRECTORY. With -s, reads queries \
             from stdin and prints the articles containing every query term; otherwise \
             prints the index and the file name -> title mapping.",
        )
        .arg(
            Arg::new("directory")
                .required(true)
                .value_name("DIRECTORY")
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory of articles to index"),
        )
        .arg(
            Arg::new("search")
                .short('s')
                .help("Interactively search the index")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mode")
                .value_name("MODE")
                .hide(true)
                .allow_hyphen_values(true)
                .conflicts_with("search")
                .help("Any second argument other than -s selects the dump"),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print the index dump as JSON")
                .action(ArgAction::SetTrue)
                .conflicts_with("search"),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .value_name("PATH")
                .value_parser(clap::value_parser!(PathBuf))
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("log-level")
                .long("log-level")
                .value_name("LEVEL")
                .help("Log level when RUST_LOG is unset (default: warn)"),
        )
}

/// Options extracted from parsed arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliOptions {
    /// Directory to index
    pub directory: PathBuf,
    /// Enter the interactive loop instead of dumping
    pub search: bool,
    /// Ignored second positional
    pub mode: Option<String>,
    /// Dump as JSON
    pub json: bool,
    /// Optional config file
    pub config: Option<PathBuf>,
    /// Log level override
    pub log_level: Option<String>,
}

impl CliOptions {
    /// Read options out of `matches` produced by [`build_cli`].
    pub fn from_matches(matches: &clap::ArgMatches) -> Self {
        CliOptions {
            directory: matches
                .get_one::<PathBuf>("directory")
                .cloned()
                .unwrap_or_default(),
            search: matches.get_flag("search"),
            mode: matches.get_one::<String>("mode").cloned(),
            json: matches.get_flag("json"),
            config: matches.get_one::<PathBuf>("config").cloned(),
            log_level: matches.get_one::<String>("log-level").cloned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<CliOptions, clap::Error> {
        build_cli()
            .try_get_matches_from(args)
            .map(|m| CliOptions::from_matches(&m))
    }

    #[test]
    fn test_cli_is_well_formed() {
        build_cli().debug_assert();
    }

    #[test]
    fn test_directory_only() {
        let opts = parse(&["textsearch", "articles"]).unwrap();
        assert_eq!(opts.directory, PathBuf::from("articles"));
        assert!(!opts.search);
        assert!(!opts.json);
        assert_eq!(opts.mode, None);
        assert_eq!(opts.config, None);
        assert_eq!(opts.log_level, None);
    }

    #[test]
    fn test_search_flag() {
        let opts = parse(&["textsearch", "articles", "-s"]).unwrap();
        assert!(opts.search);

        let opts = parse(&["textsearch", "-s", "articles"]).unwrap();
        assert!(opts.search);
    }

    #[test]
    fn test_missing_directory_is_usage_error() {
        let err = parse(&["textsearch"]).unwrap_err();
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }

    #[test]
    fn test_second_positional_selects_dump() {
        let opts = parse(&["textsearch", "articles", "other"]).unwrap();
        assert_eq!(opts.directory, PathBuf::from("articles"));
        assert!(!opts.search);
        assert_eq!(opts.mode.as_deref(), Some("other"));
    }

    #[test]
    fn test_more_than_two_positionals_is_usage_error() {
        assert!(parse(&["textsearch", "articles", "-s", "extra"]).is_err());
        assert!(parse(&["textsearch", "articles", "extra", "-s"]).is_err());
        assert!(parse(&["textsearch", "articles", "one", "two"]).is_err());
    }

    #[test]
    fn test_json_conflicts_with_search() {
        assert!(parse(&["textsearch", "articles", "-s", "--json"]).is_err());
        assert!(parse(&["textsearch", "articles", "--json"]).unwrap().json);
    }

    #[test]
    fn test_config_and_log_level() {
        let opts = parse(&[
            "textsearch",
            "articles",
            "--config",
            "ts.toml",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(opts.config, Some(PathBuf::from("ts.toml")));
        assert_eq!(opts.log_level.as_deref(), Some("debug"));
    }
}
