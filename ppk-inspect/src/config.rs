use clap::{crate_description, crate_name, crate_version, App, Arg, ArgMatches};
use log::LevelFilter;
use std::env;
use std::path::PathBuf;

const ARG_INPUT: &str = "input";
const ARG_PASSPHRASE_FILE: &str = "passphrase-file";

const ARG_FORMAT: &str = "format";
const ARG_FORMAT_TEXT: &str = "text";
const ARG_FORMAT_JSON: &str = "json";

const ARG_LOGGING: &str = "logging";
const ARG_LOGGING_TRACE: &str = "trace";
const ARG_LOGGING_DEBUG: &str = "debug";
const ARG_LOGGING_INFO: &str = "info";
const ARG_LOGGING_WARN: &str = "warn";
const ARG_LOGGING_ERROR: &str = "error";
const ARG_LOGGING_OFF: &str = "off";

pub const PPK_PASSPHRASE_ENV: &str = "PPK_PASSPHRASE";
const PPK_LOG_LEVEL_ENV: &str = "PPK_LOG_LEVEL";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub input: PathBuf,
    pub passphrase_file: Option<PathBuf>,
    pub output_format: OutputFormat,
    pub log_level: LevelFilter,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches<'_>) -> anyhow::Result<Self> {
        let input = matches
            .value_of(ARG_INPUT)
            .map(PathBuf::from)
            .ok_or_else(|| anyhow::anyhow!("path to a key file is required"))?;

        let output_format = match matches.value_of(ARG_FORMAT) {
            Some(ARG_FORMAT_JSON) => OutputFormat::Json,
            _ => OutputFormat::Text,
        };

        let log_level = match matches.value_of(ARG_LOGGING) {
            Some(level) => parse_level_filter(level),
            None => env::var(PPK_LOG_LEVEL_ENV)
                .map(|level| parse_level_filter(&level))
                .unwrap_or_else(|_| default_log_level()),
        };

        Ok(Self {
            input,
            passphrase_file: matches.value_of(ARG_PASSPHRASE_FILE).map(PathBuf::from),
            output_format,
            log_level,
        })
    }
}

fn default_log_level() -> LevelFilter {
    LevelFilter::Warn
}

pub fn parse_level_filter(s: &str) -> LevelFilter {
    match s.to_lowercase().as_str() {
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Off,
    }
}

pub fn config() -> ArgMatches<'static> {
    app().get_matches()
}

fn app() -> App<'static, 'static> {
    App::new(crate_name!())
        .version(crate_version!())
        .about(crate_description!())
        .arg(
            Arg::with_name(ARG_INPUT)
                .short("i")
                .long(ARG_INPUT)
                .value_name("KEY_FILE")
                .help("Path to a PuTTY (.ppk) or SSH1 private key file")
                .takes_value(true)
                .required(true)
                .display_order(0),
        )
        .arg(
            Arg::with_name(ARG_PASSPHRASE_FILE)
                .short("p")
                .long(ARG_PASSPHRASE_FILE)
                .value_name("FILE")
                .help("File holding the passphrase of an encrypted key")
                .long_help(
                    "File holding the passphrase of an encrypted key. \
                     A single trailing newline is ignored. \
                     When absent, the PPK_PASSPHRASE environment variable is used.",
                )
                .takes_value(true)
                .display_order(1),
        )
        .arg(
            Arg::with_name(ARG_FORMAT)
                .short("f")
                .long(ARG_FORMAT)
                .value_name("FORMAT")
                .help("Output format")
                .takes_value(true)
                .possible_values(&[ARG_FORMAT_TEXT, ARG_FORMAT_JSON])
                .default_value(ARG_FORMAT_TEXT)
                .display_order(2),
        )
        .arg(
            Arg::with_name(ARG_LOGGING)
                .short("l")
                .long(ARG_LOGGING)
                .value_name("LOG_LEVEL")
                .help("Log level, overrides the PPK_LOG_LEVEL environment variable")
                .takes_value(true)
                .possible_values(&[
                    ARG_LOGGING_TRACE,
                    ARG_LOGGING_DEBUG,
                    ARG_LOGGING_INFO,
                    ARG_LOGGING_WARN,
                    ARG_LOGGING_ERROR,
                    ARG_LOGGING_OFF,
                ])
                .display_order(3),
        )
}
