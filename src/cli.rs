//! Command-line interface definitions.
//!
//! Uses `clap` derive macros; every option can also come from a
//! `DOMAIN_SWEEP_*` environment variable. Options left unset are asked for
//! interactively unless `--non-interactive` is given.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::types::{
    WordSourceKind, DEFAULT_API_URL, DEFAULT_DELAY_MS, DEFAULT_NAMES_FILE, DEFAULT_OUTPUT_FILE,
    DEFAULT_WORDS_FILE,
};

/// Check which words from a word list are still free as domain names.
#[derive(Parser, Debug, Clone)]
#[command(name = "domain-sweep")]
#[command(version)]
#[command(about = "Scan word lists for available domain names", long_about = None)]
pub struct Args {
    /// Word list to use
    #[arg(short, long, value_enum, env = "DOMAIN_SWEEP_SOURCE")]
    pub source: Option<SourceArg>,

    /// Shortest word to check (0 or invalid falls back to 3)
    #[arg(long, env = "DOMAIN_SWEEP_MIN_LENGTH")]
    pub min_length: Option<String>,

    /// Longest word to check (0 or invalid falls back to 5)
    #[arg(long, env = "DOMAIN_SWEEP_MAX_LENGTH")]
    pub max_length: Option<String>,

    /// Comma-separated TLDs, each starting with "." (e.g. ".io,.dev")
    #[arg(short, long, env = "DOMAIN_SWEEP_TLDS")]
    pub tlds: Option<String>,

    /// Pause after every check, in milliseconds
    #[arg(long, env = "DOMAIN_SWEEP_DELAY_MS", default_value_t = DEFAULT_DELAY_MS)]
    pub delay_ms: u64,

    /// General word list
    #[arg(long, env = "DOMAIN_SWEEP_WORDS_FILE", default_value = DEFAULT_WORDS_FILE)]
    pub words_file: PathBuf,

    /// Names word list
    #[arg(long, env = "DOMAIN_SWEEP_NAMES_FILE", default_value = DEFAULT_NAMES_FILE)]
    pub names_file: PathBuf,

    /// File that available domains are appended to
    #[arg(short, long, env = "DOMAIN_SWEEP_OUTPUT", default_value = DEFAULT_OUTPUT_FILE)]
    pub output: PathBuf,

    /// Status API endpoint
    #[arg(long, env = "DOMAIN_SWEEP_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    /// HTTP timeout in seconds (transport default when unset)
    #[arg(long, env = "DOMAIN_SWEEP_TIMEOUT_SECS")]
    pub timeout_secs: Option<u64>,

    /// Never prompt; unset options take their defaults
    #[arg(short = 'y', long)]
    pub non_interactive: bool,

    /// Verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

/// Word list selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    Words,
    Names,
}

impl From<SourceArg> for WordSourceKind {
    fn from(arg: SourceArg) -> Self {
        match arg {
            SourceArg::Words => WordSourceKind::Words,
            SourceArg::Names => WordSourceKind::Names,
        }
    }
}
