//! Core types and structures for domain-sweep

use chrono::{DateTime, Utc};
use std::path::PathBuf;
use std::time::Duration;

/// TLDs scanned when the user does not supply a custom list
pub const DEFAULT_TLDS: &[&str] = &[".com", ".net", ".org", ".io", ".cloud", ".agency"];

pub const DEFAULT_MIN_LENGTH: usize = 3;
pub const DEFAULT_MAX_LENGTH: usize = 5;
pub const DEFAULT_DELAY_MS: u64 = 50;

pub const DEFAULT_WORDS_FILE: &str = "words.txt";
pub const DEFAULT_NAMES_FILE: &str = "names.txt";
pub const DEFAULT_OUTPUT_FILE: &str = "available_domains.txt";
pub const DEFAULT_API_URL: &str = "https://domainr.p.rapidapi.com/v2/status";

/// Which word list feeds the scan
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WordSourceKind {
    #[default]
    Words,
    Names,
}

impl std::fmt::Display for WordSourceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordSourceKind::Words => write!(f, "words"),
            WordSourceKind::Names => write!(f, "names"),
        }
    }
}

/// Parameters for one scan run.
///
/// Built once by the configuration resolver and only ever borrowed afterwards.
#[derive(Debug, Clone)]
pub struct RunConfiguration {
    /// TLD suffixes, each starting with "."; scanned in this order
    pub tlds: Vec<String>,
    pub min_length: usize,
    /// Not validated against `min_length`; an inverted range yields no candidates
    pub max_length: usize,
    pub source: WordSourceKind,
    /// Word list chosen for `source`
    pub word_file: PathBuf,
    /// Pause after every check
    pub delay_ms: u64,
    /// Append-only log of available domains
    pub output: PathBuf,
    pub api_url: String,
    /// HTTP timeout; `None` keeps the transport default
    pub timeout: Option<Duration>,
}

impl Default for RunConfiguration {
    fn default() -> Self {
        Self {
            tlds: DEFAULT_TLDS.iter().map(|s| s.to_string()).collect(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
            source: WordSourceKind::Words,
            word_file: PathBuf::from(DEFAULT_WORDS_FILE),
            delay_ms: DEFAULT_DELAY_MS,
            output: PathBuf::from(DEFAULT_OUTPUT_FILE),
            api_url: DEFAULT_API_URL.to_string(),
            timeout: None,
        }
    }
}

impl RunConfiguration {
    /// Number of domains a scan over `candidate_count` words will check
    pub fn total_checks(&self, candidate_count: usize) -> u64 {
        candidate_count as u64 * self.tlds.len() as u64
    }
}

/// Domain availability status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AvailabilityStatus {
    Available,
    Taken,
    Error,
}

impl std::fmt::Display for AvailabilityStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AvailabilityStatus::Available => write!(f, "available"),
            AvailabilityStatus::Taken => write!(f, "taken"),
            AvailabilityStatus::Error => write!(f, "error"),
        }
    }
}

/// Outcome of checking a single domain
#[derive(Debug, Clone)]
pub struct AvailabilityResult {
    pub domain: String,
    pub status: AvailabilityStatus,
    /// API status summary, or the error description when the check failed
    pub reason: String,
    pub checked_at: DateTime<Utc>,
}

impl AvailabilityResult {
    pub fn available(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_status(domain, AvailabilityStatus::Available, reason)
    }

    pub fn taken(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_status(domain, AvailabilityStatus::Taken, reason)
    }

    pub fn error(domain: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::with_status(domain, AvailabilityStatus::Error, reason)
    }

    fn with_status(
        domain: impl Into<String>,
        status: AvailabilityStatus,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            domain: domain.into(),
            status,
            reason: reason.into(),
            checked_at: Utc::now(),
        }
    }

    /// Errors count as unavailable
    pub fn is_available(&self) -> bool {
        self.status == AvailabilityStatus::Available
    }
}

/// Running totals for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanCounters {
    pub total_checked: u64,
    pub available_count: u64,
    pub error_count: u64,
}

impl ScanCounters {
    pub fn record(&mut self, result: &AvailabilityResult) {
        self.total_checked += 1;
        match result.status {
            AvailabilityStatus::Available => self.available_count += 1,
            AvailabilityStatus::Error => self.error_count += 1,
            AvailabilityStatus::Taken => {}
        }
    }
}
