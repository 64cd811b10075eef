//! Domain Sweep - word-list driven domain availability scanning
//!
//! Loads a word list, keeps the short alphabetic words, pairs each with a set
//! of TLDs and asks the Domainr status API whether the result can be
//! registered. Checks run one at a time with a pause in between; available
//! domains are appended to a text file.

pub mod cli;
pub mod config;
pub mod credentials;
pub mod domain;
pub mod error;
pub mod prompt;
pub mod report;
pub mod scan;
pub mod types;
pub mod words;

// Re-export commonly used types
pub use error::{Result, SweepError};
pub use types::{
    AvailabilityResult, AvailabilityStatus, RunConfiguration, ScanCounters, WordSourceKind,
};

pub use domain::{AvailabilityCheck, DomainrClient};
pub use scan::ScanEngine;

use report::ScanReporter;
use scan::{AppendFileSink, FixedDelay};
use words::WordStats;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the library
pub fn init() {
    // Load .env file if it exists
    dotenv::dotenv().ok();
}

/// Outcome of a full sweep
#[derive(Debug, Clone)]
pub struct SweepSummary {
    pub stats: WordStats,
    pub counters: ScanCounters,
}

/// Load candidates, then scan them against the Domainr API.
///
/// `on_candidates` sees the word statistics before the first request.
pub async fn run_sweep<F>(
    config: &RunConfiguration,
    api_key: &str,
    reporter: &mut dyn ScanReporter,
    on_candidates: F,
) -> Result<SweepSummary>
where
    F: FnOnce(&WordStats),
{
    let candidates = words::load_candidates(&config.word_file, config.min_length, config.max_length);
    let stats = WordStats::from_candidates(&candidates);
    on_candidates(&stats);

    let client = DomainrClient::new(api_key, config.api_url.clone(), config.timeout)?;
    let mut engine = ScanEngine::new(
        client,
        FixedDelay::from_millis(config.delay_ms),
        AppendFileSink::new(&config.output),
    );

    let counters = engine.run_scan(&candidates, config, reporter).await;
    Ok(SweepSummary { stats, counters })
}
