//! Console presentation of scan progress and results

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::types::{AvailabilityResult, AvailabilityStatus, RunConfiguration, ScanCounters};
use crate::words::WordStats;

/// Receives scan events as they happen
pub trait ScanReporter {
    fn scan_started(&mut self, total: u64);

    fn domain_checked(&mut self, result: &AvailabilityResult);

    /// Called after every `PROGRESS_INTERVAL`-th check
    fn progress(&mut self, counters: &ScanCounters, total: u64);

    fn scan_finished(&mut self, counters: &ScanCounters, elapsed: Duration);
}

/// One line per checked domain, colored by status
pub fn result_line(result: &AvailabilityResult) -> String {
    match result.status {
        AvailabilityStatus::Available => style(format!("✅ {} - AVAILABLE", result.domain))
            .green()
            .bold()
            .to_string(),
        AvailabilityStatus::Taken => style(format!("❌ {} - taken ({})", result.domain, result.reason))
            .red()
            .to_string(),
        AvailabilityStatus::Error => style(format!("⚠️  {} - check failed: {}", result.domain, result.reason))
            .yellow()
            .to_string(),
    }
}

pub fn progress_line(counters: &ScanCounters, total: u64) -> String {
    format!(
        "📊 {}/{} checked, {} available",
        counters.total_checked, total, counters.available_count
    )
}

/// Terminal reporter: colored lines above an indicatif progress bar
#[derive(Default)]
pub struct ConsoleReporter {
    bar: Option<ProgressBar>,
}

impl ConsoleReporter {
    pub fn new() -> Self {
        Self::default()
    }

    // suspend() prints even when the bar is hidden (stdout not a terminal)
    fn print(&self, line: String) {
        match &self.bar {
            Some(bar) => bar.suspend(|| println!("{}", line)),
            None => println!("{}", line),
        }
    }
}

impl ScanReporter for ConsoleReporter {
    fn scan_started(&mut self, total: u64) {
        println!("🔍 Checking {} domains...", total);
        println!("═══════════════════════════════════");

        let bar = ProgressBar::new(total);
        let bar_style = ProgressStyle::with_template("{spinner:.cyan} [{bar:30.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=> ");
        bar.set_style(bar_style);
        self.bar = Some(bar);
    }

    fn domain_checked(&mut self, result: &AvailabilityResult) {
        self.print(result_line(result));
        if let Some(bar) = &self.bar {
            bar.set_message(result.domain.clone());
            bar.inc(1);
        }
    }

    fn progress(&mut self, counters: &ScanCounters, total: u64) {
        self.print(style(progress_line(counters, total)).cyan().to_string());
    }

    fn scan_finished(&mut self, counters: &ScanCounters, elapsed: Duration) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }

        println!();
        println!("📈 Summary:");
        println!("   📊 Total checked: {}", counters.total_checked);
        println!("   ✅ Available: {}", counters.available_count);
        if counters.error_count > 0 {
            println!("   ⚠️  Check errors: {}", counters.error_count);
        }
        println!("   ⏱️  Total time: {:.2}s", elapsed.as_secs_f32());
    }
}

/// Print the resolved run parameters
pub fn print_configuration(config: &RunConfiguration) {
    println!("⚙️  Source: {} ({})", config.source, config.word_file.display());
    println!("   Length: {}-{}", config.min_length, config.max_length);
    if config.tlds.is_empty() {
        println!("   TLDs: {}", style("none").yellow());
    } else {
        println!("   TLDs: {}", config.tlds.join(", "));
    }
    println!("   Delay: {}ms", config.delay_ms);
    println!();
}

pub fn print_word_stats(stats: &WordStats) {
    println!("📚 Word statistics:");
    println!("{}", stats);
    println!();
}
