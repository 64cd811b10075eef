//! Scan engine - checks every candidate against every TLD, one at a time

use std::time::Instant;

use super::sink::ResultSink;
use super::throttle::Throttle;
use crate::domain::{domain_for, AvailabilityCheck};
use crate::report::ScanReporter;
use crate::types::{RunConfiguration, ScanCounters};

/// A progress summary is reported after every this many checks
pub const PROGRESS_INTERVAL: u64 = 10;

/// Sequential scanner
///
/// TLDs form the outer loop and words the inner loop, so all words are tried
/// against the first TLD before moving to the next.
pub struct ScanEngine<C, T, S> {
    checker: C,
    throttle: T,
    sink: S,
}

impl<C, T, S> ScanEngine<C, T, S>
where
    C: AvailabilityCheck,
    T: Throttle,
    S: ResultSink,
{
    pub fn new(checker: C, throttle: T, sink: S) -> Self {
        Self {
            checker,
            throttle,
            sink,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Run one scan and return its counters
    pub async fn run_scan(
        &mut self,
        candidates: &[String],
        config: &RunConfiguration,
        reporter: &mut dyn ScanReporter,
    ) -> ScanCounters {
        let total = config.total_checks(candidates.len());
        let start_time = Instant::now();
        let mut counters = ScanCounters::default();

        tracing::info!(
            candidates = candidates.len(),
            tlds = config.tlds.len(),
            total = total,
            delay_ms = config.delay_ms,
            "Starting scan"
        );
        reporter.scan_started(total);

        for tld in &config.tlds {
            for word in candidates {
                let domain = domain_for(word, tld);
                let result = self.checker.check_availability(&domain).await;
                counters.record(&result);

                if result.is_available() {
                    if let Err(e) = self.sink.record_available(&result.domain) {
                        tracing::warn!(domain = %result.domain, error = %e, "Failed to record available domain");
                    }
                }

                reporter.domain_checked(&result);

                if counters.total_checked % PROGRESS_INTERVAL == 0 {
                    reporter.progress(&counters, total);
                }

                self.throttle.pause().await;
            }
        }

        let elapsed = start_time.elapsed();
        tracing::info!(
            checked = counters.total_checked,
            available = counters.available_count,
            errors = counters.error_count,
            duration_ms = %elapsed.as_millis(),
            "Scan completed"
        );
        reporter.scan_finished(&counters, elapsed);

        counters
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::{MemorySink, NoDelay};
    use crate::types::{AvailabilityResult, AvailabilityStatus};
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    /// Answers from a fixed table; unknown domains are taken
    #[derive(Default)]
    struct TableChecker {
        answers: HashMap<String, AvailabilityStatus>,
        calls: Mutex<Vec<String>>,
    }

    impl TableChecker {
        fn with(mut self, domain: &str, status: AvailabilityStatus) -> Self {
            self.answers.insert(domain.to_string(), status);
            self
        }
    }

    #[async_trait]
    impl AvailabilityCheck for TableChecker {
        async fn check_availability(&self, domain: &str) -> AvailabilityResult {
            self.calls.lock().unwrap().push(domain.to_string());
            match self.answers.get(domain) {
                Some(AvailabilityStatus::Available) => AvailabilityResult::available(domain, "inactive"),
                Some(AvailabilityStatus::Error) => AvailabilityResult::error(domain, "HTTP 503"),
                _ => AvailabilityResult::taken(domain, "active"),
            }
        }
    }

    #[derive(Default)]
    struct CountingThrottle {
        pauses: AtomicUsize,
    }

    #[async_trait]
    impl Throttle for CountingThrottle {
        async fn pause(&self) {
            self.pauses.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[derive(Default)]
    struct RecordingReporter {
        started: Option<u64>,
        checked: Vec<(String, AvailabilityStatus)>,
        progress: Vec<(u64, u64, u64)>,
        finished: Option<ScanCounters>,
    }

    impl ScanReporter for RecordingReporter {
        fn scan_started(&mut self, total: u64) {
            self.started = Some(total);
        }

        fn domain_checked(&mut self, result: &AvailabilityResult) {
            self.checked.push((result.domain.clone(), result.status));
        }

        fn progress(&mut self, counters: &ScanCounters, total: u64) {
            self.progress.push((counters.total_checked, total, counters.available_count));
        }

        fn scan_finished(&mut self, counters: &ScanCounters, _elapsed: Duration) {
            self.finished = Some(*counters);
        }
    }

    fn config_with_tlds(tlds: &[&str]) -> RunConfiguration {
        RunConfiguration {
            tlds: tlds.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    fn words(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_tld_is_outer_loop() {
        let mut engine = ScanEngine::new(TableChecker::default(), NoDelay, MemorySink::default());
        let mut reporter = RecordingReporter::default();

        engine
            .run_scan(&words(&["w1", "w2"]), &config_with_tlds(&[".t1", ".t2"]), &mut reporter)
            .await;

        let calls = engine.checker.calls.lock().unwrap().clone();
        assert_eq!(calls, vec!["w1.t1", "w2.t1", "w1.t2", "w2.t2"]);
        let reported: Vec<_> = reporter.checked.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(reported, vec!["w1.t1", "w2.t1", "w1.t2", "w2.t2"]);
    }

    #[tokio::test]
    async fn test_counters_and_sink() {
        let checker = TableChecker::default()
            .with("cat.io", AvailabilityStatus::Available)
            .with("dog.io", AvailabilityStatus::Error)
            .with("dog.dev", AvailabilityStatus::Available);
        let mut engine = ScanEngine::new(checker, NoDelay, MemorySink::default());
        let mut reporter = RecordingReporter::default();

        let counters = engine
            .run_scan(&words(&["cat", "dog"]), &config_with_tlds(&[".io", ".dev"]), &mut reporter)
            .await;

        assert_eq!(counters.total_checked, 4);
        assert_eq!(counters.available_count, 2);
        assert_eq!(counters.error_count, 1);
        assert_eq!(engine.sink().domains, vec!["cat.io", "dog.dev"]);
        assert_eq!(reporter.started, Some(4));
        assert_eq!(reporter.finished, Some(counters));
        assert!(reporter
            .checked
            .contains(&("dog.io".to_string(), AvailabilityStatus::Error)));
    }

    #[tokio::test]
    async fn test_progress_every_tenth_check() {
        let candidates: Vec<String> = (0..13).map(|i| format!("w{}", i)).collect();
        let checker = TableChecker::default().with("w3.a", AvailabilityStatus::Available);
        let mut engine = ScanEngine::new(checker, NoDelay, MemorySink::default());
        let mut reporter = RecordingReporter::default();

        engine
            .run_scan(&candidates, &config_with_tlds(&[".a", ".b"]), &mut reporter)
            .await;

        assert_eq!(reporter.checked.len(), 26);
        assert_eq!(reporter.progress, vec![(10, 26, 1), (20, 26, 1)]);
    }

    #[tokio::test]
    async fn test_no_progress_below_ten() {
        let mut engine = ScanEngine::new(TableChecker::default(), NoDelay, MemorySink::default());
        let mut reporter = RecordingReporter::default();

        engine
            .run_scan(&words(&["a", "b", "c"]), &config_with_tlds(&[".com", ".net", ".org"]), &mut reporter)
            .await;

        assert_eq!(reporter.checked.len(), 9);
        assert!(reporter.progress.is_empty());
    }

    #[tokio::test]
    async fn test_throttle_after_every_check() {
        let checker = TableChecker::default().with("b.x", AvailabilityStatus::Error);
        let mut engine = ScanEngine::new(checker, CountingThrottle::default(), MemorySink::default());
        let mut reporter = RecordingReporter::default();

        engine
            .run_scan(&words(&["a", "b", "c"]), &config_with_tlds(&[".x"]), &mut reporter)
            .await;

        assert_eq!(engine.throttle.pauses.load(Ordering::SeqCst), 3);
    }

    #[tokio::test]
    async fn test_empty_tld_list_checks_nothing() {
        let mut engine = ScanEngine::new(TableChecker::default(), NoDelay, MemorySink::default());
        let mut reporter = RecordingReporter::default();

        let counters = engine
            .run_scan(&words(&["cat"]), &config_with_tlds(&[]), &mut reporter)
            .await;

        assert_eq!(counters, ScanCounters::default());
        assert_eq!(reporter.started, Some(0));
        assert!(engine.checker.calls.lock().unwrap().is_empty());
    }
}
