//! Sequential scan over every (word, TLD) pair

mod scanner;
mod sink;
mod throttle;

pub use scanner::{ScanEngine, PROGRESS_INTERVAL};
pub use sink::{AppendFileSink, MemorySink, ResultSink};
pub use throttle::{FixedDelay, NoDelay, Throttle};
