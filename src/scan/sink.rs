//! Persistence of available domains

use std::fs::OpenOptions;
use std::io::Write;
use std::path::PathBuf;

use crate::error::{Result, SweepError};

/// Receives every domain judged available
pub trait ResultSink: Send {
    fn record_available(&mut self, domain: &str) -> Result<()>;
}

/// Appends one domain per line, creating the file on first write.
///
/// Each record is a separate open/append/close; there is no locking.
#[derive(Debug, Clone)]
pub struct AppendFileSink {
    path: PathBuf,
}

impl AppendFileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ResultSink for AppendFileSink {
    fn record_available(&mut self, domain: &str) -> Result<()> {
        let io_err = |e: std::io::Error| {
            SweepError::io(e.to_string(), Some(self.path.to_string_lossy().to_string()))
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(io_err)?;
        writeln!(file, "{}", domain).map_err(io_err)
    }
}

/// Keeps available domains in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub domains: Vec<String>,
}

impl ResultSink for MemorySink {
    fn record_available(&mut self, domain: &str) -> Result<()> {
        self.domains.push(domain.to_string());
        Ok(())
    }
}
