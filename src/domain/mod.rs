//! Domain availability checking module

pub mod domainr;

pub use domainr::DomainrClient;

use crate::types::AvailabilityResult;
use async_trait::async_trait;

/// Anything that can judge whether a single domain is free to register
#[async_trait]
pub trait AvailabilityCheck: Send + Sync {
    /// Check one domain.
    ///
    /// Never fails: transport and parse problems come back as an
    /// `AvailabilityStatus::Error` result.
    async fn check_availability(&self, domain: &str) -> AvailabilityResult;
}

/// Join a candidate word and a dotted TLD, e.g. `apple` + `.io`
pub fn domain_for(word: &str, tld: &str) -> String {
    format!("{}{}", word, tld)
}
