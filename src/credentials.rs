//! API credential lookup
//!
//! The key is resolved once before scanning starts. Anything that can answer
//! "here is the key" or "there is none" can act as a provider.

use crate::error::{Result, SweepError};

/// Environment variable holding the RapidAPI key
pub const API_KEY_ENV: &str = "RAPIDAPI_KEY";

/// Source of the API credential
pub trait CredentialProvider {
    /// Returns the key, or `None` when it is not configured
    fn api_key(&self) -> Option<String>;

    /// Human readable description used in error messages
    fn describe(&self) -> String;
}

/// Reads the key from an environment variable (`.env` is loaded by `init`)
#[derive(Debug, Clone)]
pub struct EnvCredentials {
    var: String,
}

impl EnvCredentials {
    pub fn new() -> Self {
        Self::from_var(API_KEY_ENV)
    }

    pub fn from_var(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvCredentials {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialProvider for EnvCredentials {
    fn api_key(&self) -> Option<String> {
        std::env::var(&self.var)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }

    fn describe(&self) -> String {
        format!("environment variable {}", self.var)
    }
}

/// Fixed key, for callers that already hold one
#[derive(Debug, Clone)]
pub struct StaticCredentials(Option<String>);

impl StaticCredentials {
    pub fn new(key: impl Into<String>) -> Self {
        Self(Some(key.into()))
    }

    pub fn missing() -> Self {
        Self(None)
    }
}

impl CredentialProvider for StaticCredentials {
    fn api_key(&self) -> Option<String> {
        self.0.clone().filter(|key| !key.is_empty())
    }

    fn describe(&self) -> String {
        "static credential".to_string()
    }
}

/// Resolve the key or fail; callers treat the error as fatal.
pub fn require_api_key(provider: &dyn CredentialProvider) -> Result<String> {
    provider.api_key().ok_or_else(|| {
        SweepError::credential(format!("no API key found in {}", provider.describe()))
    })
}
