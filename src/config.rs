//! Run configuration resolution
//!
//! Flags win; anything left unset is asked for through a [`ConfigPrompter`];
//! whatever is still missing takes its default.

use std::time::Duration;

use crate::cli::Args;
use crate::error::Result;
use crate::types::{RunConfiguration, WordSourceKind, DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH, DEFAULT_TLDS};

/// Interactive source of raw answers. `None` means "use the default".
pub trait ConfigPrompter {
    /// Answer to "[W]ords or [N]ames?"
    fn source(&self) -> Result<Option<String>>;

    fn min_length(&self) -> Result<Option<String>>;

    fn max_length(&self) -> Result<Option<String>>;

    /// Raw comma-separated list, or `None` to keep the default TLDs
    fn custom_tlds(&self) -> Result<Option<String>>;
}

/// Never asks anything
#[derive(Debug, Clone, Copy, Default)]
pub struct NonInteractive;

impl ConfigPrompter for NonInteractive {
    fn source(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn min_length(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn max_length(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn custom_tlds(&self) -> Result<Option<String>> {
        Ok(None)
    }
}

/// Build the run configuration from flags and prompts
pub fn resolve(args: &Args, prompter: &dyn ConfigPrompter) -> Result<RunConfiguration> {
    let source = match args.source {
        Some(source) => source.into(),
        None => prompter
            .source()?
            .map(|answer| parse_source(&answer))
            .unwrap_or_default(),
    };

    let min_length = match &args.min_length {
        Some(raw) => parse_length(raw, DEFAULT_MIN_LENGTH),
        None => prompter
            .min_length()?
            .map_or(DEFAULT_MIN_LENGTH, |raw| parse_length(&raw, DEFAULT_MIN_LENGTH)),
    };

    let max_length = match &args.max_length {
        Some(raw) => parse_length(raw, DEFAULT_MAX_LENGTH),
        None => prompter
            .max_length()?
            .map_or(DEFAULT_MAX_LENGTH, |raw| parse_length(&raw, DEFAULT_MAX_LENGTH)),
    };

    if min_length > max_length {
        tracing::warn!(min_length, max_length, "Minimum length exceeds maximum; no words will match");
    }

    let custom = match &args.tlds {
        Some(raw) => Some(raw.clone()),
        None => prompter.custom_tlds()?,
    };
    let tlds = resolve_tlds(custom.as_deref());

    let word_file = match source {
        WordSourceKind::Words => args.words_file.clone(),
        WordSourceKind::Names => args.names_file.clone(),
    };

    Ok(RunConfiguration {
        tlds,
        min_length,
        max_length,
        source,
        word_file,
        delay_ms: args.delay_ms,
        output: args.output.clone(),
        api_url: args.api_url.clone(),
        timeout: args.timeout_secs.map(Duration::from_secs),
    })
}

/// Names only when the answer is "N" (any case); everything else means words
pub fn parse_source(answer: &str) -> WordSourceKind {
    if answer.trim().eq_ignore_ascii_case("n") {
        WordSourceKind::Names
    } else {
        WordSourceKind::Words
    }
}

/// Parse a length bound; unparsable input and zero give `default`
pub fn parse_length(raw: &str, default: usize) -> usize {
    match raw.trim().parse::<usize>() {
        Ok(0) | Err(_) => default,
        Ok(n) => n,
    }
}

/// Split a comma-separated TLD list, keeping trimmed entries that start with "."
pub fn parse_tld_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tld| tld.starts_with('.'))
        .map(str::to_string)
        .collect()
}

/// Custom list when given, defaults otherwise.
///
/// A custom list with no valid entry resolves to an empty list, not to the
/// defaults; the scan then checks nothing.
pub fn resolve_tlds(custom: Option<&str>) -> Vec<String> {
    match custom {
        None => DEFAULT_TLDS.iter().map(|s| s.to_string()).collect(),
        Some(raw) => {
            let tlds = parse_tld_list(raw);
            if tlds.is_empty() {
                tracing::warn!(input = %raw, "No valid TLDs in custom list (each must start with '.'); nothing will be scanned");
            }
            tlds
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    struct Scripted {
        source: Option<&'static str>,
        min: Option<&'static str>,
        max: Option<&'static str>,
        tlds: Option<&'static str>,
    }

    impl ConfigPrompter for Scripted {
        fn source(&self) -> Result<Option<String>> {
            Ok(self.source.map(str::to_string))
        }

        fn min_length(&self) -> Result<Option<String>> {
            Ok(self.min.map(str::to_string))
        }

        fn max_length(&self) -> Result<Option<String>> {
            Ok(self.max.map(str::to_string))
        }

        fn custom_tlds(&self) -> Result<Option<String>> {
            Ok(self.tlds.map(str::to_string))
        }
    }

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["domain-sweep"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_parse_source() {
        assert_eq!(parse_source("N"), WordSourceKind::Names);
        assert_eq!(parse_source("n"), WordSourceKind::Names);
        assert_eq!(parse_source("W"), WordSourceKind::Words);
        assert_eq!(parse_source(""), WordSourceKind::Words);
        assert_eq!(parse_source("names"), WordSourceKind::Words);
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("4", 3), 4);
        assert_eq!(parse_length(" 7 ", 3), 7);
        assert_eq!(parse_length("0", 3), 3);
        assert_eq!(parse_length("abc", 5), 5);
        assert_eq!(parse_length("-2", 5), 5);
        assert_eq!(parse_length("", 5), 5);
    }

    #[test]
    fn test_parse_tld_list() {
        assert_eq!(parse_tld_list(".io, invalid, .dev"), vec![".io", ".dev"]);
        assert_eq!(parse_tld_list(" .com ,.net"), vec![".com", ".net"]);
    }

    #[test]
    fn test_all_invalid_custom_tlds_resolve_empty() {
        assert!(resolve_tlds(Some("com, net")).is_empty());
        assert!(resolve_tlds(Some("")).is_empty());
    }

    #[test]
    fn test_default_tlds() {
        assert_eq!(
            resolve_tlds(None),
            vec![".com", ".net", ".org", ".io", ".cloud", ".agency"]
        );
    }

    #[test]
    fn test_resolve_non_interactive_defaults() {
        let config = resolve(&args(&["-y"]), &NonInteractive).unwrap();
        assert_eq!(config.source, WordSourceKind::Words);
        assert_eq!(config.word_file, PathBuf::from("words.txt"));
        assert_eq!(config.min_length, 3);
        assert_eq!(config.max_length, 5);
        assert_eq!(config.tlds.len(), 6);
        assert_eq!(config.delay_ms, 50);
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_resolve_from_prompts() {
        let prompter = Scripted {
            source: Some("n"),
            min: Some("4"),
            max: Some("zero"),
            tlds: Some(".io, invalid, .dev"),
        };
        let config = resolve(&args(&[]), &prompter).unwrap();

        assert_eq!(config.source, WordSourceKind::Names);
        assert_eq!(config.word_file, PathBuf::from("names.txt"));
        assert_eq!(config.min_length, 4);
        assert_eq!(config.max_length, 5);
        assert_eq!(config.tlds, vec![".io", ".dev"]);
    }

    #[test]
    fn test_flags_override_prompts() {
        let prompter = Scripted {
            source: Some("n"),
            min: Some("9"),
            max: Some("9"),
            tlds: Some(".xyz"),
        };
        let config = resolve(
            &args(&[
                "--source", "words", "--min-length", "2", "--max-length", "6", "--tlds", ".ai",
                "--timeout-secs", "10",
            ]),
            &prompter,
        )
        .unwrap();

        assert_eq!(config.source, WordSourceKind::Words);
        assert_eq!(config.min_length, 2);
        assert_eq!(config.max_length, 6);
        assert_eq!(config.tlds, vec![".ai"]);
        assert_eq!(config.timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn test_inverted_bounds_are_kept() {
        let config = resolve(&args(&["--min-length", "6", "--max-length", "4"]), &NonInteractive).unwrap();
        assert_eq!((config.min_length, config.max_length), (6, 4));
    }
}
