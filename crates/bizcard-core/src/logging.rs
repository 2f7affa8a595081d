//! Logging setup.
//!
//! ```ignore
//! use bizcard_core::logging::LoggingBuilder;
//!
//! LoggingBuilder::new()
//!     .with_verbosity(args.verbose)
//!     .with_filter("bizcard=debug")
//!     .init()?;
//! ```

use tracing_subscriber::EnvFilter;

use crate::error::{CardError, CardResult};

/// Builder for the process-wide `tracing` subscriber.
#[derive(Clone, Debug)]
pub struct LoggingBuilder {
    env_filter: Option<String>,
    verbosity: u8,
    ansi: bool,
}

impl Default for LoggingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggingBuilder {
    pub fn new() -> Self {
        Self {
            env_filter: None,
            verbosity: 0,
            ansi: true,
        }
    }

    /// Explicit filter (e.g. "bizcard=debug,bizcard_core=trace"). Takes
    /// precedence over `RUST_LOG` and the verbosity count.
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.env_filter = Some(filter.into());
        self
    }

    /// Number of `-v` flags.
    pub fn with_verbosity(mut self, verbosity: u8) -> Self {
        self.verbosity = verbosity;
        self
    }

    pub fn no_ansi(mut self) -> Self {
        self.ansi = false;
        self
    }

    /// Filter directive used when neither an explicit filter nor `RUST_LOG`
    /// is set.
    pub fn default_directive(&self) -> &'static str {
        match self.verbosity {
            0 => "warn,bizcard=info,bizcard_core=info,bizcard::analytics=info",
            1 => "info,bizcard=debug,bizcard_core=debug",
            2 => "debug",
            _ => "trace",
        }
    }

    fn env_filter(&self) -> CardResult<EnvFilter> {
        if let Some(filter) = &self.env_filter {
            return EnvFilter::try_new(filter).map_err(|e| CardError::Logging(e.to_string()));
        }
        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(self.default_directive())))
    }

    /// Install the subscriber. Fails if one is already installed.
    pub fn init(self) -> CardResult<()> {
        let filter = self.env_filter()?;
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(self.ansi)
            .try_init()
            .map_err(|e| CardError::Logging(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_selects_directive() {
        assert!(LoggingBuilder::new().default_directive().starts_with("warn"));
        assert_eq!(LoggingBuilder::new().with_verbosity(2).default_directive(), "debug");
        assert_eq!(LoggingBuilder::new().with_verbosity(9).default_directive(), "trace");
    }

    #[test]
    fn explicit_filter_is_validated() {
        let ok = LoggingBuilder::new().with_filter("bizcard=debug").env_filter();
        assert!(ok.is_ok());
        let bad = LoggingBuilder::new().with_filter("bizcard=notalevel").env_filter();
        assert!(matches!(bad, Err(CardError::Logging(_))));
    }
}
