//! Logging setup for meshview.
//!
//! Everything in meshview logs through [`tracing`]. Nothing is printed until a subscriber is
//! installed, which [`init`] does:
//!
//! ```no_run
//! use meshview_log::{LogSettings, init, info};
//!
//! init(&LogSettings::default()).unwrap();
//! info!("ready");
//! ```
//!
//! The `RUST_LOG` environment variable, if set, replaces [`LogSettings`] entirely, for example
//! `RUST_LOG=meshview_loader=trace`. See the
//! [`EnvFilter`](tracing_subscriber::EnvFilter) documentation for the accepted syntax.
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

use thiserror::Error;
use tracing_subscriber::{EnvFilter, filter::ParseError};

pub use tracing::{self, Level, debug, error, info, trace, warn};

/// The log prelude.
///
/// This includes the most common types in this crate, re-exported for your convenience.
pub mod prelude {
    #[doc(hidden)]
    pub use crate::{LogSettings, debug, error, info, trace, warn};
}

/// Configures the global subscriber installed by [`init`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogSettings {
    /// Filters logs using the [`EnvFilter`] format, applied after [`LogSettings::level`].
    pub filter: String,

    /// Filters out logs that are "less than" the given level.
    /// This can be further filtered using the `filter` setting.
    pub level: Level,
}

/// The filter applied on top of the level by default.
pub const DEFAULT_FILTER: &str = "async_executor=warn,async_io=warn,polling=warn";

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: DEFAULT_FILTER.to_string(),
            level: Level::INFO,
        }
    }
}

impl LogSettings {
    /// The full [`EnvFilter`] directive these settings stand for.
    pub fn filter_directive(&self) -> String {
        if self.filter.is_empty() {
            self.level.to_string()
        } else {
            format!("{},{}", self.level, self.filter)
        }
    }

    fn env_filter(&self) -> Result<EnvFilter, LogError> {
        if let Ok(filter) = EnvFilter::try_from_default_env() {
            return Ok(filter);
        }
        Ok(EnvFilter::try_new(self.filter_directive())?)
    }
}

/// Errors that can occur while installing the subscriber.
#[derive(Error, Debug)]
pub enum LogError {
    /// [`LogSettings::filter`] is not a valid [`EnvFilter`] directive.
    #[error("invalid log filter: {0}")]
    InvalidFilter(#[from] ParseError),
    /// Another global subscriber was installed first.
    #[error("could not set global logger: {0}")]
    AlreadySet(String),
}

/// Installs a formatting subscriber as the global default.
///
/// Fails if a global subscriber is already installed, so it must be called at most once per
/// process.
pub fn init(settings: &LogSettings) -> Result<(), LogError> {
    let filter = settings.env_filter()?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .try_init()
        .map_err(|error| LogError::AlreadySet(error.to_string()))
}
