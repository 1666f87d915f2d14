// ============================================================================
// Logging Setup
// Installs a tracing subscriber for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events. Nothing is printed unless the
// embedding program installs a subscriber, either its own or the one here.
//
// Environment:
// - BIGINT_LOG: level name (trace, debug, info, warn, error)
// ============================================================================

use std::str::FromStr;
use tracing::Level;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "BIGINT_LOG";

/// Subscriber settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoggingConfig {
    /// Most verbose level that is printed
    pub level: Level,
    /// Print the event target (module path)
    pub with_target: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_target: false,
        }
    }
}

impl LoggingConfig {
    /// Defaults, with the level overridden by `BIGINT_LOG` when it parses.
    pub fn from_env() -> Self {
        let value = std::env::var(LOG_LEVEL_ENV).ok();
        Self::from_level_str(value.as_deref())
    }

    fn from_level_str(value: Option<&str>) -> Self {
        let mut config = Self::default();
        if let Some(level) = value.and_then(|v| Level::from_str(v.trim()).ok()) {
            config.level = level;
        }
        config
    }

    pub fn with_level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }
}

/// Install a global `fmt` subscriber.
///
/// # Errors
/// Fails if a global subscriber is already set.
pub fn init_logging(
    config: LoggingConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(config.level)
        .with_target(config.with_target)
        .try_init()
}
