// ============================================================================
// Utilities Module
// Helpers for programs embedding the library
// ============================================================================

mod logging;

pub use logging::{init_logging, LoggingConfig, LOG_LEVEL_ENV};
