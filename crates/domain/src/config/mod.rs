//! Configuration module for rblcheck
//!
//! - `root`: Main configuration and CLI overrides
//! - `resolver`: External resolver invocation
//! - `logging`: Logging settings
//! - `errors`: Configuration errors

pub mod errors;
pub mod logging;
pub mod resolver;
pub mod root;

pub use errors::ConfigError;
pub use logging::{LogFormat, LoggingConfig};
pub use resolver::ResolverConfig;
pub use root::{CliOverrides, Config, OutputMode, DEFAULT_RULES_FILE};
