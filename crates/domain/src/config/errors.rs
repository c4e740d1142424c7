use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid log level '{0}' (expected trace, debug, info, warn or error)")]
    InvalidLogLevel(String),

    #[error("Invalid log format '{0}' (expected text or json)")]
    InvalidLogFormat(String),

    #[error("Resolver program cannot be empty")]
    EmptyResolverProgram,

    #[error("Rules file path cannot be empty")]
    EmptyRulesPath,
}
