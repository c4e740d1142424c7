use std::path::PathBuf;
use thiserror::Error;

/// Exit code for every local precondition failure.
pub const EXIT_LOCAL_FAILURE: u8 = 1;

/// Exit code when the resolver program cannot be started (shell convention).
pub const EXIT_RESOLVER_UNAVAILABLE: u8 = 127;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("missing IPv4 address argument")]
    MissingArgument,

    #[error("invalid IPv4 address format: '{0}' (expected four dot-separated octets)")]
    InvalidFormat(String),

    #[error("invalid IPv4 address: octet '{0}' is not numeric")]
    NonNumeric(String),

    #[error("invalid IPv4 address: octet '{0}' is out of range (0-255)")]
    OutOfRange(String),

    #[error("configuration file '{}' not found: {reason}", path.display())]
    ConfigMissing { path: PathBuf, reason: String },

    #[error("I/O error: {0}")]
    IoError(String),

    #[error("failed to start resolver '{program}': {reason}")]
    ResolverUnavailable { program: String, reason: String },

    #[error("resolver I/O error: {0}")]
    ResolverIo(String),
}

impl DomainError {
    /// Process exit code reported for this failure.
    pub fn exit_code(&self) -> u8 {
        match self {
            DomainError::ResolverUnavailable { .. } => EXIT_RESOLVER_UNAVAILABLE,
            _ => EXIT_LOCAL_FAILURE,
        }
    }
}
