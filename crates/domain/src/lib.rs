//! rblcheck Domain Layer
pub mod config;
pub mod errors;
pub mod ipv4_address;
pub mod query_name;
pub mod rbl_rule;

pub use config::{
    CliOverrides, Config, ConfigError, LogFormat, LoggingConfig, OutputMode, ResolverConfig,
    DEFAULT_RULES_FILE,
};
pub use errors::DomainError;
pub use ipv4_address::{Ipv4Address, ReversedAddress};
pub use query_name::{build_queries, QueryName};
pub use rbl_rule::{RblRule, RuleDirective};
