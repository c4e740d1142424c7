//! rblcheck Infrastructure Layer
pub mod resolver;
pub mod rules;

pub use resolver::{ProcessResolverBridge, StdoutQuerySink};
pub use rules::RuleFileLoader;
