pub mod query_resolver;
pub mod rule_source;

pub use query_resolver::{QueryResolver, ResolverExit};
pub use rule_source::{RuleIter, RuleSource};
