use crate::ports::{QueryResolver, ResolverExit, RuleSource};
use rblcheck_domain::{
    build_queries, DomainError, Ipv4Address, QueryName, RblRule, ReversedAddress,
};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Result of one completed check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckOutcome {
    pub address: Ipv4Address,
    pub query_count: usize,
    pub exit: ResolverExit,
}

/// Use case: validate an address, build its RBL query names and hand them to
/// the resolver.
///
/// Every stage finishes before the next starts. Validation and rule loading
/// failures return before the resolver is touched.
pub struct CheckAddressUseCase {
    rule_source: Arc<dyn RuleSource>,
    resolver: Arc<dyn QueryResolver>,
}

impl CheckAddressUseCase {
    pub fn new(rule_source: Arc<dyn RuleSource>, resolver: Arc<dyn QueryResolver>) -> Self {
        Self {
            rule_source,
            resolver,
        }
    }

    #[instrument(skip(self))]
    pub async fn execute(&self, raw_address: &str) -> Result<CheckOutcome, DomainError> {
        let address = Ipv4Address::parse(raw_address)?;
        let reversed = address.reversed();
        debug!(%address, %reversed, "Address validated");

        let queries = self.build(&reversed)?;
        let query_count = queries.len();
        info!(%address, queries = query_count, "Query names built");

        let exit = self.resolver.resolve(queries).await?;
        info!(%address, exit_code = exit.code, "Resolver finished");

        Ok(CheckOutcome {
            address,
            query_count,
            exit,
        })
    }

    fn build(&self, reversed: &ReversedAddress) -> Result<Vec<QueryName>, DomainError> {
        let rules = self
            .rule_source
            .rules()?
            .collect::<Result<Vec<RblRule>, DomainError>>()?;

        Ok(build_queries(reversed, rules).collect())
    }
}
