use rblcheck_application::ports::{QueryResolver, RuleSource};
use rblcheck_application::use_cases::CheckAddressUseCase;
use rblcheck_domain::{Config, OutputMode};
use rblcheck_infrastructure::{ProcessResolverBridge, RuleFileLoader, StdoutQuerySink};
use std::sync::Arc;

pub struct UseCases {
    pub check_address: CheckAddressUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let rule_source: Arc<dyn RuleSource> =
            Arc::new(RuleFileLoader::with_path(&config.rules_path));

        let resolver: Arc<dyn QueryResolver> = match config.output {
            OutputMode::Resolve => Arc::new(ProcessResolverBridge::new(config.resolver.clone())),
            OutputMode::PrintQueries => Arc::new(StdoutQuerySink::new()),
        };

        Self {
            check_address: CheckAddressUseCase::new(rule_source, resolver),
        }
    }
}
