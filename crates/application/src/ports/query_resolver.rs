use async_trait::async_trait;
use rblcheck_domain::{DomainError, QueryName};

/// How the resolver run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolverExit {
    pub code: i32,
}

impl ResolverExit {
    pub const SUCCESS: ResolverExit = ResolverExit { code: 0 };

    pub fn new(code: i32) -> Self {
        Self { code }
    }

    pub fn is_success(&self) -> bool {
        self.code == 0
    }
}

/// Consumer of the produced query names.
///
/// The implementation decides what "resolving" means (an external bulk
/// resolver process, stdout, ...). Its exit status becomes the run's status.
#[async_trait]
pub trait QueryResolver: Send + Sync {
    async fn resolve(&self, queries: Vec<QueryName>) -> Result<ResolverExit, DomainError>;
}
