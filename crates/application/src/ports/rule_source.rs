use rblcheck_domain::{DomainError, RblRule};

/// Rules in source order. Unrecognized records never appear in it.
pub type RuleIter = Box<dyn Iterator<Item = Result<RblRule, DomainError>> + Send>;

/// Application-layer port for the rule set (RBL zones to check).
///
/// Every call to `rules` starts a fresh scan of the source, so the sequence
/// can be consumed once per call and restarted by calling again.
pub trait RuleSource: Send + Sync {
    /// Open the source. Fails with `DomainError::ConfigMissing` when it
    /// cannot be read at all; per-record problems are skipped, not reported.
    fn rules(&self) -> Result<RuleIter, DomainError>;
}
