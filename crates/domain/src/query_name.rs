use super::{RblRule, ReversedAddress};
use std::fmt;
use std::sync::Arc;

/// Fully-qualified RBL query name: `<reversed-address>.<zone-suffix>`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QueryName(Arc<str>);

impl QueryName {
    pub fn new(reversed: &ReversedAddress, rule: &RblRule) -> Self {
        Self(Arc::from(format!("{}.{}", reversed, rule.zone_suffix)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for QueryName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for QueryName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// One query name per rule, in rule order. Duplicate rules yield duplicate names.
pub fn build_queries<'a, I>(
    reversed: &'a ReversedAddress,
    rules: I,
) -> impl Iterator<Item = QueryName> + 'a
where
    I: IntoIterator<Item = RblRule>,
    I::IntoIter: 'a,
{
    rules
        .into_iter()
        .map(move |rule| QueryName::new(reversed, &rule))
}
