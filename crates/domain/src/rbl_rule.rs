use std::fmt;
use std::sync::Arc;

/// Directives recognized in the rule file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleDirective {
    /// `-s <zone-suffix>`: check the address against this RBL zone.
    Select,
}

impl RuleDirective {
    pub const SELECT_MARKER: &'static str = "-s";

    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            Self::SELECT_MARKER => Some(RuleDirective::Select),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleDirective::Select => Self::SELECT_MARKER,
        }
    }
}

/// A zone selected for checking.
///
/// The suffix is never empty, carries no surrounding whitespace, has no
/// leading dot and at most one trailing dot.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RblRule {
    pub directive: RuleDirective,
    pub zone_suffix: Arc<str>,
}

impl RblRule {
    /// Build a `-s` rule, or `None` when the suffix normalizes to nothing.
    pub fn select(zone_suffix: &str) -> Option<Self> {
        normalize_zone_suffix(zone_suffix).map(|zone| Self {
            directive: RuleDirective::Select,
            zone_suffix: Arc::from(zone),
        })
    }

    /// Parse one rule-file line.
    ///
    /// The key is the first whitespace-delimited token and the value is the
    /// remainder. Returns `None` for blank lines, unknown keys and keys
    /// without a value; none of these are errors.
    pub fn from_line(line: &str) -> Option<Self> {
        let (key, value) = split_record(line)?;
        match RuleDirective::from_key(key)? {
            RuleDirective::Select => Self::select(value),
        }
    }
}

impl fmt::Display for RblRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.directive.as_str(), self.zone_suffix)
    }
}

/// Split a record into key and remainder, dropping the line terminator.
pub fn split_record(line: &str) -> Option<(&str, &str)> {
    let record = line.trim_end_matches(['\n', '\r']).trim_start();
    if record.is_empty() {
        return None;
    }

    match record.split_once(char::is_whitespace) {
        Some((key, rest)) => Some((key, rest.trim())),
        None => Some((record, "")),
    }
}

fn normalize_zone_suffix(raw: &str) -> Option<&str> {
    let zone = raw.trim().trim_start_matches('.');
    let zone = match zone.trim_end_matches('.') {
        bare if bare.len() < zone.len() => &zone[..bare.len() + 1],
        bare => bare,
    };

    if zone.is_empty() {
        return None;
    }
    Some(zone)
}
