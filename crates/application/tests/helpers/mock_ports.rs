#![allow(dead_code)]

use async_trait::async_trait;
use rblcheck_application::ports::{QueryResolver, ResolverExit, RuleIter, RuleSource};
use rblcheck_domain::{DomainError, QueryName, RblRule};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Mock RuleSource
// ============================================================================

pub struct MockRuleSource {
    lines: Option<Vec<String>>,
    opened: AtomicUsize,
}

impl MockRuleSource {
    /// Behaves like a rule file with these lines.
    pub fn with_lines(lines: &[&str]) -> Self {
        Self {
            lines: Some(lines.iter().map(|l| l.to_string()).collect()),
            opened: AtomicUsize::new(0),
        }
    }

    /// Behaves like an absent rule file.
    pub fn missing() -> Self {
        Self {
            lines: None,
            opened: AtomicUsize::new(0),
        }
    }

    pub fn open_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

impl RuleSource for MockRuleSource {
    fn rules(&self) -> Result<RuleIter, DomainError> {
        self.opened.fetch_add(1, Ordering::SeqCst);
        let lines = self.lines.clone().ok_or_else(|| DomainError::ConfigMissing {
            path: PathBuf::from("rblcheckrc"),
            reason: "No such file or directory".to_string(),
        })?;

        Ok(Box::new(
            lines
                .into_iter()
                .filter_map(|line| RblRule::from_line(&line))
                .map(Ok::<RblRule, DomainError>),
        ))
    }
}

// ============================================================================
// Mock QueryResolver
// ============================================================================

#[derive(Clone)]
pub struct RecordingResolver {
    received: Arc<Mutex<Vec<Vec<String>>>>,
    exit_code: i32,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::with_exit_code(0)
    }

    pub fn with_exit_code(exit_code: i32) -> Self {
        Self {
            received: Arc::new(Mutex::new(Vec::new())),
            exit_code,
        }
    }

    pub fn calls(&self) -> usize {
        self.received.lock().unwrap().len()
    }

    pub fn last_queries(&self) -> Vec<String> {
        self.received
            .lock()
            .unwrap()
            .last()
            .cloned()
            .unwrap_or_default()
    }
}

#[async_trait]
impl QueryResolver for RecordingResolver {
    async fn resolve(&self, queries: Vec<QueryName>) -> Result<ResolverExit, DomainError> {
        self.received
            .lock()
            .unwrap()
            .push(queries.iter().map(|q| q.to_string()).collect());
        Ok(ResolverExit::new(self.exit_code))
    }
}

// ============================================================================
// Failing RuleSource (error surfaces mid-scan)
// ============================================================================

pub struct BrokenRuleSource;

impl RuleSource for BrokenRuleSource {
    fn rules(&self) -> Result<RuleIter, DomainError> {
        let first = RblRule::select("ok.example").map(Ok::<RblRule, DomainError>);
        let broken = Some(Err(DomainError::IoError(
            "stream did not contain valid UTF-8".to_string(),
        )));
        Ok(Box::new(first.into_iter().chain(broken)))
    }
}
