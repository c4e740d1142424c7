use rblcheck_application::ports::{RuleIter, RuleSource};
use rblcheck_domain::{config::DEFAULT_RULES_FILE, rbl_rule::split_record, DomainError, RblRule};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Rule file reader (`-s <zone>` per line).
pub struct RuleFileLoader {
    path: PathBuf,
}

impl RuleFileLoader {
    pub fn new() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_RULES_FILE),
        }
    }

    /// Create a loader reading from a custom path
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Open the file and return a lazy scan over its rules.
    pub fn open(&self) -> Result<RuleLines, DomainError> {
        let file = File::open(&self.path).map_err(|e| DomainError::ConfigMissing {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        // Directories open fine on Linux and only fail on the first read.
        let is_file = file.metadata().map(|m| m.is_file()).unwrap_or(false);
        if !is_file {
            return Err(DomainError::ConfigMissing {
                path: self.path.clone(),
                reason: "not a regular file".to_string(),
            });
        }

        debug!(path = %self.path.display(), "Rule file opened");
        Ok(RuleLines {
            reader: Some(BufReader::new(file)),
            path: self.path.clone(),
            line_no: 0,
            buf: Vec::new(),
        })
    }
}

impl Default for RuleFileLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleSource for RuleFileLoader {
    fn rules(&self) -> Result<RuleIter, DomainError> {
        Ok(Box::new(self.open()?))
    }
}

/// Lazy iterator over the rules of one opened file, in file order.
///
/// The file is closed as soon as the scan reaches its end or hits a read
/// error; nothing is yielded afterwards.
pub struct RuleLines {
    reader: Option<BufReader<File>>,
    path: PathBuf,
    line_no: usize,
    buf: Vec<u8>,
}

impl Iterator for RuleLines {
    type Item = Result<RblRule, DomainError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let reader = self.reader.as_mut()?;
            self.buf.clear();

            match reader.read_until(b'\n', &mut self.buf) {
                Ok(0) => {
                    debug!(path = %self.path.display(), lines = self.line_no, "Rule file scanned");
                    self.reader = None;
                    return None;
                }
                Ok(_) => self.line_no += 1,
                Err(e) => {
                    self.reader = None;
                    return Some(Err(DomainError::IoError(format!(
                        "Failed to read {}: {}",
                        self.path.display(),
                        e
                    ))));
                }
            }

            let Ok(line) = std::str::from_utf8(&self.buf) else {
                warn!(line = self.line_no, "Skipping rule line that is not valid UTF-8");
                continue;
            };

            if let Some(rule) = RblRule::from_line(line) {
                trace!(line = self.line_no, zone = %rule.zone_suffix, "Rule selected");
                return Some(Ok(rule));
            }

            if let Some((key, value)) = split_record(line) {
                debug!(line = self.line_no, key, value, "Skipping rule line");
            }
        }
    }
}
