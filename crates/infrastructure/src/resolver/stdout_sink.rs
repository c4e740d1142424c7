use async_trait::async_trait;
use rblcheck_application::ports::{QueryResolver, ResolverExit};
use rblcheck_domain::{DomainError, QueryName};
use std::io::{self, BufWriter, Write};
use tracing::debug;

/// Prints query names to stdout instead of resolving them.
#[derive(Debug, Default)]
pub struct StdoutQuerySink;

impl StdoutQuerySink {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl QueryResolver for StdoutQuerySink {
    async fn resolve(&self, queries: Vec<QueryName>) -> Result<ResolverExit, DomainError> {
        let stdout = io::stdout();
        match write_queries(stdout.lock(), &queries) {
            Ok(()) => Ok(ResolverExit::SUCCESS),
            // Reader went away (e.g. piped into `head`).
            Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                debug!("stdout closed early");
                Ok(ResolverExit::SUCCESS)
            }
            Err(e) => Err(DomainError::IoError(format!("Failed to write queries: {e}"))),
        }
    }
}

pub(crate) fn write_queries<W: Write>(out: W, queries: &[QueryName]) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    for query in queries {
        writeln!(out, "{query}")?;
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rblcheck_domain::{build_queries, Ipv4Address, RblRule};

    #[test]
    fn test_write_queries_one_per_line() {
        let reversed = Ipv4Address::parse("192.0.2.1").unwrap().reversed();
        let rules = vec![
            RblRule::select("zen.spamhaus.org").unwrap(),
            RblRule::select("bl.spamcop.net").unwrap(),
        ];
        let queries: Vec<QueryName> = build_queries(&reversed, rules).collect();

        let mut out = Vec::new();
        write_queries(&mut out, &queries).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "1.2.0.192.zen.spamhaus.org\n1.2.0.192.bl.spamcop.net\n"
        );
    }

    #[test]
    fn test_write_no_queries_writes_nothing() {
        let mut out = Vec::new();
        write_queries(&mut out, &[]).unwrap();

        assert!(out.is_empty());
    }
}
