use rblcheck_application::ports::RuleSource;
use rblcheck_domain::{DomainError, RblRule};
use rblcheck_infrastructure::RuleFileLoader;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

fn rules_file(content: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content).unwrap();
    file.flush().unwrap();
    file
}

fn zones(loader: &RuleFileLoader) -> Vec<String> {
    loader
        .rules()
        .unwrap()
        .map(|rule| rule.unwrap().zone_suffix.to_string())
        .collect()
}

#[test]
fn test_select_lines_in_file_order() {
    let file = rules_file(b"-s zen.spamhaus.org\n-c 25\n-s bl.spamcop.net\n");
    let loader = RuleFileLoader::with_path(file.path());

    assert_eq!(zones(&loader), vec!["zen.spamhaus.org", "bl.spamcop.net"]);
}

#[test]
fn test_other_keys_blank_and_valueless_lines_are_skipped() {
    let file = rules_file(b"\n# comment line\n-t 2000\n-s\n   \n-s b.barracudacentral.org\n");
    let loader = RuleFileLoader::with_path(file.path());

    assert_eq!(zones(&loader), vec!["b.barracudacentral.org"]);
}

#[test]
fn test_crlf_and_missing_final_newline() {
    let file = rules_file(b"-s a.example\r\n-s b.example");
    let loader = RuleFileLoader::with_path(file.path());

    assert_eq!(zones(&loader), vec!["a.example", "b.example"]);
}

#[test]
fn test_invalid_utf8_line_is_skipped() {
    let file = rules_file(b"-s \xff\xfe.example\n-s ok.example\n");
    let loader = RuleFileLoader::with_path(file.path());

    assert_eq!(zones(&loader), vec!["ok.example"]);
}

#[test]
fn test_empty_file_yields_no_rules() {
    let file = rules_file(b"");
    let loader = RuleFileLoader::with_path(file.path());

    assert!(zones(&loader).is_empty());
}

#[test]
fn test_duplicates_are_kept() {
    let file = rules_file(b"-s dup.example\n-s dup.example\n");
    let loader = RuleFileLoader::with_path(file.path());

    assert_eq!(zones(&loader).len(), 2);
}

#[test]
fn test_scan_is_restartable_per_call() {
    let file = rules_file(b"-s a.example\n-s b.example\n");
    let loader = RuleFileLoader::with_path(file.path());

    let mut first = loader.rules().unwrap();
    assert_eq!(first.next().unwrap().unwrap(), RblRule::select("a.example").unwrap());

    // A new call starts over, independent of the partially consumed scan.
    assert_eq!(zones(&loader), vec!["a.example", "b.example"]);
    assert_eq!(first.next().unwrap().unwrap(), RblRule::select("b.example").unwrap());
    assert!(first.next().is_none());
    assert!(first.next().is_none());
}

#[test]
fn test_missing_file_is_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rblcheckrc");
    let loader = RuleFileLoader::with_path(&path);

    let err = loader.rules().err().unwrap();

    assert!(matches!(err, DomainError::ConfigMissing { path: ref p, .. } if p == &path));
    assert!(err.to_string().contains("rblcheckrc"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_directory_is_config_missing() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("rblcheckrc");
    std::fs::create_dir(&path).unwrap();
    let loader = RuleFileLoader::with_path(&path);

    let err = loader.rules().err().unwrap();

    assert!(matches!(
        err,
        DomainError::ConfigMissing { path: ref p, ref reason } if p == &path && reason == "not a regular file"
    ));
    assert!(err.to_string().contains("rblcheckrc"));
    assert_eq!(err.exit_code(), 1);
}

#[test]
fn test_default_path() {
    assert_eq!(RuleFileLoader::default().path(), Path::new("rblcheckrc"));
}
