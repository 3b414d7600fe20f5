use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::sync::LazyLock;

static CANONICAL_LINK: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"<link[^>]+rel=["']canonical["']"#));

pub fn check(doc: &Document) -> CheckResult {
    let mut violations = Vec::new();
    if !CANONICAL_LINK.is_match(&doc.text) {
        violations.push(r#"Missing <link rel="canonical">"#.to_string());
    }
    CheckResult::new("canonical", violations, vec![])
}
