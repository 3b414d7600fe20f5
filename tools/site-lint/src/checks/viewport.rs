use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::sync::LazyLock;

static VIEWPORT_META: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"<meta[^>]+name=["']viewport["']"#));

pub fn check(doc: &Document) -> CheckResult {
    let mut violations = Vec::new();
    if !VIEWPORT_META.is_match(&doc.text) {
        violations.push("Missing meta viewport".to_string());
    }
    CheckResult::new("viewport", violations, vec![])
}
