use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::sync::LazyLock;

static TITLE: LazyLock<Regex> = LazyLock::new(|| pattern(r"<title\s*>(.*?)</title>"));

pub fn check(doc: &Document) -> CheckResult {
    let title = TITLE
        .captures(&doc.text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
        .filter(|t| !t.is_empty());

    match title {
        Some(t) => CheckResult::new("title", vec![], vec![format!("Title: {t}")]),
        None => CheckResult::new("title", vec!["Missing or empty <title>".to_string()], vec![]),
    }
}
