use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::sync::LazyLock;

static HTML_LANG: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"<html[^>]+lang=["']([^"']+)["']"#));

pub fn check(doc: &Document) -> CheckResult {
    match HTML_LANG.captures(&doc.text).and_then(|caps| caps.get(1)) {
        Some(lang) => CheckResult::new("lang", vec![], vec![format!("HTML lang: {}", lang.as_str())]),
        None => CheckResult::new(
            "lang",
            vec!["Missing lang attribute on <html>".to_string()],
            vec![],
        ),
    }
}
