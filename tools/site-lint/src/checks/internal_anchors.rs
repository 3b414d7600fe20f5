use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::collections::HashSet;
use std::sync::LazyLock;

static FRAGMENT_HREF: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"href\s*=\s*["']#([^"']+)["']"#));

static ID_ATTR: LazyLock<Regex> = LazyLock::new(|| pattern(r#"id\s*=\s*["']([^"']+)["']"#));

/// Fragment targets in document order, duplicates included.
pub fn fragment_targets(text: &str) -> Vec<&str> {
    FRAGMENT_HREF
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn declared_ids(text: &str) -> HashSet<&str> {
    ID_ATTR
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect()
}

pub fn broken_targets(text: &str) -> Vec<&str> {
    let ids = declared_ids(text);
    fragment_targets(text)
        .into_iter()
        .filter(|target| !ids.contains(target))
        .collect()
}

pub fn check(doc: &Document) -> CheckResult {
    let broken = broken_targets(&doc.text);
    let mut violations = Vec::new();

    if !broken.is_empty() {
        violations.push(format!(
            "{} internal link(s) target missing id: {}",
            broken.len(),
            broken.join(", ")
        ));
    }

    CheckResult::new("internal links", violations, vec![])
}
