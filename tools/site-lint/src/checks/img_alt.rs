use crate::checks::{pattern, CheckResult};
use crate::document::Document;
use regex::Regex;
use std::sync::LazyLock;

static IMG_TAG: LazyLock<Regex> = LazyLock::new(|| pattern(r"<img\b[^>]*>"));

// The closing quote must match the opening one.
static ALT_ATTR: LazyLock<Regex> =
    LazyLock::new(|| pattern(r#"alt\s*=\s*(?:"(.*?)"|'(.*?)')"#));

#[derive(Debug, Default, PartialEq, Eq)]
pub struct AltCounts {
    pub missing: usize,
    pub empty: usize,
}

pub fn count_alt_text(text: &str) -> AltCounts {
    let mut counts = AltCounts::default();
    for tag in IMG_TAG.find_iter(text) {
        let alt = ALT_ATTR
            .captures(tag.as_str())
            .and_then(|caps| caps.get(1).or_else(|| caps.get(2)));
        match alt {
            None => counts.missing += 1,
            Some(value) if value.as_str().trim().is_empty() => counts.empty += 1,
            Some(_) => {}
        }
    }
    counts
}

pub fn check(doc: &Document) -> CheckResult {
    let counts = count_alt_text(&doc.text);
    let mut violations = Vec::new();

    if counts.missing > 0 {
        violations.push(format!(
            "{} <img> tag(s) missing alt attribute",
            counts.missing
        ));
    }
    if counts.empty > 0 {
        violations.push(format!("{} <img> tag(s) with empty alt", counts.empty));
    }

    CheckResult::new("img alt", violations, vec![])
}
