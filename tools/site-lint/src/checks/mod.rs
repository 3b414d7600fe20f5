pub mod canonical;
pub mod img_alt;
pub mod internal_anchors;
pub mod lang;
pub mod title;
pub mod viewport;

use regex::Regex;

use crate::document::Document;

pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub violations: Vec<String>,
    /// Informational lines echoed even on success (e.g. the page title).
    pub notes: Vec<String>,
}

impl CheckResult {
    pub fn new(name: &str, violations: Vec<String>, notes: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            passed: violations.is_empty(),
            violations,
            notes,
        }
    }
}

/// Patterns are compiled case-insensitive with `.` spanning newlines.
pub(crate) fn pattern(source: &str) -> Regex {
    Regex::new(&format!("(?is){source}")).unwrap()
}
