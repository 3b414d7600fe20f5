pub mod checks;
pub mod config;
pub mod document;
pub mod reporter;

use checks::CheckResult;
use document::Document;

pub type CheckFn = fn(&Document) -> CheckResult;

/// Every check, in report order.
pub const CHECKS: &[CheckFn] = &[
    checks::title::check,
    checks::viewport::check,
    checks::lang::check,
    checks::canonical::check,
    checks::img_alt::check,
    checks::internal_anchors::check,
];

pub fn run_all_checks(doc: &Document) -> Vec<CheckResult> {
    let debug_timing = std::env::var("SITE_LINT_TIMING").is_ok();
    let mut results = Vec::new();
    for check_fn in CHECKS {
        let start = std::time::Instant::now();
        let result = check_fn(doc);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
        }
        results.push(result);
    }
    results
}
