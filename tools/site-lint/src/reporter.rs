use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::CheckResult;
use crate::document::LoadError;

pub fn print_load_error(err: &LoadError) {
    println!(
        "{} {}",
        "ERROR:".if_supports_color(Stdout, |s| s.red()),
        err
    );
}

/// Print the report for all check results. Returns true if all passed.
pub fn print_report(results: &[CheckResult]) -> bool {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, results).ok();
    results.iter().all(|r| r.passed)
}

/// Plain-text report; colour is applied only when stdout is a terminal.
pub fn write_report(out: &mut impl Write, results: &[CheckResult]) -> io::Result<()> {
    for note in results.iter().flat_map(|r| &r.notes) {
        writeln!(out, "{note}")?;
    }

    let names: Vec<&str> = results.iter().map(|r| r.name.as_str()).collect();
    writeln!(out, "\nChecks run: {}", names.join(", "))?;

    let failures: Vec<&String> = results.iter().flat_map(|r| &r.violations).collect();
    if failures.is_empty() {
        writeln!(
            out,
            "\nResult: {}",
            "PASS".if_supports_color(Stdout, |s| s.green())
        )?;
    } else {
        writeln!(
            out,
            "\n{}",
            "FAILURES:".if_supports_color(Stdout, |s| s.bold())
        )?;
        for f in &failures {
            writeln!(out, " - {f}")?;
        }
        writeln!(
            out,
            "\nResult: {}",
            "FAIL".if_supports_color(Stdout, |s| s.red())
        )?;
    }
    Ok(())
}
