use std::path::PathBuf;
use std::process;

use clap::Parser;

use site_lint::config::LinterConfig;
use site_lint::document::Document;

/// Static accessibility/SEO checks for a single HTML page.
#[derive(Debug, Parser)]
#[command(version)]
struct Cli {
    /// Page to check (defaults to index.html at the repository root)
    path: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    let config = LinterConfig::resolve(cli.path.as_deref());

    let doc = match Document::load(&config.target) {
        Ok(doc) => doc,
        Err(err) => {
            site_lint::reporter::print_load_error(&err);
            process::exit(2);
        }
    };

    let results = site_lint::run_all_checks(&doc);
    let all_passed = site_lint::reporter::print_report(&results);

    process::exit(if all_passed { 0 } else { 1 });
}
