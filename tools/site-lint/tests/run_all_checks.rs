use std::fs;
use std::path::Path;

use site_lint::document::Document;

const VALID_PAGE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <title>Example Bakery</title>
  <link rel="canonical" href="https://bakery.example/">
</head>
<body>
  <img src="bread.jpg" alt="A loaf of sourdough">
</body>
</html>
"#;

const INVALID_PAGE: &str = r##"<html>
<head></head>
<body>
  <img src="bread.jpg">
  <a href="#menu">Menu</a>
</body>
</html>
"##;

#[test]
fn valid_page_passes_every_check() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("index.html");
    write_file(&path, VALID_PAGE);

    let doc = Document::load(&path).unwrap();
    let results = site_lint::run_all_checks(&doc);

    assert_eq!(results.len(), 6);
    assert!(results.iter().all(|r| r.passed));
    let notes: Vec<&String> = results.iter().flat_map(|r| &r.notes).collect();
    assert_eq!(notes, vec!["Title: Example Bakery", "HTML lang: en"]);
}

#[test]
fn invalid_page_yields_six_failures() {
    let root = tempfile::tempdir().unwrap();
    let path = root.path().join("index.html");
    write_file(&path, INVALID_PAGE);

    let doc = Document::load(&path).unwrap();
    let results = site_lint::run_all_checks(&doc);

    let failures: Vec<&String> = results.iter().flat_map(|r| &r.violations).collect();
    assert_eq!(
        failures,
        vec![
            "Missing or empty <title>",
            "Missing meta viewport",
            "Missing lang attribute on <html>",
            "Missing <link rel=\"canonical\">",
            "1 <img> tag(s) missing alt attribute",
            "1 internal link(s) target missing id: menu",
        ]
    );
    assert!(results.iter().all(|r| r.notes.is_empty()));
}

#[test]
fn checks_run_in_report_order() {
    let doc = Document::from_text(Path::new("index.html"), "");
    let names: Vec<String> = site_lint::run_all_checks(&doc)
        .into_iter()
        .map(|r| r.name)
        .collect();
    assert_eq!(
        names,
        vec!["title", "viewport", "lang", "canonical", "img alt", "internal links"]
    );
}

fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}
