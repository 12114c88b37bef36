// tests/integration_tests/ignore_patterns_test.rs
use super::common::{create_test_file, lines, setup_test_directory};
use anyhow::Result;
use spelunk::{Classifier, Patterns, ScanOptions, Totals, UNKNOWN, scan};

#[test]
fn test_ignore_patterns() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "gen/parser.c", &lines(400))?;
    create_test_file(temp_dir.path(), "src/gen/keep.c", &lines(7))?;
    create_test_file(temp_dir.path(), "web/app.min.js", &lines(1))?;

    let options = ScanOptions {
        ignore: Patterns::from_globs(&["# generated code", "gen/*.c", "*.min.js", "README"])?,
        ..ScanOptions::default()
    };

    let report = scan(temp_dir.path(), &options, &Classifier::new())?;

    assert_eq!(
        report.totals_for("C"),
        Totals::new(2, 17),
        "Should skip gen/ at the root only"
    );
    assert!(!report.files.contains_key(UNKNOWN), "Should skip README and app.min.js");

    Ok(())
}

#[test]
fn test_ignored_files_leave_no_location() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "third_party/lib.c", &lines(3))?;

    let options = ScanOptions {
        ignore: Patterns::from_globs(&["third_party/**"])?,
        ..ScanOptions::default()
    };

    let report = scan(temp_dir.path(), &options, &Classifier::new())?;

    assert_eq!(report.locations["C"].len(), 1);
    assert_eq!(report.directory_tally, 2);

    Ok(())
}
