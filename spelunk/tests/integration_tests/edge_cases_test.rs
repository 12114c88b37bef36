// tests/integration_tests/edge_cases_test.rs
use super::common::{create_test_file, lines};
use anyhow::Result;
use spelunk::{Classifier, ScanOptions, Totals, UNKNOWN, scan};
use std::fs;
use tempfile::TempDir;

#[test]
fn test_empty_tree() -> Result<()> {
    let temp_dir = TempDir::new()?;
    fs::create_dir_all(temp_dir.path().join("empty/nested"))?;

    let report = scan(temp_dir.path(), &ScanOptions::default(), &Classifier::new())?;

    assert!(report.files.is_empty());
    assert_eq!(report.grand_total(), Totals::default());
    assert_eq!(report.directory_tally, 0);

    Ok(())
}

#[test]
fn test_empty_and_binary_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "empty.c", "")?;
    create_test_file(temp_dir.path(), "no_newline.c", "int x;")?;
    fs::write(temp_dir.path().join("blob.c"), [0xc3_u8, 0x28, b'\n', b'\n'])?;

    let report = scan(temp_dir.path(), &ScanOptions::default(), &Classifier::new())?;

    assert_eq!(
        report.totals_for("C"),
        Totals::new(3, 1),
        "Empty and undecodable files count as zero lines"
    );
    assert_eq!(report.directory_tally, 3);

    Ok(())
}

#[test]
fn test_special_names_in_subdirectories() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "lib/Makefile", &lines(4))?;
    create_test_file(temp_dir.path(), "lib/rules.mk", &lines(2))?;
    create_test_file(temp_dir.path(), "configure", &lines(30))?;
    create_test_file(temp_dir.path(), "lib/GNUmakefile", &lines(1))?;
    create_test_file(temp_dir.path(), ".hidden.py", &lines(1))?;

    let report = scan(temp_dir.path(), &ScanOptions::default(), &Classifier::new())?;

    assert_eq!(report.totals_for("Makefile"), Totals::new(2, 6));
    assert_eq!(report.totals_for("Autoconf"), Totals::new(1, 30));
    assert_eq!(report.totals_for(UNKNOWN), Totals::new(1, 1));
    assert_eq!(
        report.totals_for("Python"),
        Totals::new(1, 1),
        "Hidden files are scanned like any other"
    );

    Ok(())
}

#[test]
fn test_mixed_case_extensions_are_unknown() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "Main.JAVA", &lines(3))?;
    create_test_file(temp_dir.path(), "util.C", &lines(2))?;

    let report = scan(temp_dir.path(), &ScanOptions::default(), &Classifier::new())?;

    assert_eq!(report.files.keys().collect::<Vec<_>>(), vec![UNKNOWN]);
    assert_eq!(report.totals_for(UNKNOWN), Totals::new(2, 5));

    Ok(())
}
