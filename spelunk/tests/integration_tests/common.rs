// tests/integration_tests/common.rs
use anyhow::Result;
use std::fs;
use std::io::Write as _;
use std::path::Path;
use tempfile::TempDir;

pub fn create_test_file(dir: &Path, name: &str, content: &str) -> Result<()> {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = fs::File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}

pub fn create_config_file(dir: &Path, content: &str) -> Result<()> {
    create_test_file(dir, ".spelunk.toml", content)
}

/// `count` newline-terminated lines of filler text.
pub fn lines(count: usize) -> String {
    (1..=count).map(|n| format!("line {n}\n")).collect()
}

/// a.c (10 lines), b.py (5 lines) and README (3 lines).
pub fn setup_test_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "a.c", &lines(10))?;
    create_test_file(temp_dir.path(), "b.py", &lines(5))?;
    create_test_file(temp_dir.path(), "README", &lines(3))?;

    Ok(temp_dir)
}

/// src/y.java (8 lines) next to vendor/x.java (20 lines).
pub fn setup_vendor_directory() -> Result<TempDir> {
    let temp_dir = TempDir::new()?;

    create_test_file(temp_dir.path(), "src/y.java", &lines(8))?;
    create_test_file(temp_dir.path(), "vendor/x.java", &lines(20))?;

    Ok(temp_dir)
}
