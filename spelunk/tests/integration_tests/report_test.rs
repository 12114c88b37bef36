// tests/integration_tests/report_test.rs
use super::common::{create_config_file, create_test_file, lines, setup_test_directory};
use anyhow::Result;
use spelunk::cli::{Pretty, WhatArgs, what_report};

#[test]
fn test_plain_report_for_tree() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let text = what_report(temp_dir.path(), &WhatArgs::default())?;

    assert!(text.starts_with("Type\t\tNumber\t\tLines\nC\t\t1\t\t10\nPython\t\t1\t\t5\n"));
    assert!(text.contains("Identified Code\t\t2\t15\n"));
    assert!(text.contains("Unknown\t\t\t1\t3\n"));
    assert!(text.contains("Total\t\t\t3\t18\n"));
    assert!(!text.contains("Number of directories"));

    Ok(())
}

#[test]
fn test_where_report_lists_directories() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "src/b.c", &lines(2))?;
    create_test_file(temp_dir.path(), "lib/c.c", &lines(2))?;
    let args = WhatArgs {
        r#where: true,
        ..WhatArgs::default()
    };

    let text = what_report(temp_dir.path(), &args)?;

    let root = temp_dir.path().display().to_string();
    let lib = temp_dir.path().join("lib").display().to_string();
    let src = temp_dir.path().join("src").display().to_string();
    let c_rows = format!("C\t\t3\t\t14\n\t{root}\t1\n\t{lib}\t1\n\t{src}\t1\nPython");
    assert!(text.contains(&c_rows), "directories sorted under their category:\n{text}");
    assert!(text.ends_with("Number of directories\t4\n"));

    Ok(())
}

#[test]
fn test_html_and_latex_totals_agree() -> Result<()> {
    let temp_dir = setup_test_directory()?;

    let html = what_report(
        temp_dir.path(),
        &WhatArgs {
            pretty: Some(Pretty::Html),
            ..WhatArgs::default()
        },
    )?;
    let latex = what_report(
        temp_dir.path(),
        &WhatArgs {
            pretty: Some(Pretty::Latex),
            ..WhatArgs::default()
        },
    )?;

    assert!(html.contains("<tr><td>Total</td><td>3</td><td>18</td></tr>"));
    assert!(latex.contains("Total & 3 & 18\\\\\\hline"));
    assert!(html.contains("<tr><td>Identified Code</td><td>2</td><td>15</td></tr>"));
    assert!(latex.contains("Identified Code & 2 & 15\\\\"));

    Ok(())
}

#[test]
fn test_config_extends_table_and_excludes() -> Result<()> {
    let temp_dir = setup_test_directory()?;
    create_test_file(temp_dir.path(), "src/main.rs", &lines(6))?;
    create_test_file(temp_dir.path(), "target/debug/build.rs", &lines(50))?;
    create_test_file(temp_dir.path(), "third_party/x.py", &lines(9))?;
    create_config_file(
        temp_dir.path(),
        "[what]\nexclude = [\"target\"]\nignore = [\"README\"]\n\n[what.extensions]\nrs = \"Rust\"\n",
    )?;
    let args = WhatArgs {
        exclude: vec![String::from("third_party")],
        ..WhatArgs::default()
    };

    let text = what_report(temp_dir.path(), &args)?;

    assert!(text.contains("Rust\t\t1\t\t6\n"));
    assert!(text.contains("Python\t\t1\t\t5\n"));
    // .spelunk.toml itself is the only unknown file left
    assert!(text.contains("Unknown\t\t\t1\t"));
    assert!(text.contains("Identified Code\t\t3\t21\n"));

    Ok(())
}

#[test]
fn test_explicit_config_must_exist() {
    let temp_dir = setup_test_directory().expect("fixture");
    let args = WhatArgs {
        config: Some(temp_dir.path().join("missing.toml")),
        ..WhatArgs::default()
    };

    let err = what_report(temp_dir.path(), &args).expect_err("missing config should fail");
    assert!(err.to_string().contains("Failed to read config file"));
}
