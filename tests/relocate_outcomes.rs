use std::fs;
use std::path::Path;

use asset_relocate::output::Console;
use asset_relocate::{MoveStatus, relocate};
use tempfile::tempdir;

/// Run one relocation with uncolored output and return (outcome, printed lines).
fn run(src: &Path, dst: &Path) -> (asset_relocate::Outcome, Vec<String>) {
    let mut console = Console::new(Vec::new(), false);
    let outcome = relocate(src, dst, &mut console).expect("relocate should succeed");
    let text = String::from_utf8(console.into_inner()).expect("utf8 output");
    (outcome, text.lines().map(str::to_owned).collect())
}

#[test]
fn moves_existing_source_and_confirms() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("We Make It Possible_01.png");
    let dst = td.path().join("iteck-logo.png");
    fs::write(&src, b"logo bytes")?;

    let (outcome, lines) = run(&src, &dst);

    assert!(!src.exists(), "source should be gone");
    assert_eq!(fs::read(&dst)?, b"logo bytes");
    assert_eq!(
        lines,
        vec![
            "✅ Logo renamed successfully!".to_string(),
            format!("New location: {}", dst.display()),
            "✅ Logo file is ready!".to_string(),
        ]
    );
    assert!(matches!(outcome.status, MoveStatus::Moved(_)));
    assert!(outcome.destination_ready);
    Ok(())
}

#[test]
fn neither_path_exists_reports_both_failures() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("missing.png");
    let dst = td.path().join("iteck-logo.png");

    let (outcome, lines) = run(&src, &dst);

    assert!(!src.exists() && !dst.exists());
    assert_eq!(
        lines,
        vec![
            format!("❌ Source file not found: {}", src.display()),
            "❌ Something went wrong".to_string(),
        ]
    );
    assert_eq!(outcome.status, MoveStatus::SourceMissing);
    assert!(!outcome.destination_ready);
    Ok(())
}

#[test]
fn leftover_destination_still_confirms_after_not_found() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("missing.png");
    let dst = td.path().join("iteck-logo.png");
    fs::write(&dst, b"from an earlier run")?;

    let (outcome, lines) = run(&src, &dst);

    assert_eq!(
        lines,
        vec![
            format!("❌ Source file not found: {}", src.display()),
            "✅ Logo file is ready!".to_string(),
        ]
    );
    assert_eq!(outcome.status, MoveStatus::SourceMissing);
    assert!(outcome.destination_ready);
    assert_eq!(fs::read(&dst)?, b"from an earlier run");
    Ok(())
}

#[test]
fn existing_destination_is_overwritten() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("new.png");
    let dst = td.path().join("iteck-logo.png");
    fs::write(&src, b"new logo")?;
    fs::write(&dst, b"old logo")?;

    let (outcome, lines) = run(&src, &dst);

    assert!(!src.exists());
    assert_eq!(fs::read(&dst)?, b"new logo");
    assert_eq!(lines.first().map(String::as_str), Some("✅ Logo renamed successfully!"));
    assert_eq!(lines.last().map(String::as_str), Some("✅ Logo file is ready!"));
    assert!(outcome.destination_ready);
    Ok(())
}

#[test]
fn second_run_repeats_not_found_then_ready() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("We Make It Possible_01.png");
    let dst = td.path().join("iteck-logo.png");
    fs::write(&src, b"logo")?;

    let (first, _) = run(&src, &dst);
    assert!(matches!(first.status, MoveStatus::Moved(_)));

    let (second, lines) = run(&src, &dst);
    assert_eq!(
        lines,
        vec![
            format!("❌ Source file not found: {}", src.display()),
            "✅ Logo file is ready!".to_string(),
        ]
    );
    assert_eq!(second.status, MoveStatus::SourceMissing);

    let (_, third) = run(&src, &dst);
    assert_eq!(third, lines, "further runs print the same pattern");
    Ok(())
}

#[test]
fn move_fault_propagates_before_destination_check() -> Result<(), Box<dyn std::error::Error>> {
    let td = tempdir()?;
    let src = td.path().join("logo.png");
    let dst = td.path().join("no_such_dir").join("iteck-logo.png");
    fs::write(&src, b"logo")?;

    let mut console = Console::new(Vec::new(), false);
    let err = relocate(&src, &dst, &mut console).expect_err("missing destination dir must fail");
    let printed = String::from_utf8(console.into_inner())?;

    assert!(printed.is_empty(), "no status lines expected, got {printed:?}");
    assert!(src.exists(), "source must be left in place");
    assert!(!dst.exists());
    let msg = format!("{err:#}");
    assert!(msg.contains("no_such_dir"), "error should name the path: {msg}");
    Ok(())
}
