//! Integration tests for the model directory scan.

use std::fs;

use detailkit::scan_model_dir;

#[test]
fn test_scan_counts_only_checkpoint_extensions() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;

    // 3 allowed files, 2 disallowed ones
    fs::write(dir.path().join("face.pt"), b"")?;
    fs::write(dir.path().join("hand.pth"), b"")?;
    fs::write(dir.path().join("person.pt"), b"")?;
    fs::write(dir.path().join("readme.txt"), b"")?;
    fs::write(dir.path().join("weights.onnx"), b"")?;

    let found = scan_model_dir(dir.path());
    assert_eq!(found.len(), 3);

    Ok(())
}

#[test]
fn test_scan_recurses_into_subdirectories() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let nested = dir.path().join("a").join("b");
    fs::create_dir_all(&nested)?;

    fs::write(dir.path().join("top.pt"), b"")?;
    fs::write(nested.join("deep.pth"), b"")?;

    let found = scan_model_dir(dir.path());
    assert_eq!(found.len(), 2);

    Ok(())
}

#[test]
fn test_scan_missing_path_is_empty() {
    assert!(scan_model_dir("/definitely/not/a/real/path").is_empty());
}

#[test]
fn test_scan_empty_string_is_empty() {
    assert!(scan_model_dir("").is_empty());
}

#[test]
fn test_scan_file_path_is_empty() -> anyhow::Result<()> {
    let dir = tempfile::TempDir::new()?;
    let file = dir.path().join("model.pt");
    fs::write(&file, b"")?;

    assert!(scan_model_dir(&file).is_empty());

    Ok(())
}
