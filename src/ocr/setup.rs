use anyhow::{anyhow, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::log;

/// Locations checked for a tesseract install when it is not on PATH.
#[cfg(windows)]
const COMMON_EXECUTABLES: &[&str] = &[
    r"C:\Program Files\Tesseract-OCR\tesseract.exe",
    r"C:\Program Files (x86)\Tesseract-OCR\tesseract.exe",
];
#[cfg(not(windows))]
const COMMON_EXECUTABLES: &[&str] = &[
    "/usr/bin/tesseract",
    "/usr/local/bin/tesseract",
    "/opt/homebrew/bin/tesseract",
];

/// Finds the tesseract executable, checking PATH first, then common
/// install locations.
pub fn find_tesseract_executable() -> Result<PathBuf> {
    if let Ok(output) = Command::new("tesseract").arg("--version").output() {
        if output.status.success() {
            return Ok(PathBuf::from("tesseract"));
        }
    }

    for path in COMMON_EXECUTABLES {
        let p = PathBuf::from(path);
        if p.exists() {
            log(&format!("Found Tesseract at: {}", p.display()));
            return Ok(p);
        }
    }

    Err(anyhow!(
        "Tesseract not found. Please install Tesseract-OCR and make sure \
         the `tesseract` binary is on PATH."
    ))
}

/// Finds a tessdata directory worth passing explicitly, if any.
///
/// Checked in order: the config override, TESSDATA_PREFIX, the per-user
/// data directory. `None` lets tesseract fall back to its compiled-in
/// default, which is correct for package-manager installs.
pub fn find_tessdata_dir(override_dir: Option<&str>, language: &str) -> Option<PathBuf> {
    let prefix = std::env::var("TESSDATA_PREFIX").ok();
    resolve_tessdata_dir(
        override_dir,
        prefix.as_deref(),
        dirs::data_local_dir().as_deref(),
        language,
    )
}

/// Candidate walk behind [`find_tessdata_dir`], with the environment
/// lookups passed in so tests control them.
fn resolve_tessdata_dir(
    override_dir: Option<&str>,
    tessdata_prefix: Option<&str>,
    data_dir: Option<&Path>,
    language: &str,
) -> Option<PathBuf> {
    let traineddata = format!("{}.traineddata", language);

    if let Some(dir) = override_dir {
        let p = PathBuf::from(dir);
        if p.join(&traineddata).exists() {
            return Some(p);
        }
        log(&format!(
            "Configured tessdata_dir {} does not contain {}; ignoring it",
            dir, traineddata
        ));
    }

    if let Some(prefix) = tessdata_prefix {
        for candidate in [PathBuf::from(prefix), PathBuf::from(prefix).join("tessdata")] {
            if candidate.join(&traineddata).exists() {
                return Some(candidate);
            }
        }
    }

    if let Some(data_dir) = data_dir {
        let p = data_dir.join("sudoku-snap").join("tessdata");
        if p.join(&traineddata).exists() {
            return Some(p);
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn tessdata_dir_with(language: &str) -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(format!("{}.traineddata", language)),
            b"stub",
        )
        .unwrap();
        dir
    }

    #[test]
    fn test_override_with_traineddata_wins() {
        let dir = tessdata_dir_with("eng");
        let found = resolve_tessdata_dir(dir.path().to_str(), None, None, "eng");
        assert_eq!(found, Some(dir.path().to_path_buf()));
    }

    #[test]
    fn test_override_missing_language_is_skipped() {
        let dir = tessdata_dir_with("eng");
        let found = resolve_tessdata_dir(dir.path().to_str(), None, None, "fin");
        assert_eq!(found, None);
    }

    #[test]
    fn test_prefix_is_used_after_override_fails() {
        let broken_override = tempfile::tempdir().unwrap();
        let prefix = tessdata_dir_with("eng");
        let found = resolve_tessdata_dir(
            broken_override.path().to_str(),
            prefix.path().to_str(),
            None,
            "eng",
        );
        assert_eq!(found, Some(prefix.path().to_path_buf()));
    }

    #[test]
    fn test_prefix_tessdata_subdirectory() {
        let prefix = tempfile::tempdir().unwrap();
        let sub = prefix.path().join("tessdata");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join("eng.traineddata"), b"stub").unwrap();

        let found = resolve_tessdata_dir(None, prefix.path().to_str(), None, "eng");
        assert_eq!(found, Some(sub));
    }

    #[test]
    fn test_user_data_dir_is_last_resort() {
        let data = tempfile::tempdir().unwrap();
        let sub = data.path().join("sudoku-snap").join("tessdata");
        fs::create_dir_all(&sub).unwrap();
        fs::write(sub.join("eng.traineddata"), b"stub").unwrap();

        let found = resolve_tessdata_dir(None, None, Some(data.path()), "eng");
        assert_eq!(found, Some(sub));
    }

    #[test]
    fn test_nothing_found_is_none() {
        assert_eq!(resolve_tessdata_dir(None, None, None, "eng"), None);
    }
}
