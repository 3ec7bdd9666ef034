//! Write-rename file output.
//!
//! Exports land in `{path}.tmp` first and are renamed into place once fully
//! flushed, so a reader never sees a half-written CSV.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::export_error::ExportError;

fn tmp_path_for(path: &Path) -> PathBuf {
    let mut name: OsString = path.as_os_str().to_owned();
    name.push(".tmp");
    PathBuf::from(name)
}

/// Atomically replace the contents of `path` with `data`, creating parent
/// directories as needed.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<(), ExportError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let tmp_path = tmp_path_for(path);
    let mut file = File::create(&tmp_path)?;
    file.write_all(data)?;
    file.sync_all()?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("resilience_export_test_{name}"));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn test_writes_file_without_leftover_tmp() {
        let dir = test_dir("creates");
        let path = dir.join("table.csv");

        atomic_write(&path, b"year,quality\n2025,100\n").unwrap();

        assert_eq!(fs::read(&path).unwrap(), b"year,quality\n2025,100\n");
        assert!(!tmp_path_for(&path).exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_overwrites_existing() {
        let dir = test_dir("overwrites");
        let path = dir.join("table.csv");

        atomic_write(&path, b"first").unwrap();
        atomic_write(&path, b"second").unwrap();
        assert_eq!(fs::read(&path).unwrap(), b"second");

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_creates_missing_parent_dirs() {
        let dir = test_dir("nested");
        let path = dir.join("a").join("b").join("table.json");

        atomic_write(&path, b"[]").unwrap();
        assert!(path.exists());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_tmp_path_appends_suffix() {
        let tmp = tmp_path_for(Path::new("out/debt.csv"));
        assert_eq!(tmp, PathBuf::from("out/debt.csv.tmp"));
    }
}
