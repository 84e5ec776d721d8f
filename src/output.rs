//! Report file output

use crate::{ReportError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve `path` against `base` unless it is already absolute.
pub fn resolve_path(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

/// Write `html` to `dir/file_name`, creating `dir` if needed.
///
/// The content goes to a temporary sibling first and is renamed into place,
/// so a failed run never leaves a half-written report behind.
pub fn write_report(dir: &Path, file_name: &str, html: &str) -> Result<PathBuf> {
    if file_name.trim().is_empty() {
        return Err(ReportError::InvalidOption(
            "Report file name must not be empty".to_string(),
        ));
    }

    fs::create_dir_all(dir).map_err(|source| ReportError::OutputWriteFailure {
        path: dir.to_path_buf(),
        source,
    })?;

    let path = dir.join(file_name);
    let temp_path = temp_path_for(&path);

    fs::write(&temp_path, html).map_err(|source| ReportError::OutputWriteFailure {
        path: temp_path.clone(),
        source,
    })?;

    if let Err(source) = fs::rename(&temp_path, &path) {
        let _ = fs::remove_file(&temp_path);
        return Err(ReportError::OutputWriteFailure { path, source });
    }

    Ok(path)
}

fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.tmp", name))
}
