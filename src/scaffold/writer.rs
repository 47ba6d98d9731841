//! Ordered, conflict-aware scaffold file writing.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GraphdevError, Result};
use crate::scaffold::templates::ScaffoldFileSet;

/// Write a rendered file set under `out_dir`, in set order.
///
/// Returns the absolute paths written. When `force` is false and a
/// destination already exists, writing stops with
/// [`GraphdevError::FileAlreadyExists`] naming that path; files written
/// earlier in the same invocation are left in place (write-as-you-go,
/// no rollback).
pub fn write_file_set(out_dir: &Path, files: &ScaffoldFileSet, force: bool) -> Result<Vec<PathBuf>> {
    let mut created = Vec::with_capacity(files.len());

    for file in files.files() {
        let destination = out_dir.join(&file.relative_path);
        write_file(&destination, &file.content, force)?;
        tracing::debug!("wrote {}", destination.display());
        created.push(destination);
    }

    Ok(created)
}

/// Write one file, creating missing parent directories.
fn write_file(path: &Path, content: &str, force: bool) -> Result<()> {
    if path.exists() && !force {
        return Err(GraphdevError::FileAlreadyExists {
            path: path.to_path_buf(),
        });
    }
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, content)?;
    Ok(())
}
