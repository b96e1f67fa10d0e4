// src/core/locator.rs
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::{FieldUsageError, Result};
use crate::models::{LocatedFile, MetadataKind};

/// Finds every definition file of the given kind beneath `root`.
///
/// The walk is depth-first and unbounded in depth. Directory entries are
/// visited in whatever order the file system lists them, so callers that
/// need a stable order must sort the result themselves. Symbolic links are
/// followed.
///
/// # Errors
///
/// * [`FieldUsageError::InvalidPath`] if `root` is missing or not a
///   directory, or if an entry vanishes before it is visited
/// * [`FieldUsageError::Io`] if a directory cannot be listed
pub fn locate_files(root: &Path, kind: MetadataKind) -> Result<Vec<LocatedFile>> {
    let root = absolute_root(root)?;
    ensure_exists(&root)?;
    if !root.is_dir() {
        return Err(FieldUsageError::InvalidPath { path: root });
    }

    let suffix = kind.suffix();
    let mut files = Vec::new();

    for entry in WalkDir::new(&root).follow_links(true) {
        let entry = entry.map_err(|err| walk_error(&root, err))?;
        ensure_exists(entry.path())?;

        if entry.file_type().is_dir() {
            continue;
        }

        let name = entry.file_name().to_string_lossy().into_owned();
        if name.ends_with(&suffix) {
            debug!(path = %entry.path().display(), "located {kind} definition");
            files.push(LocatedFile::new(name, entry.into_path()));
        }
    }

    Ok(files)
}

/// Re-checks that `path` still exists.
///
/// # Errors
///
/// Returns [`FieldUsageError::InvalidPath`] naming `path` when it is gone.
pub fn ensure_exists(path: &Path) -> Result<()> {
    if path.exists() {
        Ok(())
    } else {
        Err(FieldUsageError::InvalidPath {
            path: path.to_path_buf(),
        })
    }
}

fn absolute_root(root: &Path) -> Result<PathBuf> {
    if root.is_absolute() {
        return Ok(root.to_path_buf());
    }
    let cwd = env::current_dir().map_err(|source| FieldUsageError::Io {
        path: root.to_path_buf(),
        source,
    })?;
    Ok(cwd.join(root))
}

fn walk_error(root: &Path, err: walkdir::Error) -> FieldUsageError {
    let path = err.path().map_or_else(|| root.to_path_buf(), Path::to_path_buf);
    let not_found = err
        .io_error()
        .is_some_and(|io_err| io_err.kind() == io::ErrorKind::NotFound);
    if not_found {
        FieldUsageError::InvalidPath { path }
    } else {
        FieldUsageError::Io {
            path,
            source: io::Error::from(err),
        }
    }
}
