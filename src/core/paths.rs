//! Purpose: Resolve source and destination paths to canonical absolute form.
//! Exports: `resolve_path`, `resolve_source`.
//! Role: Shared by the local load flow and the file sink so both report the same path text.
//! Invariants: Resolution happens before any existence check.
//! Invariants: No tilde expansion; callers pass already-expanded paths.

use super::error::{Error, ErrorKind};
use std::path::{Component, Path, PathBuf};
use tracing::debug;

/// Resolve `path` like `realpath(3)` in non-strict mode.
///
/// Existing paths are canonicalized. For a path that does not exist yet, the
/// deepest existing ancestor is canonicalized and the remaining components
/// are appended lexically, so a missing file is still reported in resolved form.
pub fn resolve_path(path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let path = path.as_ref();
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = std::env::current_dir().map_err(|err| {
            Error::new(ErrorKind::Io)
                .with_message("failed to read current directory")
                .with_path(path)
                .with_source(err)
        })?;
        cwd.join(path)
    };

    if let Ok(canonical) = absolute.canonicalize() {
        return Ok(canonical);
    }

    let normalized = lexical_normalize(&absolute);
    for ancestor in normalized.ancestors().skip(1) {
        if let Ok(base) = ancestor.canonicalize() {
            let rest = normalized.strip_prefix(ancestor).unwrap_or(&normalized);
            return Ok(base.join(rest));
        }
    }
    Ok(normalized)
}

/// Resolve `path` and require that it exists.
pub fn resolve_source(path: impl AsRef<Path>) -> Result<PathBuf, Error> {
    let resolved = resolve_path(path)?;
    debug!("Checking file: {}", resolved.display());
    if !resolved.exists() {
        return Err(Error::new(ErrorKind::NotFound)
            .with_message(format!("No such file '{}'", resolved.display()))
            .with_path(resolved));
    }
    Ok(resolved)
}

fn lexical_normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
