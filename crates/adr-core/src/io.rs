use crate::error::Result;
use std::ffi::OsString;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Mode of newly created files. Replaced files keep their own mode.
#[cfg(unix)]
const FILE_MODE: u32 = 0o644;

/// Write `data` to `path` through a tempfile in the same directory, replacing
/// any existing file. Protects a single file against partial writes; two calls
/// in a row are still two independent writes.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    set_target_permissions(tmp.as_file(), path)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Tempfiles are created owner-only; give the file the mode of the file it
/// replaces, or `FILE_MODE` when there is none.
#[cfg(unix)]
fn set_target_permissions(file: &std::fs::File, target: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let perms = match std::fs::metadata(target) {
        Ok(meta) => meta.permissions(),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            std::fs::Permissions::from_mode(FILE_MODE)
        }
        Err(e) => return Err(e.into()),
    };
    file.set_permissions(perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn set_target_permissions(file: &std::fs::File, target: &Path) -> Result<()> {
    if let Ok(meta) = std::fs::metadata(target) {
        file.set_permissions(meta.permissions())?;
    }
    Ok(())
}

/// Create a directory and all parents, idempotent.
pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Names of the entries in `dir` ending with `suffix`, sorted lexically.
///
/// `read_dir` makes no ordering promise, so callers that care about listing
/// order get byte-wise filename order here. Names are returned as found on
/// disk, so joining one onto `dir` always gives the real path.
pub fn entries_with_suffix(dir: &Path, suffix: &str) -> Result<Vec<OsString>> {
    let mut names = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let name = entry?.file_name();
        if name.to_string_lossy().ends_with(suffix) {
            names.push(name);
        }
    }
    names.sort();
    Ok(names)
}
