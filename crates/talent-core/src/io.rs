use crate::error::Result;
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

/// Replace `path` with `data` in one rename, creating parent directories.
pub fn atomic_write(path: &Path, data: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(data)?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    std::fs::create_dir_all(path)?;
    Ok(())
}

/// Serialize `value` as YAML and write it atomically.
pub fn write_yaml<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let data = serde_yaml::to_string(value)?;
    atomic_write(path, data.as_bytes())
}

/// Like [`write_yaml`], but leaves an existing file untouched.
/// Returns whether the file was written.
pub fn write_yaml_if_missing<T: Serialize>(path: &Path, value: &T) -> Result<bool> {
    if path.exists() {
        tracing::debug!(path = %path.display(), "keeping existing file");
        return Ok(false);
    }
    write_yaml(path, value)?;
    Ok(true)
}
