//! Persisting the verified artifact.
//!
//! Writes go to a `.part` temp file first, then an atomic rename puts the
//! final name in place. A crash mid-write leaves only the `.part` file, never
//! a truncated file under the final name that could pass for a verified
//! artifact. Overwrites an existing file at the final path.

use anyhow::{Context, Result};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Temporary file suffix used before atomic rename.
pub const TEMP_SUFFIX: &str = ".part";

/// Path for the temp file: appends `.part` to the final path
/// (e.g. `installer.exe` -> `installer.exe.part`).
pub fn temp_path(final_path: &Path) -> PathBuf {
    let mut o = final_path.as_os_str().to_owned();
    o.push(TEMP_SUFFIX);
    PathBuf::from(o)
}

/// Write `data` to `<dest_dir>/<filename>` via temp file and atomic rename.
/// Returns the final path written. Syncs before the rename so the renamed
/// file is durable.
pub fn persist(data: &[u8], dest_dir: &Path, filename: &str) -> Result<PathBuf> {
    let final_path = dest_dir.join(filename);
    let tp = temp_path(&final_path);

    let mut file = File::options()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&tp)
        .with_context(|| format!("failed to create temp file: {}", tp.display()))?;
    file.write_all(data)
        .with_context(|| format!("failed to write {}", tp.display()))?;
    file.sync_all()
        .with_context(|| format!("failed to sync {}", tp.display()))?;
    drop(file);

    std::fs::rename(&tp, &final_path).with_context(|| {
        format!(
            "failed to rename {} to {}",
            tp.display(),
            final_path.display()
        )
    })?;
    Ok(final_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn temp_path_appends_part() {
        let p = temp_path(Path::new("installer.exe"));
        assert_eq!(p.to_string_lossy(), "installer.exe.part");
        let p2 = temp_path(Path::new("/tmp/archive.zip"));
        assert_eq!(p2.to_string_lossy(), "/tmp/archive.zip.part");
    }

    #[test]
    fn persist_roundtrip_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let data: Vec<u8> = (0u8..=255).cycle().take(10_000).collect();
        let path = persist(&data, dir.path(), "out.bin").unwrap();
        assert_eq!(path, dir.path().join("out.bin"));
        assert!(!temp_path(&path).exists());
        let read_back = std::fs::read(&path).unwrap();
        assert_eq!(read_back, data);
    }

    #[test]
    fn persist_overwrites_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = persist(b"first contents", dir.path(), "out.bin").unwrap();
        let path2 = persist(b"second", dir.path(), "out.bin").unwrap();
        assert_eq!(path, path2);
        assert_eq!(std::fs::read(&path).unwrap(), b"second");
    }

    #[test]
    fn persist_into_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no-such-subdir");
        let err = persist(b"data", &missing, "out.bin");
        assert!(err.is_err());
        assert!(!missing.exists());
    }
}
