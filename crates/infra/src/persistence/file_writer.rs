// crates/infra/src/persistence/file_writer.rs
use std::{
    fs::{self, File},
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};

use text_count_shared_kernel::{InfraResult, InfrastructureError};

/// Helper utilities for writing files.
pub struct FileWriter;

impl FileWriter {
    /// Atomically write `data` to `path` via a temp file and rename.
    ///
    /// Missing parent directories are created. Best-effort fsync is attempted
    /// so a crash leaves either the old or the new content.
    ///
    /// # Errors
    ///
    /// Returns [`InfrastructureError::FileWrite`] naming the path that failed.
    pub fn atomic_write<P: AsRef<Path>>(path: P, data: &[u8]) -> InfraResult<()> {
        let path = path.as_ref();
        let parent = path.parent().unwrap_or_else(|| Path::new(""));
        fs::create_dir_all(parent).map_err(|source| write_error(parent, source))?;

        let tmp = temp_path(parent, path);
        Self::write_synced(&tmp, data).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            write_error(&tmp, source)
        })?;
        fs::rename(&tmp, path).map_err(|source| {
            let _ = fs::remove_file(&tmp);
            write_error(path, source)
        })?;

        // make the rename durable on Unix
        #[cfg(unix)]
        if let Ok(dir) = File::open(parent) {
            let _ = dir.sync_all();
        }

        Ok(())
    }

    /// [`Self::atomic_write`] for UTF-8 text.
    ///
    /// # Errors
    ///
    /// See [`Self::atomic_write`].
    pub fn write_text<P: AsRef<Path>>(path: P, text: &str) -> InfraResult<()> {
        Self::atomic_write(path, text.as_bytes())
    }

    fn write_synced(path: &Path, data: &[u8]) -> std::io::Result<()> {
        let mut w = BufWriter::new(File::create(path)?);
        w.write_all(data)?;
        w.flush()?;
        let _ = w.get_ref().sync_all();
        Ok(())
    }
}

/// Unique sibling of `target` so the final rename stays on one filesystem.
fn temp_path(parent: &Path, target: &Path) -> PathBuf {
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let stem = target.file_name().map(|n| n.to_string_lossy().into_owned()).unwrap_or_default();
    parent.join(format!(".{stem}.{}.{nanos}.tmp", std::process::id()))
}

fn write_error(path: &Path, source: std::io::Error) -> InfrastructureError {
    InfrastructureError::FileWrite { path: path.to_path_buf(), source }
}
