// crates/infra/src/persistence/file_reader.rs
use std::{
    fs::File,
    io::{self, Read},
    path::Path,
};

use text_count_shared_kernel::{InfraResult, InfrastructureError};

/// Largest input accepted for counting (10 MiB).
pub const MAX_INPUT_BYTES: u64 = 10 * 1024 * 1024;

/// Name used in errors for standard input.
pub const STDIN_NAME: &str = "<stdin>";

/// Size-limited text reading. Invalid UTF-8 is replaced rather than rejected.
pub struct FileReader;

impl FileReader {
    /// # Errors
    ///
    /// [`InfrastructureError::FileRead`] when the file cannot be read and
    /// [`InfrastructureError::InputTooLarge`] above `limit` bytes.
    pub fn read_text(path: &Path, limit: u64) -> InfraResult<String> {
        let read_error = |source| InfrastructureError::FileRead { path: path.to_path_buf(), source };
        let file = File::open(path).map_err(read_error)?;

        // reject early when the size is known up front
        if let Ok(meta) = file.metadata()
            && meta.is_file()
            && meta.len() > limit
        {
            return Err(too_large(&path.display().to_string(), meta.len(), limit));
        }
        Self::read_limited(file, &path.display().to_string(), limit).map_err(|err| match err {
            LimitedRead::Io(source) => read_error(source),
            LimitedRead::TooLarge(e) => e,
        })
    }

    /// Reads `reader` to the end, e.g. standard input.
    ///
    /// # Errors
    ///
    /// See [`Self::read_text`]; `name` stands in for the path.
    pub fn read_text_from<R: Read>(reader: R, name: &str, limit: u64) -> InfraResult<String> {
        Self::read_limited(reader, name, limit).map_err(|err| match err {
            LimitedRead::Io(source) => InfrastructureError::FileRead { path: name.into(), source },
            LimitedRead::TooLarge(e) => e,
        })
    }

    fn read_limited<R: Read>(reader: R, name: &str, limit: u64) -> Result<String, LimitedRead> {
        let mut bytes = Vec::new();
        reader.take(limit.saturating_add(1)).read_to_end(&mut bytes).map_err(LimitedRead::Io)?;
        let size = bytes.len() as u64;
        if size > limit {
            return Err(LimitedRead::TooLarge(too_large(name, size, limit)));
        }
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

enum LimitedRead {
    Io(io::Error),
    TooLarge(InfrastructureError),
}

fn too_large(name: &str, size: u64, limit: u64) -> InfrastructureError {
    InfrastructureError::InputTooLarge { source_name: name.to_string(), size, limit }
}
