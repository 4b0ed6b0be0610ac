use super::Backend;
use crate::error::{NotesError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Backend over a single JSON file. The path is used verbatim: parent
/// directories are neither created nor validated.
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl Backend for FileBackend {
    fn load_raw(&self) -> Result<Option<String>> {
        if !self.path.is_file() {
            tracing::debug!(path = %self.path.display(), "no data file yet");
            return Ok(None);
        }
        let content = fs::read_to_string(&self.path).map_err(NotesError::Io)?;
        Ok(Some(content))
    }

    fn save_raw(&self, contents: &str) -> Result<()> {
        // Plain truncating write; a crash here can leave a partial file.
        fs::write(&self.path, contents).map_err(NotesError::Io)
    }
}
