//! Local CSV source: a file on disk, or stdin when the path is `-`.

use crate::domain::error::CorrelationError;
use crate::ports::source_port::SourcePort;
use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

pub const STDIN_PATH: &str = "-";

pub enum FileSource {
    File(PathBuf),
    Stdin,
}

impl FileSource {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if path.as_os_str() == STDIN_PATH {
            FileSource::Stdin
        } else {
            FileSource::File(path.to_path_buf())
        }
    }
}

impl SourcePort for FileSource {
    fn read_text(&self) -> Result<String, CorrelationError> {
        match self {
            FileSource::File(path) => {
                let bytes = fs::read(path).map_err(|e| CorrelationError::Source {
                    reason: format!("failed to read {}: {}", path.display(), e),
                })?;
                // Exports from spreadsheet tools often carry a UTF-8 BOM.
                let bytes = bytes.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(&bytes);
                Ok(String::from_utf8_lossy(bytes).into_owned())
            }
            FileSource::Stdin => {
                let mut text = String::new();
                std::io::stdin()
                    .read_to_string(&mut text)
                    .map_err(|e| CorrelationError::Source {
                        reason: format!("failed to read stdin: {}", e),
                    })?;
                Ok(text)
            }
        }
    }

    fn describe(&self) -> String {
        match self {
            FileSource::File(path) => path.display().to_string(),
            FileSource::Stdin => "stdin".to_string(),
        }
    }
}
