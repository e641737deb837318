//! Result document output

use crate::builder::ResultDocument;
use crate::core::{ConvertError, Result};
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Destination for the result document
pub struct OutputWriter {
    writer: Box<dyn Write>,
    target: PathBuf,
}

impl OutputWriter {
    /// Writer for stdout
    pub fn stdout() -> Self {
        Self {
            writer: Box::new(io::stdout()),
            target: PathBuf::from("<stdout>"),
        }
    }

    /// Writer for a file; an existing file is truncated
    pub fn file(path: &Path) -> Result<Self> {
        let file = File::create(path).map_err(|e| ConvertError::io(path, e))?;
        Ok(Self {
            writer: Box::new(file),
            target: path.to_path_buf(),
        })
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Writes the whole document and flushes
    pub fn write_document(&mut self, document: &ResultDocument) -> Result<()> {
        let json = document.to_pretty_json()?;
        self.writer
            .write_all(json.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|e| ConvertError::io(&self.target, e))
    }
}
