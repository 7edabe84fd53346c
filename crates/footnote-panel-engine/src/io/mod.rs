use relative_path::{RelativePath, RelativePathBuf};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid notes directory: {0}")]
    InvalidNotesDir(String),
}

/// Read a document's raw bytes
pub fn read_file(relative_path: &RelativePath, notes_root: &Path) -> Result<Vec<u8>, IoError> {
    let absolute_path = relative_path.to_path(notes_root);
    if !absolute_path.exists() {
        return Err(IoError::NotFound(absolute_path));
    }
    fs::read(&absolute_path).map_err(IoError::Io)
}

/// Checks that a notes root exists and is a directory.
pub fn validate_notes_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() || !path.is_dir() {
        return Err(IoError::InvalidNotesDir(format!(
            "{} is not a directory",
            path.display()
        )));
    }

    Ok(())
}

/// Where the panel gets the text of the active document from.
///
/// `read` returns raw bytes; decoding belongs to the parser so that an
/// undecodable document is reported as a parse failure, not a read failure.
pub trait DocumentSource {
    /// Label of the active document, or `None` when nothing is open.
    fn active_document(&self) -> Option<String>;

    fn read(&self) -> Result<Vec<u8>, IoError>;
}

/// Reads the active document from a notes directory on disk.
#[derive(Debug, Clone)]
pub struct FileDocumentSource {
    notes_root: PathBuf,
    active: Option<RelativePathBuf>,
}

impl FileDocumentSource {
    pub fn new(notes_root: impl Into<PathBuf>) -> Self {
        Self {
            notes_root: notes_root.into(),
            active: None,
        }
    }

    /// Splits a file path into its parent directory and file name.
    pub fn for_file(path: &Path) -> Self {
        let notes_root = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf);
        let mut source = Self::new(notes_root);
        if let Some(name) = path.file_name() {
            source.open(RelativePathBuf::from(name.to_string_lossy().as_ref()));
        }
        source
    }

    pub fn open(&mut self, document: RelativePathBuf) {
        self.active = Some(document);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn notes_root(&self) -> &Path {
        &self.notes_root
    }

    /// Absolute path of the active document, if one is open.
    pub fn active_path(&self) -> Option<PathBuf> {
        self.active
            .as_ref()
            .map(|relative| relative.to_path(&self.notes_root))
    }
}

impl DocumentSource for FileDocumentSource {
    fn active_document(&self) -> Option<String> {
        self.active.as_ref().map(|p| p.as_str().to_string())
    }

    fn read(&self) -> Result<Vec<u8>, IoError> {
        match &self.active {
            Some(relative) => read_file(relative, &self.notes_root),
            None => Err(IoError::NotFound(self.notes_root.clone())),
        }
    }
}

/// An in-memory document, for hosts that already hold the buffer.
#[derive(Debug, Clone, Default)]
pub struct StaticDocumentSource {
    document: Option<(String, String)>,
}

impl StaticDocumentSource {
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            document: Some((name.into(), text.into())),
        }
    }

    /// A source with no open document.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        if let Some((_, current)) = self.document.as_mut() {
            *current = text.into();
        }
    }
}

impl DocumentSource for StaticDocumentSource {
    fn active_document(&self) -> Option<String> {
        self.document.as_ref().map(|(name, _)| name.clone())
    }

    fn read(&self) -> Result<Vec<u8>, IoError> {
        self.document
            .as_ref()
            .map(|(_, text)| text.clone().into_bytes())
            .ok_or_else(|| IoError::NotFound(PathBuf::new()))
    }
}
