//! Document sources: a folder of `.txt` files, or an in-memory list

use crate::error::ClassifierError;
use rolecheck_domain::{Document, DocumentSource};
use std::ffi::OsStr;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Default file extension of eligible documents
pub const DEFAULT_EXTENSION: &str = "txt";

/// Reads every `.txt` file directly inside a folder
///
/// Files are returned sorted by file name. Invalid UTF-8 is replaced rather
/// than rejected.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    dir: PathBuf,
    extension: String,
}

impl DirectorySource {
    /// Create a source over `dir`
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            extension: DEFAULT_EXTENSION.to_string(),
        }
    }

    /// Use a different file extension
    pub fn with_extension(mut self, extension: impl Into<String>) -> Self {
        self.extension = extension.into();
        self
    }

    /// The folder being read
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn is_eligible(&self, path: &Path) -> bool {
        path.is_file() && path.extension() == Some(OsStr::new(&self.extension))
    }
}

impl DocumentSource for DirectorySource {
    type Error = ClassifierError;

    fn documents(&self) -> Result<Vec<Document>, ClassifierError> {
        if !self.dir.exists() {
            return Err(ClassifierError::MissingInput(self.dir.clone()));
        }

        let mut files: Vec<(String, PathBuf)> = Vec::new();
        for entry in fs::read_dir(&self.dir)? {
            let path = entry?.path();
            if !self.is_eligible(&path) {
                continue;
            }
            if let Some(name) = path.file_name() {
                files.push((name.to_string_lossy().into_owned(), path.clone()));
            }
        }

        if files.is_empty() {
            return Err(ClassifierError::NoDocuments(format!(
                "{} (*.{})",
                self.dir.display(),
                self.extension
            )));
        }

        files.sort_by(|a, b| a.0.cmp(&b.0));
        debug!("Found {} documents in {}", files.len(), self.dir.display());

        files
            .into_iter()
            .map(|(name, path)| {
                let bytes = fs::read(&path)?;
                Ok(Document::new(name, String::from_utf8_lossy(&bytes).into_owned()))
            })
            .collect()
    }
}

/// A fixed list of documents
#[derive(Debug, Clone, Default)]
pub struct InMemorySource {
    documents: Vec<Document>,
}

impl InMemorySource {
    /// Create a source from documents
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    /// Add a document
    pub fn with_document(mut self, id: impl Into<String>, text: impl Into<String>) -> Self {
        self.documents.push(Document::new(id, text));
        self
    }
}

impl DocumentSource for InMemorySource {
    type Error = ClassifierError;

    fn documents(&self) -> Result<Vec<Document>, ClassifierError> {
        if self.documents.is_empty() {
            return Err(ClassifierError::NoDocuments("in-memory source".to_string()));
        }
        Ok(self.documents.clone())
    }
}
