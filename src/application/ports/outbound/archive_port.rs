//! Archive port - bundles named text files into one downloadable archive

pub const TEXT_PLAIN: &str = "text/plain";

/// One file inside an export bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedTextFile {
    pub content: String,
    pub filename: String,
    pub mime_type: String,
}

impl NamedTextFile {
    pub fn text(filename: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            filename: filename.into(),
            mime_type: TEXT_PLAIN.to_string(),
        }
    }
}

/// A finished archive, ready to be handed to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SavedArchive {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("Archive base name cannot be empty")]
    EmptyBaseName,
    #[error("File name cannot be empty")]
    EmptyFileName,
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Bundle error: {0}")]
    Bundle(String),
}

pub trait ArchivePort: Send + Sync {
    /// Bundle `files` into a single archive named after `base_name`
    fn save(&self, files: Vec<NamedTextFile>, base_name: &str) -> Result<SavedArchive, ArchiveError>;
}
