use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("Malformed line {line_number} in {}: missing separator {separator:?}", path.display())]
    MalformedLine {
        path: PathBuf,
        line_number: usize,
        separator: char,
    },

    #[error("Word is not valid UTF-8: {0}")]
    InvalidEncoding(#[from] std::str::Utf8Error),

    #[error("Storage error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DictionaryError>;
