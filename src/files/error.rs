use thiserror::Error;

#[derive(Error, Debug)]
pub enum FileError {
    #[error("Invalid root path: {0}")]
    InvalidRoot(String),

    #[error("Empty path provided")]
    EmptyPath,

    #[error("No data provided for {0}, use touch_file to create an empty file")]
    EmptyData(String),

    #[error("File not found: {0}")]
    NotFound(String),

    #[error("Destination already exists: {0}")]
    AlreadyExists(String),

    #[error("Expected a file path, got a directory path: {0}")]
    NotAFile(String),

    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk {path}: {source}")]
    Walk {
        path: String,
        #[source]
        source: walkdir::Error,
    },
}

impl FileError {
    pub(crate) fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
