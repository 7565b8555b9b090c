use thiserror::Error;

/// Every failure the store, the editor capture and the command surface can report.
#[derive(Debug, Error)]
pub enum KeeperError {
    #[error("No such {entity}: {key}")]
    NotFound { entity: &'static str, key: String },

    #[error("Folder already exists: {0}")]
    FolderExists(String),

    #[error("Alias already in use: {0}")]
    AliasInUse(String),

    #[error("Folder '{name}' still holds {sheets} sheet(s)")]
    FolderNotEmpty { name: String, sheets: usize },

    #[error("Invalid {0}: must not be empty")]
    InvalidName(&'static str),

    #[error("Storage I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("Store file is malformed: {0}")]
    Format(#[from] serde_json::Error),

    #[error("Editor failed: {0}")]
    Editor(String),

    #[error("Captured sheet content is empty")]
    EmptyContent,

    #[error("Captured sheet content is {actual} bytes, limit is {limit}")]
    ContentTooLarge { limit: usize, actual: usize },
}

impl KeeperError {
    pub fn folder_not_found(key: impl ToString) -> Self {
        KeeperError::NotFound {
            entity: "folder",
            key: key.to_string(),
        }
    }

    pub fn sheet_not_found(key: impl ToString) -> Self {
        KeeperError::NotFound {
            entity: "sheet",
            key: key.to_string(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, KeeperError::NotFound { .. })
    }

    /// True for failures of the underlying storage rather than of the request.
    pub fn is_store_io(&self) -> bool {
        matches!(self, KeeperError::Io(_) | KeeperError::Format(_))
    }
}

pub type KeeperResult<T> = Result<T, KeeperError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = KeeperError::folder_not_found("work");
        assert_eq!(err.to_string(), "No such folder: work");
        assert!(err.is_not_found());
        assert!(!err.is_store_io());
    }

    #[test]
    fn test_io_is_store_io() {
        let err: KeeperError = std::io::Error::other("disk gone").into();
        assert!(err.is_store_io());
        assert!(err.to_string().contains("disk gone"));
    }
}
