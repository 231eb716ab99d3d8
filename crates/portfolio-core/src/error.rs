//! Error types for the portfolio core

use thiserror::Error;

/// Main error type for portfolio core operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// Catalog JSON could not be parsed
    #[error("Catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),

    /// Two records share the same id
    #[error("Duplicate project id: {0}")]
    DuplicateProject(String),

    /// A record has an empty id
    #[error("Project at position {0} has an empty id")]
    EmptyProjectId(usize),

    /// A record has no images to show in the gallery
    #[error("Project has no images: {0}")]
    EmptyGallery(String),

    /// A theme name other than "light" or "dark"
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// Error during storage operations (redb)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Database creation/opening error
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    /// Transaction error
    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    /// Table error
    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    /// Storage operation error
    #[error("Storage operation error: {0}")]
    StorageOp(#[from] redb::StorageError),

    /// Commit error
    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using PortfolioError
pub type PortfolioResult<T> = Result<T, PortfolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PortfolioError::DuplicateProject("fursah".to_string());
        assert_eq!(format!("{}", err), "Duplicate project id: fursah");
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: PortfolioError = io_err.into();
        assert!(matches!(err, PortfolioError::Io(_)));
    }

    #[test]
    fn test_error_from_json() {
        let json_err = serde_json::from_str::<Vec<u8>>("not json").unwrap_err();
        let err: PortfolioError = json_err.into();
        assert!(matches!(err, PortfolioError::CatalogParse(_)));
    }
}
