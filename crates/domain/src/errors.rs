use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Site already configured: {0}")]
    DuplicateDomain(String),

    #[error("Tab unavailable: {0}")]
    TabUnavailable(i64),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("I/O error: {0}")]
    IoError(String),
}
