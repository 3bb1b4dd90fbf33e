use thiserror::Error;

/// Common errors for every stage of an access export
#[derive(Error, Debug)]
pub enum AccessError {
    #[error("Authentication failed")]
    Unauthorized,

    #[error("Access denied (check the admin account permissions)")]
    Forbidden,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AccessError>;
