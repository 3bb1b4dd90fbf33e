use access_core::AccessError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JenkinsError {
    #[error("HTTP error: {0}")]
    Http(#[from] ureq::Error),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Authentication failed")]
    Unauthorized,

    #[error("Access denied")]
    Forbidden,

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
}

pub type Result<T> = std::result::Result<T, JenkinsError>;

impl From<JenkinsError> for AccessError {
    fn from(err: JenkinsError) -> Self {
        match err {
            JenkinsError::Http(e) => AccessError::Http(e.to_string()),
            JenkinsError::Parse(e) => AccessError::Parse(e.to_string()),
            JenkinsError::Unauthorized => AccessError::Unauthorized,
            JenkinsError::Forbidden => AccessError::Forbidden,
            JenkinsError::Api { status, message } => AccessError::Api { status, message },
        }
    }
}
